//! Load the sets and print the query report

use std::path::PathBuf;

use anyhow::Context;

use brickset::adapters::json::{self, JsonRepository};
use brickset::config::BricksetConfig;
use brickset::core::models::LegoSet;
use brickset::output::OutputMode;
use brickset::report::build_report;

/// Settings for a report run, as given on the command line
#[derive(Debug, Default)]
pub struct ReportOptions {
    /// Data file override
    pub data: Option<PathBuf>,
    /// Config file override
    pub config: Option<PathBuf>,
    /// Tag threshold override
    pub max_tags: Option<usize>,
    /// Tag override
    pub tag: Option<String>,
    /// Name prefix override
    pub prefix: Option<String>,
}

/// Load the configured data source once and render every query
pub fn report(options: &ReportOptions, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = match &options.config {
        Some(path) => BricksetConfig::load_from(path)?,
        None => BricksetConfig::load()?,
    };

    if let Some(max_tags) = options.max_tags {
        config.queries.max_tags = max_tags;
    }
    if let Some(tag) = &options.tag {
        config.queries.tag.clone_from(tag);
    }
    if let Some(prefix) = &options.prefix {
        config.queries.name_prefix.clone_from(prefix);
    }

    let (repo, source) = match options.data.clone().or_else(|| config.data_path()) {
        Some(path) => {
            let repo = JsonRepository::<LegoSet>::load(&path)
                .with_context(|| format!("Failed to load sets from {}", path.display()))?;
            (repo, path.display().to_string())
        },
        None => {
            let repo = json::bundled_sets().context("Failed to load bundled sets")?;
            (repo, json::BUNDLED_ORIGIN.to_string())
        },
    };

    log::debug!("Running report over {source}");
    build_report(&repo, &source, &config.queries).render(mode);
    Ok(())
}
