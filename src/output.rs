//! Output formatting for human and JSON modes
//!
//! Query results are collected into a [`QueryReport`] which can be rendered
//! either as human-readable text or machine-parseable JSON.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The value produced by one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// An ordered list of strings
    List(Vec<String>),
    /// A count
    Count(u64),
    /// A total that may have no result
    Total(Option<u64>),
    /// A yes/no answer
    Flag(bool),
    /// A single value that may have no result
    Text(Option<String>),
    /// Frequencies keyed by value
    Counts(BTreeMap<String, u64>),
    /// Sets of values keyed by value
    Groups(BTreeMap<String, BTreeSet<String>>),
}

/// One labelled query result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySection {
    /// Stable identifier, used as the JSON key
    pub key: String,
    /// Human-readable description
    pub label: String,
    /// The result
    pub value: QueryValue,
}

/// Results of a full query run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    /// Where the sets were loaded from
    pub source: String,
    /// Number of sets loaded
    pub sets_loaded: usize,
    /// Query results, in the order they ran
    pub sections: Vec<QuerySection>,
}

impl QueryReport {
    /// Create an empty report for a loaded source
    #[must_use]
    pub fn new(source: impl Into<String>, sets_loaded: usize) -> Self {
        Self {
            source: source.into(),
            sets_loaded,
            sections: Vec::new(),
        }
    }

    /// Append a result
    pub fn push(&mut self, key: &str, label: impl Into<String>, value: QueryValue) {
        self.sections.push(QuerySection {
            key: key.to_string(),
            label: label.into(),
            value,
        });
    }

    /// Look up a result by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.sections.iter().find(|s| s.key == key).map(|s| &s.value)
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Loaded {} set(s) from {}", self.sets_loaded, self.source);

        for section in &self.sections {
            let _ = writeln!(out, "\n{}", format!("{}:", section.label).bold());
            write_value(&mut out, &section.value);
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn write_value(out: &mut String, value: &QueryValue) {
    match value {
        QueryValue::List(items) if items.is_empty() => {
            let _ = writeln!(out, "  (none)");
        },
        QueryValue::List(items) => {
            for item in items {
                let _ = writeln!(out, "  {item}");
            }
        },
        QueryValue::Count(n) | QueryValue::Total(Some(n)) => {
            let _ = writeln!(out, "  {n}");
        },
        QueryValue::Total(None) | QueryValue::Text(None) => {
            let _ = writeln!(out, "  (no result)");
        },
        QueryValue::Flag(flag) => {
            let _ = writeln!(out, "  {flag}");
        },
        QueryValue::Text(Some(text)) => {
            let _ = writeln!(out, "  {text}");
        },
        QueryValue::Counts(counts) if counts.is_empty() => {
            let _ = writeln!(out, "  (none)");
        },
        QueryValue::Counts(counts) => {
            for (key, count) in counts {
                let _ = writeln!(out, "  {key}: {count}");
            }
        },
        QueryValue::Groups(groups) if groups.is_empty() => {
            let _ = writeln!(out, "  (none)");
        },
        QueryValue::Groups(groups) => {
            for (key, members) in groups {
                let joined = members.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
                let _ = writeln!(out, "  {key}: [{joined}]");
            }
        },
    }
}
