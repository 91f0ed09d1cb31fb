//! Lego set model
//!
//! One catalog entry from a Brickset export. Attributes that the export may
//! leave out or set to `null` are `Option`s, so queries can treat them as
//! absent instead of failing.

use serde::{Deserialize, Serialize};

use super::PackagingType;

/// A single set from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    /// Set number, e.g. "10497-1"
    pub number: String,

    /// Display name
    pub name: String,

    /// Piece count, if known
    #[serde(default)]
    pub pieces: Option<u32>,

    /// How the set is packaged
    pub packaging_type: PackagingType,

    /// Free-form labels; `None` when the export has no tag list at all
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Theme name
    pub theme: String,

    /// Subtheme name, if any
    #[serde(default)]
    pub subtheme: Option<String>,
}

impl LegoSet {
    /// Create a set with the required attributes; optional ones start absent
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        packaging_type: PackagingType,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            pieces: None,
            packaging_type,
            tags: None,
            theme: theme.into(),
            subtheme: None,
        }
    }

    /// Set the piece count
    #[must_use]
    pub fn with_pieces(mut self, pieces: u32) -> Self {
        self.pieces = Some(pieces);
        self
    }

    /// Set the tag list
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the subtheme
    #[must_use]
    pub fn with_subtheme(mut self, subtheme: impl Into<String>) -> Self {
        self.subtheme = Some(subtheme.into());
        self
    }

    /// Whether the tag list is present and contains `tag` exactly
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}
