//! Packaging types
//!
//! How a set is sold, using the Brickset vocabulary.

use serde::{Deserialize, Serialize};

/// Packaging type of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackagingType {
    /// Cardboard box
    Box,
    /// Plastic bag
    Polybag,
    /// Card with a plastic bubble
    #[serde(rename = "Blister pack")]
    BlisterPack,
    /// Foil bag
    #[serde(rename = "Foil pack")]
    FoilPack,
    /// Plastic tub
    Tub,
    /// Plastic bucket
    Bucket,
    /// Cylindrical canister
    Canister,
    /// Shrink-wrapped bundle
    #[serde(rename = "Shrink-wrapped")]
    ShrinkWrapped,
    /// Hanging tag
    Tag,
    /// Anything else
    Other,
    /// Packaging not recorded
    #[serde(rename = "Not specified")]
    NotSpecified,
    /// Sold without packaging
    None,
}

impl PackagingType {
    /// All packaging types, in declaration order
    pub const ALL: [Self; 12] = [
        Self::Box,
        Self::Polybag,
        Self::BlisterPack,
        Self::FoilPack,
        Self::Tub,
        Self::Bucket,
        Self::Canister,
        Self::ShrinkWrapped,
        Self::Tag,
        Self::Other,
        Self::NotSpecified,
        Self::None,
    ];

    /// The label used in Brickset exports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Polybag => "Polybag",
            Self::BlisterPack => "Blister pack",
            Self::FoilPack => "Foil pack",
            Self::Tub => "Tub",
            Self::Bucket => "Bucket",
            Self::Canister => "Canister",
            Self::ShrinkWrapped => "Shrink-wrapped",
            Self::Tag => "Tag",
            Self::Other => "Other",
            Self::NotSpecified => "Not specified",
            Self::None => "None",
        }
    }
}

impl std::fmt::Display for PackagingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PackagingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown packaging type: {s}"))
    }
}
