//! Set queries
//!
//! Every query takes the full set slice and returns a derived value. None of
//! them print or keep state, so they can run in any order against the same
//! loaded repository.
//!
//! Absent attributes (`None` tags, subtheme or piece count) never match a
//! predicate and never contribute to an aggregate.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::models::{LegoSet, PackagingType};

/// Piece count threshold used by [`all_have_at_least_200_pieces`]
pub const MIN_PIECES: u32 = 200;

/// Numbers of the sets whose tag list is present and has at most `max_tags` entries
///
/// Sets without a tag list are excluded, not counted as having zero tags.
#[must_use]
pub fn numbers_with_at_most_tags(sets: &[LegoSet], max_tags: usize) -> Vec<String> {
    sets.iter()
        .filter(|set| set.tags.as_ref().is_some_and(|tags| tags.len() <= max_tags))
        .map(|set| set.number.clone())
        .collect()
}

/// Sum of all known piece counts
///
/// Returns `None` when no set has a piece count, including for an empty slice.
#[must_use]
pub fn sum_of_pieces(sets: &[LegoSet]) -> Option<u64> {
    sets.iter().filter_map(|set| set.pieces).map(u64::from).reduce(|a, b| a + b)
}

/// Names whose lowercased first character equals their last character
///
/// Only the first character is lowercased: "Ada" matches, "AdA" does not.
#[must_use]
pub fn names_with_same_first_and_last(sets: &[LegoSet]) -> Vec<String> {
    sets.iter()
        .map(|set| &set.name)
        .filter(|name| {
            let first = name.to_lowercase().chars().next();
            first.is_some() && first == name.chars().next_back()
        })
        .cloned()
        .collect()
}

/// Number of sets per packaging type
#[must_use]
pub fn packaging_type_summary(sets: &[LegoSet]) -> BTreeMap<PackagingType, u64> {
    let mut summary = BTreeMap::new();
    for set in sets {
        *summary.entry(set.packaging_type).or_insert(0) += 1;
    }
    summary
}

/// Names that start with `prefix`, ignoring case on both sides
#[must_use]
pub fn names_starting_with(sets: &[LegoSet], prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    sets.iter()
        .filter(|set| set.name.to_lowercase().starts_with(&prefix))
        .map(|set| set.name.clone())
        .collect()
}

/// Number of sets carrying exactly `tag` (case-sensitive)
#[must_use]
pub fn count_with_tag(sets: &[LegoSet], tag: &str) -> u64 {
    sets.iter().filter(|set| set.has_tag(tag)).map(|_| 1).sum()
}

/// Theme with the fewest characters
///
/// Folds left to right and only replaces the current candidate with a
/// strictly shorter theme, so the first of several equally short themes wins.
#[must_use]
pub fn shortest_theme(sets: &[LegoSet]) -> Option<String> {
    sets.iter()
        .map(|set| set.theme.as_str())
        .reduce(|shortest, theme| {
            if theme.chars().count() < shortest.chars().count() {
                theme
            } else {
                shortest
            }
        })
        .map(str::to_string)
}

/// Each theme mapped to its distinct subthemes
///
/// Themes whose sets have no subtheme map to an empty set.
#[must_use]
pub fn themes_with_subthemes(sets: &[LegoSet]) -> BTreeMap<String, BTreeSet<String>> {
    let mut themes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for set in sets {
        let subthemes = themes.entry(set.theme.clone()).or_default();
        if let Some(subtheme) = &set.subtheme {
            subthemes.insert(subtheme.clone());
        }
    }
    themes
}

/// Whether every set with a known piece count has at least `min_pieces`
///
/// True for an empty slice.
#[must_use]
pub fn all_have_at_least_pieces(sets: &[LegoSet], min_pieces: u32) -> bool {
    sets.iter().filter_map(|set| set.pieces).all(|pieces| pieces >= min_pieces)
}

/// Whether every set has at least [`MIN_PIECES`] pieces
#[must_use]
pub fn all_have_at_least_200_pieces(sets: &[LegoSet]) -> bool {
    all_have_at_least_pieces(sets, MIN_PIECES)
}

/// Number of sets per theme
#[must_use]
pub fn sets_per_theme(sets: &[LegoSet]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for set in sets {
        *counts.entry(set.theme.clone()).or_insert(0) += 1;
    }
    counts
}

/// Sorted, distinct tags of the sets that have both a subtheme and a tag list
#[must_use]
pub fn sorted_distinct_tags_with_subtheme(sets: &[LegoSet]) -> Vec<String> {
    sets.iter()
        .filter(|set| set.subtheme.is_some())
        .filter_map(|set| set.tags.as_ref())
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
