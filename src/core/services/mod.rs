//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`queries`] - Filtering, grouping and aggregation over sets

pub mod queries;

pub use queries::{
    MIN_PIECES, all_have_at_least_200_pieces, all_have_at_least_pieces, count_with_tag,
    names_starting_with, names_with_same_first_and_last, numbers_with_at_most_tags,
    packaging_type_summary, sets_per_theme, shortest_theme, sorted_distinct_tags_with_subtheme,
    sum_of_pieces, themes_with_subthemes,
};
