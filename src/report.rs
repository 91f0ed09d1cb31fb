//! The fixed sequence of report queries
//!
//! Runs every query against one loaded repository and collects the results
//! into a [`QueryReport`]. Rendering is left to the caller.

use crate::config::QueryParams;
use crate::core::models::LegoSet;
use crate::core::ports::Repository;
use crate::core::services::queries;
use crate::output::{QueryReport, QueryValue};

/// Run all report queries in their fixed order
#[must_use]
pub fn build_report<R>(repo: &R, source: &str, params: &QueryParams) -> QueryReport
where
    R: Repository<LegoSet> + ?Sized,
{
    let sets = repo.get_all();
    let mut report = QueryReport::new(source, sets.len());

    report.push(
        "numbers_with_at_most_tags",
        format!("Set numbers with at most {} tag(s)", params.max_tags),
        QueryValue::List(queries::numbers_with_at_most_tags(sets, params.max_tags)),
    );
    report.push(
        "count_with_tag",
        format!("Number of sets tagged '{}'", params.tag),
        QueryValue::Count(queries::count_with_tag(sets, &params.tag)),
    );
    report.push(
        "names_with_same_first_and_last",
        "Set names starting and ending with the same letter",
        QueryValue::List(queries::names_with_same_first_and_last(sets)),
    );
    report.push(
        "packaging_type_summary",
        "Packaging type summary",
        QueryValue::Counts(
            queries::packaging_type_summary(sets)
                .into_iter()
                .map(|(packaging, count)| (packaging.to_string(), count))
                .collect(),
        ),
    );
    report.push(
        "names_starting_with",
        format!("Set names starting with '{}'", params.name_prefix),
        QueryValue::List(queries::names_starting_with(sets, &params.name_prefix)),
    );
    report.push(
        "sum_of_pieces",
        "Sum of all pieces",
        QueryValue::Total(queries::sum_of_pieces(sets)),
    );
    report.push(
        "shortest_theme",
        "Shortest theme name",
        QueryValue::Text(queries::shortest_theme(sets)),
    );
    report.push(
        "themes_with_subthemes",
        "Themes with their distinct subthemes",
        QueryValue::Groups(queries::themes_with_subthemes(sets)),
    );
    report.push(
        "all_have_at_least_200_pieces",
        format!("Every set has at least {} pieces", queries::MIN_PIECES),
        QueryValue::Flag(queries::all_have_at_least_200_pieces(sets)),
    );
    report.push(
        "sets_per_theme",
        "Number of sets per theme",
        QueryValue::Counts(queries::sets_per_theme(sets)),
    );
    report.push(
        "sorted_distinct_tags_with_subtheme",
        "Sorted distinct tags of sets with a subtheme",
        QueryValue::List(queries::sorted_distinct_tags_with_subtheme(sets)),
    );

    report
}
