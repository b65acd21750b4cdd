use super::filter::{SortBy, StatusFilter, ALL};
use super::model::{Category, Event};
use itertools::Itertools;
use strum::IntoEnumIterator;

/// Options offered by each filter dropdown. Always derived from the full
/// dataset, so choosing a facet never removes options from the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
    pub sort_options: Vec<String>,
    pub locations: Vec<String>,
    pub clubs: Vec<String>,
}

impl FacetOptions {
    pub fn derive(events: &[Event]) -> Self {
        Self {
            categories: with_all(
                Category::iter()
                    .filter(Category::is_known)
                    .map(|category| category.to_string()),
            ),
            statuses: StatusFilter::iter().map(|status| status.to_string()).collect(),
            sort_options: SortBy::iter().map(|sort_by| sort_by.to_string()).collect(),
            locations: with_all(events.iter().map(|event| event.location.clone()).unique()),
            clubs: with_all(events.iter().map(|event| event.organizer.clone()).unique()),
        }
    }
}

fn with_all(values: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(ALL.to_string()).chain(values).collect()
}
