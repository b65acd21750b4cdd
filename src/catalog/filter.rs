use super::model::{Event, EventStatus};
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::debug;

/// Label of the facet option that disables that facet.
pub const ALL: &str = "All";

/// A single-choice facet: either everything, or exactly one value (exact,
/// case-sensitive match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Facet::All
        } else {
            Facet::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(selected) => selected == value,
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Facet::from_label(value)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl StatusFilter {
    pub fn admits(&self, status: &EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => *status == EventStatus::Upcoming,
            StatusFilter::Past => *status == EventStatus::Past,
        }
    }
}

/// Requested ordering.
///
/// Only `Date` has its own comparator. `Popularity` and `Alphabetical` are
/// accepted so selections round-trip, but currently order exactly like `Date`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Popularity,
    Alphabetical,
}

/// Everything the listing needs to decide which events to show, as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Facet,
    pub status: StatusFilter,
    pub location: Facet,
    pub club: Facet,
    pub sort_by: SortBy,
    pub search_term: String,
    pub search_active: bool,
}

impl FilterSelection {
    pub fn with_category(mut self, category: impl Into<Facet>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, location: impl Into<Facet>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_club(mut self, club: impl Into<Facet>) -> Self {
        self.club = club.into();
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self.search_active = true;
        self
    }

    pub fn without_search(mut self) -> Self {
        self.search_term.clear();
        self.search_active = false;
        self
    }

    /// Lowercased term, only when search is active and the term isn't empty.
    pub fn search_query(&self) -> Option<String> {
        if self.search_active && !self.search_term.is_empty() {
            Some(self.search_term.to_lowercase())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredEvents {
    pub events: Vec<Event>,
    pub count: usize,
}

impl FilteredEvents {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn matches_search(event: &Event, query: &str) -> bool {
    event.title.to_lowercase().contains(query)
        || event.description.to_lowercase().contains(query)
        || event
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

/// Narrows `events` by every active facet and the search, then orders what is
/// left: non-past events first, past events after, each group by date with
/// the most recent first. Events sharing a date keep their input order.
pub fn filter_events(events: &[Event], selection: &FilterSelection) -> FilteredEvents {
    let query = selection.search_query();
    let total = events.len();

    let (past, not_past): (Vec<&Event>, Vec<&Event>) = events
        .iter()
        .filter(|event| selection.category.admits(&event.category))
        .filter(|event| selection.status.admits(&event.status))
        .filter(|event| selection.location.admits(&event.location))
        .filter(|event| selection.club.admits(&event.organizer))
        .filter(|event| match &query {
            Some(query) => matches_search(event, query),
            None => true,
        })
        .partition(|event| event.status.is_past());

    // Popularity and alphabetical have no comparator of their own yet
    let events: Vec<Event> = match selection.sort_by {
        SortBy::Date | SortBy::Popularity | SortBy::Alphabetical => not_past
            .into_iter()
            .sorted_by_key(|event| Reverse(event.date.sort_key()))
            .chain(
                past.into_iter()
                    .sorted_by_key(|event| Reverse(event.date.sort_key())),
            )
            .cloned()
            .collect(),
    };

    debug!(
        "{} of {} events left after filtering (sort by {})",
        events.len(),
        total,
        selection.sort_by
    );

    FilteredEvents {
        count: events.len(),
        events,
    }
}
