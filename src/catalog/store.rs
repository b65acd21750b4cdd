use super::api::DatasetError;
use super::facets::FacetOptions;
use super::filter::{filter_events, FilterSelection, FilteredEvents};
use super::model::Event;
use std::collections::HashSet;
use tracing::{debug, info};

/// The full event snapshot backing the listing, with the facet options
/// derived from it.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
    facets: FacetOptions,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Result<Self, DatasetError> {
        ensure_unique_ids(&events)?;

        let facets = FacetOptions::derive(&events);

        info!(
            "Catalog has {} events across {} locations and {} clubs",
            events.len(),
            facets.locations.len() - 1,
            facets.clubs.len() - 1
        );

        Ok(Self { events, facets })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    pub fn filter(&self, selection: &FilterSelection) -> FilteredEvents {
        filter_events(&self.events, selection)
    }

    /// Looks an event up by its id as it appears in a route.
    pub fn find_event(&self, id: &str) -> Option<&Event> {
        let event = self.events.iter().find(|event| event.id.as_str() == id);

        if event.is_none() {
            debug!("No event with id '{}'", id);
        }

        event
    }

    /// Swaps in a new snapshot; facets are recomputed from it.
    pub fn replace_events(&mut self, events: Vec<Event>) -> Result<(), DatasetError> {
        ensure_unique_ids(&events)?;

        self.facets = FacetOptions::derive(&events);
        self.events = events;

        Ok(())
    }
}

fn ensure_unique_ids(events: &[Event]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();

    match events.iter().find(|event| !seen.insert(&event.id)) {
        Some(duplicate) => Err(DatasetError::DuplicateId(duplicate.id.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::Facet;
    use crate::catalog::model::EventId;

    fn event(id: &str, location: &str) -> Event {
        Event {
            id: id.into(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test_log::test]
    fn should_find_event_by_route_id() {
        let catalog = EventCatalog::new(vec![event("1", "Hall"), event("12", "Gym")]).unwrap();

        assert_eq!(catalog.find_event("12").unwrap().location, "Gym");
        assert!(catalog.find_event("3").is_none());
    }

    #[test_log::test]
    fn should_reject_duplicate_ids() {
        let result = EventCatalog::new(vec![event("1", "Hall"), event("1", "Gym")]);

        assert!(
            matches!(result, Err(DatasetError::DuplicateId(ref id)) if *id == EventId::from("1")),
            "{:?}",
            result
        );
    }

    #[test_log::test]
    fn facets_should_not_shrink_when_filtering() {
        let catalog = EventCatalog::new(vec![event("1", "Hall"), event("2", "Gym")]).unwrap();
        let before = catalog.facets().clone();

        let result = catalog.filter(&FilterSelection {
            location: Facet::from("Gym"),
            ..Default::default()
        });

        assert_eq!(result.count, 1);
        assert_eq!(catalog.facets(), &before);
        assert_eq!(catalog.facets().locations, vec!["All", "Hall", "Gym"]);
    }

    #[test_log::test]
    fn replacing_events_should_recompute_facets() {
        let mut catalog = EventCatalog::new(vec![event("1", "Hall")]).unwrap();

        catalog
            .replace_events(vec![event("1", "Hall"), event("2", "Lab")])
            .unwrap();

        assert_eq!(catalog.facets().locations, vec!["All", "Hall", "Lab"]);
        assert_eq!(catalog.events().len(), 2);
    }
}
