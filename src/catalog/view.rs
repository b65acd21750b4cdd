use super::filter::{FilterSelection, FilteredEvents};
use super::store::EventCatalog;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// What the listing currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selection: FilterSelection,
    pub results: FilteredEvents,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer apply or search started while this one was waiting.
    Superseded,
    /// The view was closed before the results became visible.
    Cancelled,
}

/// State holder for the events listing.
///
/// Applying filters only becomes visible after `apply_delay`. Every apply or
/// search takes a new generation number, and a pending apply only publishes
/// its results if its generation is still the latest once the delay is over.
pub struct EventsView {
    catalog: Arc<EventCatalog>,
    apply_delay: Duration,
    generation: AtomicU64,
    closed: AtomicBool,
    state: watch::Sender<ViewState>,
}

impl EventsView {
    pub fn new(catalog: Arc<EventCatalog>, apply_delay: Duration) -> Self {
        let selection = FilterSelection::default();
        let results = catalog.filter(&selection);
        let (state, _) = watch::channel(ViewState {
            selection,
            results,
            loading: false,
        });

        Self {
            catalog,
            apply_delay,
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            state,
        }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Applies facet filters. Any active search is cleared.
    #[instrument(skip(self), fields(generation = tracing::field::Empty))]
    pub async fn apply_filters(&self, selection: FilterSelection) -> ApplyOutcome {
        if self.is_closed() {
            return ApplyOutcome::Cancelled;
        }

        let generation = self.next_generation();
        tracing::Span::current().record("generation", generation);

        self.state.send_modify(|state| state.loading = true);

        if !self.apply_delay.is_zero() {
            tokio::time::sleep(self.apply_delay).await;
        }

        if self.is_closed() {
            debug!("View closed, discarding results");
            return ApplyOutcome::Cancelled;
        }

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Superseded by a newer request");
            return ApplyOutcome::Superseded;
        }

        self.publish(selection.without_search());

        ApplyOutcome::Applied
    }

    /// Runs a search right away over the whole catalog. Facets go back to
    /// `All` and any pending apply is superseded.
    #[instrument(skip(self))]
    pub fn search(&self, term: &str) -> ApplyOutcome {
        self.show_now(FilterSelection::default().with_search(term))
    }

    /// Drops the search and shows the unfiltered listing.
    pub fn clear_search(&self) -> ApplyOutcome {
        self.show_now(FilterSelection::default())
    }

    /// Leaving the listing: pending applies are discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.next_generation();
        self.state.send_modify(|state| state.loading = false);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn show_now(&self, selection: FilterSelection) -> ApplyOutcome {
        if self.is_closed() {
            return ApplyOutcome::Cancelled;
        }

        self.next_generation();
        self.publish(selection);

        ApplyOutcome::Applied
    }

    fn publish(&self, selection: FilterSelection) {
        let results = self.catalog.filter(&selection);

        info!("{} events found", results.count);

        self.state.send_modify(|state| {
            state.selection = selection;
            state.results = results;
            state.loading = false;
        });
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
