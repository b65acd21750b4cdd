use campus_events::catalog::api::CatalogAPI;
use campus_events::catalog::filter::{Facet, FilterSelection, StatusFilter};
use campus_events::catalog::view::{ApplyOutcome, EventsView};
use std::sync::Arc;
use std::time::Duration;

const APPLY_DELAY: Duration = Duration::from_millis(700);

fn build_view() -> EventsView {
    EventsView::new(Arc::new(CatalogAPI::embedded().unwrap()), APPLY_DELAY)
}

#[test_log::test(tokio::test)]
async fn should_start_with_every_event_visible() {
    tokio::time::pause();
    let view = build_view();

    let state = view.state();

    assert!(!state.loading);
    assert_eq!(state.selection, FilterSelection::default());
    assert_eq!(state.results.count, view.catalog().events().len());
}

#[test_log::test(tokio::test)]
async fn results_should_only_show_after_the_delay() {
    tokio::time::pause();
    let view = build_view();
    let selection = FilterSelection::default().with_status(StatusFilter::Past);

    let (outcome, during) = tokio::join!(view.apply_filters(selection.clone()), async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        view.state()
    });

    assert!(during.loading);
    assert_eq!(during.selection, FilterSelection::default());

    assert_eq!(outcome, ApplyOutcome::Applied);

    let after = view.state();

    assert!(!after.loading);
    assert_eq!(after.selection, selection);
    assert_eq!(after.results.count, 4);
}

#[test_log::test(tokio::test)]
async fn latest_apply_should_win() {
    tokio::time::pause();
    let view = build_view();
    let first = FilterSelection::default().with_category("Sports");
    let second = FilterSelection::default().with_category("Business");

    let (first_outcome, second_outcome) = tokio::join!(view.apply_filters(first), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        view.apply_filters(second.clone()).await
    });

    assert_eq!(first_outcome, ApplyOutcome::Superseded);
    assert_eq!(second_outcome, ApplyOutcome::Applied);

    let state = view.state();

    assert_eq!(state.selection, second);
    assert!(state
        .results
        .events
        .iter()
        .all(|event| event.category == "Business"));
}

#[test_log::test(tokio::test)]
async fn closing_should_discard_pending_apply() {
    tokio::time::pause();
    let view = build_view();
    let before = view.state();

    let (outcome, _) = tokio::join!(
        view.apply_filters(FilterSelection::default().with_category("Academic")),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            view.close();
        }
    );

    assert_eq!(outcome, ApplyOutcome::Cancelled);

    let after = view.state();

    assert!(!after.loading);
    assert_eq!(after.selection, before.selection);
    assert_eq!(after.results, before.results);
    assert_eq!(
        view.apply_filters(FilterSelection::default()).await,
        ApplyOutcome::Cancelled
    );
    assert_eq!(view.search("hack"), ApplyOutcome::Cancelled);
}

#[test_log::test(tokio::test)]
async fn applying_filters_should_clear_search() {
    tokio::time::pause();
    let view = build_view();

    view.search("coding");

    assert!(view.state().selection.search_active);

    let outcome = view
        .apply_filters(FilterSelection::default().with_search("ignored"))
        .await;

    assert_eq!(outcome, ApplyOutcome::Applied);

    let state = view.state();

    assert!(!state.selection.search_active);
    assert!(state.selection.search_term.is_empty());
    assert_eq!(state.results.count, view.catalog().events().len());
}

#[test_log::test(tokio::test)]
async fn searching_should_reset_facets_and_supersede_pending_apply() {
    tokio::time::pause();
    let view = build_view();

    let (outcome, _) = tokio::join!(
        view.apply_filters(FilterSelection::default().with_category("Sports")),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            view.search("NETWORKING");
        }
    );

    assert_eq!(outcome, ApplyOutcome::Superseded);

    let state = view.state();

    assert!(!state.loading);
    assert_eq!(state.selection.category, Facet::All);
    assert_eq!(state.selection.search_term, "NETWORKING");
    assert_eq!(state.results.count, 2);

    view.clear_search();

    assert_eq!(view.state().results.count, view.catalog().events().len());
}

#[test_log::test(tokio::test)]
async fn zero_delay_should_apply_immediately() {
    let view = EventsView::new(Arc::new(CatalogAPI::embedded().unwrap()), Duration::ZERO);

    let outcome = view
        .apply_filters(FilterSelection::default().with_location("Sports Complex"))
        .await;

    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(view.state().results.count, 2);
}

#[test_log::test(tokio::test)]
async fn subscribers_should_see_applied_results() {
    tokio::time::pause();
    let view = build_view();
    let mut receiver = view.subscribe();

    view.apply_filters(FilterSelection::default().with_club("Coding Club"))
        .await;

    assert!(receiver.has_changed().unwrap());
    assert_eq!(receiver.borrow_and_update().results.count, 2);
}
