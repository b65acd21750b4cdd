use campus_events::catalog::api::CatalogAPI;
use campus_events::catalog::view::{ApplyOutcome, EventsView};
use campus_events::config::env_loader::load_config;
use campus_events::tracing::setup_tracing;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let config = load_config();
    let loki = setup_tracing(config.loki_url.as_deref()).await;

    info!("Loading events from {}", config.dataset_source);

    let exit_code = match CatalogAPI::load(&config.dataset_source).await {
        Ok(catalog) => {
            let facets = catalog.facets();

            info!("Locations: {}", facets.locations.join(", "));
            info!("Clubs: {}", facets.clubs.join(", "));

            let view = EventsView::new(Arc::new(catalog), config.apply_delay);

            let outcome = match config.search_term.as_deref() {
                Some(term) => view.search(term),
                None => view.apply_filters(config.selection).await,
            };

            if outcome != ApplyOutcome::Applied {
                warn!("Selection was not applied: {:?}", outcome);
            }

            let state = view.state();

            if state.results.is_empty() {
                info!("No Events Found. Try adjusting your filters to find the events you're looking for.");
            } else {
                info!("{} events found", state.results.count);
            }

            state.results.events.iter().for_each(|event| {
                info!(
                    "[{}] {} | {} {} | {} | {} | {} attending",
                    event.id,
                    event.title,
                    event.display_date(),
                    event.time,
                    event.location,
                    event.category,
                    event.attendance()
                )
            });

            view.close();

            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to load events: {}", err);
            ExitCode::FAILURE
        }
    };

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }

    exit_code
}
