use crate::catalog::filter::{Facet, FilterSelection, SortBy, StatusFilter, ALL};
use crate::config::model::{Config, DatasetSource};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_APPLY_DELAY_MS: u64 = 700;

pub fn load_config() -> Config {
    load_config_from(|name| env::var(name).ok())
}

/// Same as [load_config], reading variables through `lookup`.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> Config {
    let dataset_source = match (
        lookup("EVENTS_DATASET_URL"),
        lookup("EVENTS_DATASET_PATH"),
    ) {
        (Some(url), _) => DatasetSource::Url(url),
        (None, Some(path)) => DatasetSource::File(PathBuf::from(path)),
        (None, None) => DatasetSource::Embedded,
    };

    let apply_delay = Duration::from_millis(load_u64_config(
        &lookup,
        "APPLY_DELAY_MS",
        DEFAULT_APPLY_DELAY_MS,
    ));

    let selection = FilterSelection {
        category: load_facet_config(&lookup, "FILTER_CATEGORY"),
        status: load_enum_config(&lookup, "FILTER_STATUS", StatusFilter::All),
        location: load_facet_config(&lookup, "FILTER_LOCATION"),
        club: load_facet_config(&lookup, "FILTER_CLUB"),
        sort_by: load_enum_config(&lookup, "FILTER_SORT_BY", SortBy::Date),
        ..Default::default()
    };

    Config {
        dataset_source,
        apply_delay,
        selection,
        search_term: lookup("SEARCH_TERM"),
        loki_url: lookup("LOKI_URL"),
    }
}

fn load_facet_config(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Facet {
    Facet::from_label(&lookup(name).unwrap_or_else(|| ALL.to_string()))
}

fn load_enum_config<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    match lookup(name) {
        Some(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("Invalid config '{}'. Unknown option '{}'.", name, value)),
        None => default,
    }
}

fn load_u64_config(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    match lookup(name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a non-negative integer number.",
                name
            )
        }),
        None => default,
    }
}
