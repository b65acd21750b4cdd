use super::dto::EventRecord;
use super::model::EventId;
use super::store::EventCatalog;
use crate::config::model::DatasetSource;
use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

const EMBEDDED_DATASET: &str = include_str!("../../data/events.json");
const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Couldn't read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Dataset request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    #[error("Dataset response was not successful: {0}")]
    Response(#[from] reqwest::Error),

    #[error("Duplicate event id '{0}'")]
    DuplicateId(EventId),
}

/// Loads the event snapshot the listing is built from.
pub struct CatalogAPI;

impl CatalogAPI {
    pub async fn load(source: &DatasetSource) -> Result<EventCatalog, DatasetError> {
        match source {
            DatasetSource::Embedded => Self::embedded(),
            DatasetSource::File(path) => Self::from_file(path).await,
            DatasetSource::Url(url) => Self::from_url(url).await,
        }
    }

    /// The snapshot bundled with the crate
    pub fn embedded() -> Result<EventCatalog, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<EventCatalog, DatasetError> {
        let records = serde_json::from_str::<Vec<EventRecord>>(json).map_err(|err| {
            error!("Dataset parse failed: {:?}", err);
            err
        })?;

        EventCatalog::new(records.iter().map(EventRecord::to_model).collect())
    }

    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn from_file(path: impl AsRef<Path>) -> Result<EventCatalog, DatasetError> {
        info!("Reading dataset from file");

        let json = tokio::fs::read_to_string(path.as_ref()).await?;

        Self::from_json(&json)
    }

    #[tracing::instrument]
    pub async fn from_url(url: &str) -> Result<EventCatalog, DatasetError> {
        info!("Fetching dataset");

        let json = REST_CLIENT
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Self::from_json(&json)
    }
}
