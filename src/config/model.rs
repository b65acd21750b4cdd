use crate::catalog::filter::FilterSelection;
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub dataset_source: DatasetSource,
    pub apply_delay: Duration,
    pub selection: FilterSelection,
    pub search_term: Option<String>,
    pub loki_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
    Url(String),
}

impl Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Embedded => write!(f, "embedded snapshot"),
            DatasetSource::File(path) => write!(f, "file {}", path.display()),
            DatasetSource::Url(url) => write!(f, "{}", url),
        }
    }
}
