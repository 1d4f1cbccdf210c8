use thiserror::Error;

/// A single CSV row that could not be turned into a [`crate::PointRecord`].
///
/// Every variant carries the 1-based line number in the source file, header
/// included, so the message points at the exact row to fix.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: expected 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },
    #[error("line {line}: expected 4 fields, found {found} (embedded commas are not supported)")]
    ExtraFields { line: usize, found: usize },
    #[error("line {line}: {field} `{value}` is not a number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: {field} {value} is outside {min}..={max}")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("line {line}: title is empty")]
    EmptyTitle { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingFields { line, .. }
            | ParseError::ExtraFields { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::OutOfRange { line, .. }
            | ParseError::EmptyTitle { line } => *line,
        }
    }
}

/// Failure to retrieve the CSV resource.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("no response after {0} ms")]
    Timeout(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("unexpected CSV header `{found}`, expected latitude,longitude,title,description")]
    Header { found: String },
}

/// Anything that aborts a whole load. Row-level problems are never a
/// `LoadError`; they end up in [`crate::Ingestion::failures`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(String),
    #[error("min_zoom {min} is greater than max_zoom {max}")]
    ZoomRange { min: u8, max: u8 },
    #[error("initial zoom {zoom} is outside {min}..={max}")]
    ZoomOutOfRange { zoom: u8, min: u8, max: u8 },
    #[error("max_bounds south-west corner must be below and left of the north-east corner")]
    InvertedBounds,
    #[error("center ({lat}, {lng}) lies outside max_bounds")]
    CenterOutOfBounds { lat: f64, lng: f64 },
    #[error("max_cluster_radius must be at least 1 px")]
    ClusterRadius,
    #[error("fetch_timeout_ms must be at least 1 ms")]
    FetchTimeout,
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}
