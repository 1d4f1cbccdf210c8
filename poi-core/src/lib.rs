//! Points-of-interest map logic that does not depend on the browser: CSV
//! ingestion, the marker registry, the side panel state machine and the map
//! configuration.

pub mod cluster;
pub mod config;
pub mod csv;
pub mod error;
pub mod ingest;
pub mod panel;
pub mod record;
pub mod registry;
pub mod viewer;

pub use cluster::{CLUSTER_ICON_PX, ClusterOptions, ClusterSize};
pub use config::MapConfig;
pub use error::{ConfigError, FetchError, IngestError, LoadError, ParseError};
pub use ingest::{HeaderMode, Ingestion, ingest_text};
pub use panel::{DetailPanel, PanelContent, PanelState};
pub use record::PointRecord;
pub use registry::MarkerRegistry;
pub use viewer::{LOAD_FAILED_MESSAGE, LoadReport, Viewer};
