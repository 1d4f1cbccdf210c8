use geo_types::Rect;
use log::{error, info, warn};

use crate::config::MapConfig;
use crate::error::LoadError;
use crate::ingest::ingest_text;
use crate::panel::{DetailPanel, PanelContent};
use crate::record::PointRecord;
use crate::registry::MarkerRegistry;

pub const LOAD_FAILED_MESSAGE: &str = "Error: could not load the points of interest.";

/// Summary of one load attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub failed_rows: usize,
    pub out_of_bounds: usize,
    /// Lon/lat rectangle covering every registered marker.
    pub extent: Option<Rect<f64>>,
    pub error: Option<LoadError>,
}

/// Application context: config, the registered markers and the side panel.
///
/// The browser runtime owns one of these behind an `Rc<RefCell<_>>`; tests
/// build a fresh one per case.
#[derive(Clone, Debug)]
pub struct Viewer {
    config: MapConfig,
    registry: MarkerRegistry,
    panel: DetailPanel,
    last_report: Option<LoadReport>,
}

impl Viewer {
    pub fn new(config: MapConfig) -> Self {
        let registry = MarkerRegistry::new(config.cluster.clone());
        Self {
            config,
            registry,
            panel: DetailPanel::new(),
            last_report: None,
        }
    }

    /// Feed the result of fetching the CSV resource. A failed fetch (or a
    /// rejected header) registers nothing and forces the panel open with an
    /// error message; row-level failures only reduce the loaded count.
    pub fn load(&mut self, fetched: Result<String, LoadError>) -> LoadReport {
        let report = match fetched.and_then(|text| {
            ingest_text(&text, self.config.header).map_err(LoadError::from)
        }) {
            Ok(ingestion) => {
                let out_of_bounds = ingestion
                    .records
                    .iter()
                    .filter(|r| !self.config.contains(r))
                    .inspect(|r| {
                        warn!(
                            "'{}' at ({}, {}) lies outside the map bounds",
                            r.title, r.latitude, r.longitude
                        )
                    })
                    .count();
                let loaded = ingestion.records.len();
                self.registry.register_batch(ingestion.records);
                let report = LoadReport {
                    loaded,
                    failed_rows: ingestion.failures.len(),
                    out_of_bounds,
                    extent: self.registry.bounds(),
                    error: None,
                };
                info!(
                    "loaded {} points of interest ({} rows skipped)",
                    report.loaded, report.failed_rows
                );
                report
            }
            Err(e) => {
                error!("could not load {}: {e}", self.config.csv_url);
                self.panel.render(PanelContent::error(LOAD_FAILED_MESSAGE));
                LoadReport {
                    error: Some(e),
                    ..Default::default()
                }
            }
        };
        self.last_report = Some(report.clone());
        report
    }

    /// Marker click: show the record in the panel.
    pub fn select(&mut self, idx: usize) -> Option<&PointRecord> {
        let record = self.registry.get(idx)?;
        self.panel.render(PanelContent::Point {
            title: record.title.clone(),
            description: record.description.clone(),
        });
        Some(record)
    }

    pub fn open_panel(&mut self) {
        self.panel.open();
    }

    pub fn close_panel(&mut self) {
        self.panel.close();
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    pub fn last_report(&self) -> Option<&LoadReport> {
        self.last_report.as_ref()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}
