use geo::BoundingRect;
use geo_types::{MultiPoint, Rect};

use crate::cluster::ClusterOptions;
use crate::record::PointRecord;

/// Every record shown on the map, in CSV order. The browser runtime keeps a
/// Leaflet marker per entry and refers back to it by index.
#[derive(Clone, Debug, Default)]
pub struct MarkerRegistry {
    options: ClusterOptions,
    records: Vec<PointRecord>,
}

impl MarkerRegistry {
    pub fn new(options: ClusterOptions) -> Self {
        Self {
            options,
            records: Vec::new(),
        }
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    /// Add a whole ingestion result at once. Returns the index range the new
    /// records occupy.
    pub fn register_batch(&mut self, batch: Vec<PointRecord>) -> std::ops::Range<usize> {
        let start = self.records.len();
        self.records.extend(batch);
        start..self.records.len()
    }

    pub fn get(&self, idx: usize) -> Option<&PointRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointRecord> {
        self.records.iter()
    }

    /// Smallest lon/lat rectangle holding every registered point.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let pts: MultiPoint<f64> = self.records.iter().map(PointRecord::point).collect();
        pts.bounding_rect()
    }
}
