//! Map and loader settings.
//!
//! Every field has a default matching the canton of Vaud viewer, so an empty
//! JSON object (or no config file at all) gives the stock map.

use geo::Intersects;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

use crate::cluster::ClusterOptions;
use crate::error::ConfigError;
use crate::ingest::HeaderMode;
use crate::record::PointRecord;

pub const CONFIG_FILE: &str = "map-config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial view center as `[lat, lng]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// `[[south, west], [north, east]]`, Leaflet ordering.
    pub max_bounds: [[f64; 2]; 2],
    pub tile_url: String,
    pub attribution: String,
    pub csv_url: String,
    pub header: HeaderMode,
    pub tooltip_direction: String,
    pub double_click_zoom: bool,
    pub fetch_timeout_ms: u32,
    pub cluster: ClusterOptions,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [46.55, 6.75],
            zoom: 9,
            min_zoom: 7,
            max_zoom: 15,
            max_bounds: [[46.0, 6.0], [47.5, 7.5]],
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            csv_url: "markers.csv".to_string(),
            header: HeaderMode::Discard,
            tooltip_direction: "top".to_string(),
            double_click_zoom: false,
            fetch_timeout_ms: 10_000,
            cluster: ClusterOptions::default(),
        }
    }
}

impl MapConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: MapConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            return Err(ConfigError::ZoomOutOfRange {
                zoom: self.zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        let [[south, west], [north, east]] = self.max_bounds;
        if south >= north || west >= east {
            return Err(ConfigError::InvertedBounds);
        }
        let [lat, lng] = self.center;
        if !self.in_bounds(lat, lng) {
            return Err(ConfigError::CenterOutOfBounds { lat, lng });
        }
        if self.cluster.max_cluster_radius == 0 {
            return Err(ConfigError::ClusterRadius);
        }
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::FetchTimeout);
        }
        Ok(())
    }

    pub fn bounds_rect(&self) -> Rect<f64> {
        let [[south, west], [north, east]] = self.max_bounds;
        Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north })
    }

    /// Edges count as inside.
    pub fn in_bounds(&self, lat: f64, lng: f64) -> bool {
        self.bounds_rect().intersects(&coord! { x: lng, y: lat })
    }

    pub fn contains(&self, record: &PointRecord) -> bool {
        self.in_bounds(record.latitude, record.longitude)
    }

    /// Clamp a requested zoom into the configured range.
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MapConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cluster.max_cluster_radius, 20);
        assert_eq!(cfg.header, HeaderMode::Discard);
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(MapConfig::from_json("{}").unwrap(), MapConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = MapConfig::from_json(
            r#"{"csv_url": "data/pois.csv", "header": "validate", "cluster": {"maxClusterRadius": 60}}"#,
        )
        .unwrap();
        assert_eq!(cfg.csv_url, "data/pois.csv");
        assert_eq!(cfg.header, HeaderMode::Validate);
        assert_eq!(cfg.cluster.max_cluster_radius, 60);
        assert!(cfg.cluster.zoom_to_bounds_on_click);
        assert_eq!(cfg.zoom, 9);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            MapConfig::from_json(r#"{"min_zoom": 12, "max_zoom": 8}"#),
            Err(ConfigError::ZoomRange { min: 12, max: 8 })
        ));
        assert!(matches!(
            MapConfig::from_json(r#"{"zoom": 3}"#),
            Err(ConfigError::ZoomOutOfRange { .. })
        ));
        assert!(matches!(
            MapConfig::from_json(r#"{"max_bounds": [[47.5, 7.5], [46.0, 6.0]]}"#),
            Err(ConfigError::InvertedBounds)
        ));
        assert!(matches!(
            MapConfig::from_json(r#"{"center": [40.0, 6.5]}"#),
            Err(ConfigError::CenterOutOfBounds { .. })
        ));
        assert!(matches!(
            MapConfig::from_json(r#"{"cluster": {"maxClusterRadius": 0}}"#),
            Err(ConfigError::ClusterRadius)
        ));
        assert!(matches!(
            MapConfig::from_json(r#"{"fetch_timeout_ms": 0}"#),
            Err(ConfigError::FetchTimeout)
        ));
        assert!(matches!(
            MapConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn bounds_include_edges() {
        let cfg = MapConfig::default();
        assert!(cfg.in_bounds(46.0, 6.0));
        assert!(cfg.in_bounds(46.52, 6.63));
        assert!(!cfg.in_bounds(45.9, 6.63));
        assert_eq!(cfg.clamp_zoom(20), 15);
        assert_eq!(cfg.clamp_zoom(2), 7);
    }
}
