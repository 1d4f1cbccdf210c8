use serde::{Deserialize, Serialize};

/// Cluster icons are square, in CSS pixels.
pub const CLUSTER_ICON_PX: u32 = 40;

/// Options handed verbatim to `L.markerClusterGroup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterOptions {
    /// How close (px) two markers must be to merge into one cluster.
    pub max_cluster_radius: u32,
    /// Fan children out at the deepest zoom instead of forcing more zoom.
    pub spiderfy_on_max_zoom: bool,
    /// Outline the area a cluster covers while hovered.
    pub show_coverage_on_hover: bool,
    /// Zoom to fit the children when a cluster is clicked.
    pub zoom_to_bounds_on_click: bool,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: 20,
            spiderfy_on_max_zoom: true,
            show_coverage_on_hover: true,
            zoom_to_bounds_on_click: true,
        }
    }
}

impl ClusterOptions {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Three-tier visual class of a cluster icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterSize {
    Small,
    Medium,
    Large,
}

impl ClusterSize {
    pub fn for_count(count: u32) -> Self {
        match count {
            0..=10 => ClusterSize::Small,
            11..=50 => ClusterSize::Medium,
            _ => ClusterSize::Large,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClusterSize::Small => "small",
            ClusterSize::Medium => "medium",
            ClusterSize::Large => "large",
        }
    }

    pub fn css_class(self) -> String {
        format!("marker-cluster marker-cluster-{}", self.as_str())
    }
}

/// Inner markup of a cluster icon.
pub fn icon_html(count: u32) -> String {
    format!("<div><span>{count}</span></div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_switch_after_10_and_50() {
        assert_eq!(ClusterSize::for_count(1), ClusterSize::Small);
        assert_eq!(ClusterSize::for_count(10), ClusterSize::Small);
        assert_eq!(ClusterSize::for_count(11), ClusterSize::Medium);
        assert_eq!(ClusterSize::for_count(50), ClusterSize::Medium);
        assert_eq!(ClusterSize::for_count(51), ClusterSize::Large);
        assert_eq!(
            ClusterSize::for_count(51).css_class(),
            "marker-cluster marker-cluster-large"
        );
    }

    #[test]
    fn icon_markup_shows_the_count() {
        assert_eq!(icon_html(12), "<div><span>12</span></div>");
    }

    #[test]
    fn options_serialize_with_leaflet_names() {
        let v: serde_json::Value =
            serde_json::from_str(&ClusterOptions::default().to_json()).unwrap();
        assert_eq!(v["maxClusterRadius"], 20);
        assert_eq!(v["spiderfyOnMaxZoom"], true);
        assert_eq!(v["showCoverageOnHover"], true);
        assert_eq!(v["zoomToBoundsOnClick"], true);
    }

    #[test]
    fn partial_options_fill_defaults() {
        let o: ClusterOptions = serde_json::from_str(r#"{"maxClusterRadius": 80}"#).unwrap();
        assert_eq!(o.max_cluster_radius, 80);
        assert!(o.spiderfy_on_max_zoom);
    }
}
