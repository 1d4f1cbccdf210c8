/// DOM ids the host page must provide.
pub const MAP_ELEMENT_ID: &str = "map";
pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_CONTENT_ID: &str = "sidebar-content";
pub const OPEN_BUTTON_ID: &str = "openSidebarBtn";
pub const CLOSE_BUTTON_ID: &str = "closeBtn";
/// Class toggled on `#sidebar` while the panel is hidden.
pub const CLOSED_CLASS: &str = "closed";
/// Query string keys that override the loaded config.
pub const QUERY_CSV: &str = "csv";
pub const QUERY_ZOOM: &str = "zoom";
