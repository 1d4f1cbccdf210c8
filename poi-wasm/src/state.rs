use poi_core::{MapConfig, Viewer};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::constants::MAP_ELEMENT_ID;
use crate::leaflet::{self, Map};
use crate::sidebar::Sidebar;
use crate::utils::{js_object, lat_lng, lat_lng_bounds};

/// Runtime state shared with the DOM and Leaflet callbacks through an
/// `Rc<RefCell<_>>`.
pub struct App {
    pub window: Window,
    pub document: Document,
    pub map: Map,
    pub sidebar: Sidebar,
    pub viewer: Viewer,
}

impl App {
    /// Create the Leaflet map inside `#map` and configure it from `config`.
    pub fn mount(
        window: Window,
        document: Document,
        sidebar: Sidebar,
        config: MapConfig,
    ) -> Result<Self, JsValue> {
        let map = leaflet::map(MAP_ELEMENT_ID)?;
        map.set_view(&lat_lng(config.center), config.zoom);
        map.set_max_bounds(&lat_lng_bounds(config.max_bounds));
        map.set_min_zoom(config.min_zoom);
        map.set_max_zoom(config.max_zoom);

        let tile_opts = js_object(&[(
            "attribution",
            JsValue::from_str(&config.attribution),
        )])?;
        leaflet::tile_layer(&config.tile_url, &tile_opts).add_to(&map);

        if !config.double_click_zoom {
            map.double_click_zoom().disable();
        }

        Ok(Self {
            window,
            document,
            map,
            sidebar,
            viewer: Viewer::new(config),
        })
    }

    pub fn sync_sidebar(&self) {
        self.sidebar.sync(self.viewer.panel());
    }
}
