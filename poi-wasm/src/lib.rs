use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use poi_core::config::CONFIG_FILE;
use poi_core::{LoadError, MapConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

mod constants;
mod fetch;
mod leaflet;
mod markers;
mod sidebar;
mod state;
mod utils;

use crate::constants::{CLOSE_BUTTON_ID, OPEN_BUTTON_ID, QUERY_CSV, QUERY_ZOOM};
use crate::sidebar::Sidebar;
use crate::state::App;
use crate::utils::{asset_url, get_query_param};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let sidebar = Sidebar::from_document(&document)?;

    wasm_bindgen_futures::spawn_local(async move {
        let config = load_config(&window).await;
        let app = match App::mount(window, document, sidebar, config) {
            Ok(app) => Rc::new(RefCell::new(app)),
            Err(err) => {
                error!("could not create the map: {}", utils::describe(&err));
                return;
            }
        };
        if let Err(err) = attach_ui(app.clone()) {
            error!("could not wire the sidebar buttons: {}", utils::describe(&err));
        }
        if let Err(err) = load_markers(app).await {
            error!("could not add markers: {}", utils::describe(&err));
        }
    });
    Ok(())
}

/// Read `map-config.json` if the page ships one, then apply query string
/// overrides. Anything missing or invalid falls back to the defaults.
async fn load_config(window: &Window) -> MapConfig {
    let defaults = MapConfig::default();
    let mut urls = vec![asset_url(CONFIG_FILE)];
    if urls[0] != CONFIG_FILE {
        urls.push(CONFIG_FILE.to_string());
    }
    let mut config =
        match fetch::fetch_text_with_fallbacks(window, &urls, defaults.fetch_timeout_ms).await {
            Ok(text) => MapConfig::from_json(&text).unwrap_or_else(|e| {
                warn!("ignoring {}: {}", CONFIG_FILE, e);
                defaults
            }),
            Err(e) => {
                info!("no {} ({}), using defaults", CONFIG_FILE, e);
                defaults
            }
        };

    if let Ok(search) = window.location().search() {
        if let Some(csv) = get_query_param(&search, QUERY_CSV).filter(|v| !v.is_empty()) {
            config.csv_url = csv;
        }
        if let Some(zoom) = get_query_param(&search, QUERY_ZOOM) {
            match zoom.parse::<u8>() {
                Ok(z) => config.zoom = config.clamp_zoom(z),
                Err(_) => warn!("ignoring zoom={}", zoom),
            }
        }
    }
    config
}

fn attach_ui(state: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(btn) = doc.get_element_by_id(OPEN_BUTTON_ID) {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.viewer.open_panel();
            s.sync_sidebar();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id(CLOSE_BUTTON_ID) {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.viewer.close_panel();
            s.sync_sidebar();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}

/// Fetch the CSV once, feed it to the viewer and put the markers on the map.
async fn load_markers(state: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let (window, url, timeout_ms) = {
        let s = state.borrow();
        let cfg = s.viewer.config();
        (s.window.clone(), asset_url(&cfg.csv_url), cfg.fetch_timeout_ms)
    };
    let fetched = fetch::fetch_text(&window, &url, timeout_ms)
        .await
        .map_err(LoadError::from);

    let report = {
        let mut s = state.borrow_mut();
        let report = s.viewer.load(fetched);
        s.sync_sidebar();
        report
    };
    if report.error.is_none() && report.loaded > 0 {
        markers::add_markers(&state)?;
    }
    Ok(())
}
