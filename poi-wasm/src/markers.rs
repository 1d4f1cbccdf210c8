use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, JSON, Reflect};
use log::{debug, warn};
use poi_core::panel::escape_html;
use poi_core::{CLUSTER_ICON_PX, ClusterOptions, ClusterSize, cluster::icon_html};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::leaflet::{self, DivIcon, MarkerCluster, MarkerClusterGroup};
use crate::state::App;
use crate::utils::{describe, js_object, lat_lng};

/// Build one Leaflet marker per registered record, put them all in a cluster
/// group, then add the group to the map in a single call.
pub fn add_markers(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let a = app.borrow();
    let group = cluster_group(a.viewer.registry().options())?;
    let tooltip_opts = js_object(&[(
        "direction",
        JsValue::from_str(&a.viewer.config().tooltip_direction),
    )])?;

    for (idx, record) in a.viewer.registry().iter().enumerate() {
        let marker = leaflet::marker(&lat_lng(record.lat_lng()));
        // Leaflet inserts string tooltips as HTML
        marker.bind_tooltip(&escape_html(&record.title), &tooltip_opts);

        let st = app.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            if s.viewer.select(idx).is_some() {
                s.sync_sidebar();
            }
        }));
        marker.on("click", onclick.as_ref().unchecked_ref());
        onclick.forget();

        group.add_layer(&marker);
    }

    a.map.add_layer(&group);
    match a.viewer.last_report().and_then(|r| r.extent) {
        Some(extent) => debug!(
            "added {} markers spanning lat {}..{}, lng {}..{}",
            a.viewer.registry().len(),
            extent.min().y,
            extent.max().y,
            extent.min().x,
            extent.max().x
        ),
        None => debug!("added {} markers to the map", a.viewer.registry().len()),
    }
    Ok(())
}

fn cluster_group(options: &ClusterOptions) -> Result<MarkerClusterGroup, JsValue> {
    let opts = JSON::parse(&options.to_json())?;
    let icon = Closure::<dyn FnMut(MarkerCluster) -> DivIcon>::wrap(Box::new(
        |cluster: MarkerCluster| cluster_icon(cluster.get_child_count()),
    ));
    Reflect::set(
        &opts,
        &JsValue::from_str("iconCreateFunction"),
        icon.as_ref(),
    )?;
    icon.forget();
    leaflet::marker_cluster_group(&opts)
}

fn cluster_icon(count: u32) -> DivIcon {
    let size = ClusterSize::for_count(count);
    let px = JsValue::from_f64(CLUSTER_ICON_PX as f64);
    let opts = js_object(&[
        ("html", JsValue::from_str(&icon_html(count))),
        ("className", JsValue::from_str(&size.css_class())),
        ("iconSize", Array::of2(&px, &px).into()),
    ])
    .unwrap_or_else(|e| {
        warn!("could not build the {} cluster icon: {}", size.as_str(), describe(&e));
        JsValue::UNDEFINED
    });
    leaflet::div_icon(&opts)
}
