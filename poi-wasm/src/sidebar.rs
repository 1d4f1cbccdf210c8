use log::warn;
use poi_core::DetailPanel;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CLOSED_CLASS, SIDEBAR_CONTENT_ID, SIDEBAR_ID};
use crate::utils::describe;

/// DOM side of the detail panel: `#sidebar` shows or hides via the `closed`
/// class, `#sidebar-content` receives the rendered markup.
pub struct Sidebar {
    root: Element,
    content: Element,
}

impl Sidebar {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let root = document
            .get_element_by_id(SIDEBAR_ID)
            .ok_or_else(|| JsValue::from_str("#sidebar not found"))?;
        let content = document
            .get_element_by_id(SIDEBAR_CONTENT_ID)
            .ok_or_else(|| JsValue::from_str("#sidebar-content not found"))?;
        Ok(Self { root, content })
    }

    /// Mirror the panel state onto the DOM. Placeholder markup from the host
    /// page is kept until something is rendered.
    pub fn sync(&self, panel: &DetailPanel) {
        if panel.content().is_some() {
            // escaped by PanelContent::to_html
            self.content.set_inner_html(&panel.html());
        }
        if let Err(e) = self
            .root
            .class_list()
            .toggle_with_force(CLOSED_CLASS, !panel.is_open())
        {
            warn!("could not update #sidebar visibility: {}", describe(&e));
        }
    }
}
