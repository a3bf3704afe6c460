use crate::surface::DisplaySurface;
use wasm_bindgen::prelude::*;
use web_sys::{window, Element};

/// A page element addressed by id, written through innerHTML.
pub struct DomSurface {
    id: String,
    element: Element,
}

impl DomSurface {
    /// Find the element once up front. A missing element means the page
    /// markup is broken, there is nothing to recover here.
    pub fn locate(id: &str) -> Result<Self, JsValue> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document, not running in a page?"))?;

        let element = doc
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("display surface '{}' not found", id)))?;

        Ok(Self { id: id.to_string(), element })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl DisplaySurface for DomSurface {
    fn set_content(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn content(&self) -> String {
        self.element.inner_html()
    }
}
