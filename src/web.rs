// js facing side of the panel, everything the page script can call
use crate::config::{PanelConfig, DEFAULT_TARGET_ID};
use crate::controller::DisplayController;
use crate::dom::DomSurface;
use crate::example;
use crate::glyph;
use crate::log;
use crate::surface::DisplaySurface;
use wasm_bindgen::prelude::*;

// better errors in browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

// the page guarantees form_ta exists; if it doesn't the button just does nothing
fn with_default_panel(op: impl FnOnce(&mut DisplayController<DomSurface>)) {
    if let Ok(surface) = DomSurface::locate(DEFAULT_TARGET_ID) {
        let mut controller = DisplayController::new(surface);
        op(&mut controller);
    }
}

/// clear button handler
#[wasm_bindgen(js_name = clearTextArea)]
pub fn clear_text_area() {
    with_default_panel(|ctl| ctl.clear());
}

/// example button handler
#[wasm_bindgen(js_name = showExample)]
pub fn show_example() {
    with_default_panel(|ctl| ctl.show_example());
}

/// Turn textarea content back into a plain one-line command before posting.
#[wasm_bindgen(js_name = normaliseCommandLine)]
pub fn normalise_command_line(text: &str) -> String {
    glyph::from_display(text)
}

#[wasm_bindgen(js_name = isExampleInvocation)]
pub fn is_example_invocation(text: &str) -> bool {
    example::is_example_invocation(&glyph::from_display(text))
}

/// Panel bound to a configurable element, for pages that don't use form_ta.
#[wasm_bindgen]
pub struct ExamplePanel {
    controller: DisplayController<DomSurface>,
}

impl ExamplePanel {
    fn build(config: PanelConfig) -> Result<ExamplePanel, JsValue> {
        let surface = DomSurface::locate(&config.target_id)?;
        if config.verbose {
            log::info(&format!("panel bound to #{}", surface.id()));
        }
        Ok(ExamplePanel {
            controller: DisplayController::with_config(surface, &config),
        })
    }
}

#[wasm_bindgen]
impl ExamplePanel {
    /// `options` is an optional `{ target_id, glyph, verbose }` object.
    /// Throws if the options don't decode or the element isn't there.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<ExamplePanel, JsValue> {
        let config = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                serde_wasm_bindgen::from_value::<PanelConfig>(opts)?
            }
            _ => PanelConfig::default(),
        };
        Self::build(config)
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ExamplePanel, JsValue> {
        let config = PanelConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(config)
    }

    pub fn clear(&mut self) {
        self.controller.clear();
    }

    #[wasm_bindgen(js_name = showExample)]
    pub fn show_example(&mut self) {
        self.controller.show_example();
    }

    pub fn content(&self) -> String {
        self.controller.surface().content()
    }

    #[wasm_bindgen(getter, js_name = targetId)]
    pub fn target_id(&self) -> String {
        self.controller.surface().id().to_string()
    }
}
