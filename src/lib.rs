// wasm helper for the command line inspect page
// fills the textarea with a sample java command line, or clears it
pub mod config;
pub mod controller;
pub mod example;
pub mod glyph;
pub mod log;
pub mod surface;
pub mod trigger;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::PanelConfig;
pub use controller::DisplayController;
pub use glyph::GlyphForm;
pub use surface::{BufferSurface, DisplaySurface};
pub use trigger::Trigger;

#[cfg(target_arch = "wasm32")]
pub use web::ExamplePanel;
