use crate::config::PanelConfig;
use crate::example::example_text;
use crate::glyph::{self, GlyphForm};
use crate::log;
use crate::surface::DisplaySurface;

/// Sits between the page buttons and the textarea.
/// Owns the surface so nothing else touches it mid-call.
pub struct DisplayController<S: DisplaySurface> {
    surface: S,
    glyph: GlyphForm,
    verbose: bool,
}

impl<S: DisplaySurface> DisplayController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, &PanelConfig::default())
    }

    pub fn with_config(surface: S, config: &PanelConfig) -> Self {
        Self {
            surface,
            glyph: config.glyph,
            verbose: config.verbose,
        }
    }

    /// empty the surface, safe to call any number of times
    pub fn clear(&mut self) {
        self.surface.set_content("");
        if self.verbose {
            log::debug("cleared");
        }
    }

    /// Write the example command line with non-breaking hyphens.
    pub fn show_example(&mut self) {
        let display = glyph::to_display(&example_text(), self.glyph);
        self.surface.set_content(&display);
        if self.verbose {
            log::debug(&format!("example written ({} bytes)", display.len()));
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
