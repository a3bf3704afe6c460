/// Region of the page the panel writes into.
///
/// Content is markup: whatever is set gets interpreted by the surface, so
/// callers escape before writing.
pub trait DisplaySurface {
    fn set_content(&mut self, markup: &str);
    fn content(&self) -> String;
}

/// In-memory surface for the native REPL and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSurface {
    buffer: String,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self { buffer: content.to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl DisplaySurface for BufferSurface {
    fn set_content(&mut self, markup: &str) {
        // replace, never append
        self.buffer.clear();
        self.buffer.push_str(markup);
    }

    fn content(&self) -> String {
        self.buffer.clone()
    }
}
