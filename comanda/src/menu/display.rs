//! Display surface abstraction
//!
//! The menu region is replaced wholesale on every render; surfaces never
//! merge or append.

use std::sync::{Arc, Mutex};

/// A region the rendered menu is written into
pub trait DisplaySurface: Send {
    /// Replace the whole contents of the display region
    fn replace_contents(&mut self, rendered: String);
}

/// Writes the rendered menu to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn replace_contents(&mut self, rendered: String) {
        println!("{rendered}");
    }
}

#[derive(Debug, Default)]
struct BufferInner {
    contents: String,
    writes: usize,
}

/// In-memory surface for tests and headless runs
///
/// Clones share the same buffer, so a test can keep a handle while the
/// controller owns the surface.
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    inner: Arc<Mutex<BufferInner>>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the region
    pub fn contents(&self) -> String {
        self.inner.lock().expect("buffer surface poisoned").contents.clone()
    }

    /// How many times the region was replaced
    pub fn writes(&self) -> usize {
        self.inner.lock().expect("buffer surface poisoned").writes
    }
}

impl DisplaySurface for BufferSurface {
    fn replace_contents(&mut self, rendered: String) {
        let mut inner = self.inner.lock().expect("buffer surface poisoned");
        inner.contents = rendered;
        inner.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface_replaces_wholesale() {
        let mut surface = BufferSurface::new();
        let observer = surface.clone();

        surface.replace_contents("first".to_string());
        surface.replace_contents("second".to_string());

        assert_eq!(observer.contents(), "second");
        assert_eq!(observer.writes(), 2);
    }
}
