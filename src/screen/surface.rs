//! Surface trait and the registry surfaces are looked up from.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// A display surface: somewhere rendered lines accumulate.
///
/// Surfaces are line-oriented and forgetful by design; the only way to
/// remove content is to wipe all of it.
pub trait Surface: Send {
    /// Append one rendered line (the surface supplies the line break).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    /// Wipe the entire surface content.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn clear(&mut self) -> io::Result<()>;
}

/// In-memory surface backed by a shared line list.
///
/// Clones share the same storage, so a test can keep one handle while the
/// screen owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current lines.
    ///
    /// # Panics
    ///
    /// Panics if another holder panicked while appending.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("surface lock poisoned").clone()
    }

    /// Number of lines currently on the surface.
    ///
    /// # Panics
    ///
    /// Panics if another holder panicked while appending.
    pub fn len(&self) -> usize {
        self.lines.lock().expect("surface lock poisoned").len()
    }

    /// Check if the surface is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Surface for MemorySurface {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .expect("surface lock poisoned")
            .push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.lines.lock().expect("surface lock poisoned").clear();
        Ok(())
    }
}

/// Registry of surfaces keyed by identifier.
///
/// This plays the role of the surrounding document: a surface is registered
/// under an id once at startup and taken out once at attach time. A missing
/// id is an expected outcome, not an error.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Box<dyn Surface>>,
}

impl SurfaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under an id, replacing any previous one.
    pub fn register(&mut self, id: impl Into<String>, surface: impl Surface + 'static) {
        self.surfaces.insert(id.into(), Box::new(surface));
    }

    /// Take the surface registered under `id`, if any.
    pub fn take(&mut self, id: &str) -> Option<Box<dyn Surface>> {
        self.surfaces.remove(id)
    }

    /// Check whether a surface is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }
}
