//! Host capabilities injected into the core.

use std::collections::HashMap;

use thiserror::Error;

use crate::geometry::Rect;

/// Write failure from a [`StateStore`]. Persistence is best-effort; callers
/// log this and move on, never propagate it.
#[derive(Debug, Error)]
#[error("state store write failed: {0}")]
pub struct StoreError(pub String);

/// Best-effort key-value persistence.
pub trait StateStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`StateStore`] for hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Measurement and mutation capability for one window's host element.
///
/// The interaction core reaches the document only through this trait.
pub trait WindowSurface {
    /// `offsetLeft`/`offsetTop` of the window element.
    fn offset_position(&self) -> (i32, i32);
    /// `offsetWidth`/`offsetHeight` of the window element.
    fn offset_size(&self) -> (i32, i32);
    /// `clientWidth`/`clientHeight` of the window element.
    fn client_size(&self) -> (i32, i32);
    /// Rendered height of the chrome ribbon.
    fn chrome_height(&self) -> i32;

    /// Applies explicit geometry to the element.
    fn apply_rect(&mut self, rect: Rect);
    /// Pins the element to the container origin and clears its explicit
    /// size so the container's sizing rules take over.
    fn apply_fill(&mut self);
    fn set_maximized_marker(&mut self, on: bool);
    fn set_active_marker(&mut self, on: bool);
    /// Foreground stacking override.
    fn set_raised(&mut self, on: bool);
    /// Text-selection toggle on the parent container.
    fn set_selection_enabled(&mut self, on: bool);
    /// Explicit height of the body region.
    fn set_body_height(&mut self, height: i32);
    /// Removes the element from its parent. The surface is dead afterward.
    fn detach(&mut self);
}
