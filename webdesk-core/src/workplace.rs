//! Window collection for one desktop surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::options::Options;
use crate::pointer::{Hit, PointerController};
use crate::surface::{StateStore, WindowSurface};
use crate::window::{Window, WindowId};

/// Owns the windows of one desktop surface and the pointer controller that
/// drives them. Windows keep scan order; at most one is active.
pub struct Workplace<S: WindowSurface> {
    windows: Vec<Window<S>>,
    pointer: PointerController,
    options: Rc<Options>,
    store: Rc<RefCell<dyn StateStore>>,
    next_id: WindowId,
}

impl<S: WindowSurface> Workplace<S> {
    pub fn new(options: Options, store: Rc<RefCell<dyn StateStore>>) -> Self {
        Self {
            windows: Vec::new(),
            pointer: PointerController::default(),
            options: Rc::new(options),
            store,
            next_id: 1,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds a window over `surface` and appends it in scan order.
    pub fn add_window(&mut self, surface: S) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        let window = Window::new(id, surface, Rc::clone(&self.options), Rc::clone(&self.store));
        self.windows.push(window);
        id
    }

    /// Activates the most recently added window. Called once after the
    /// initial scan.
    pub fn activate_last(&mut self) {
        if let Some(id) = self.windows.last().map(Window::id) {
            self.activate(id);
        }
    }

    pub fn activate(&mut self, id: WindowId) {
        activate_window(&mut self.windows, id);
    }

    /// Closes a window and drops it from the collection. Later lookups for
    /// its id miss.
    pub fn close(&mut self, id: WindowId) {
        if let Some(window) = find_window_mut(&mut self.windows, id) {
            window.close();
        }
        self.windows.retain(|window| window.id() != id);
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(window) = find_window_mut(&mut self.windows, id) {
            window.maximize();
        }
    }

    pub fn pointer_down(&mut self, hit: Option<Hit>, x: i32, y: i32) {
        self.pointer.pointer_down(&mut self.windows, hit, x, y);
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.pointer.pointer_move(&mut self.windows, x, y);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.pointer_up(&mut self.windows);
    }

    pub fn pointer_enter(&mut self, buttons_down: bool) {
        self.pointer.pointer_enter(&mut self.windows, buttons_down);
    }

    pub fn is_tracking(&self) -> bool {
        self.pointer.is_tracking()
    }

    pub fn window(&self, id: WindowId) -> Option<&Window<S>> {
        self.windows.iter().find(|window| window.id() == id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(Window::id).collect()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|window| window.is_active())
            .map(Window::id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }
}

/// Deactivates every other window, then activates `id`. Keeps the
/// single-active invariant without recursing through siblings.
pub fn activate_window<S: WindowSurface>(windows: &mut [Window<S>], id: WindowId) {
    for window in windows.iter_mut() {
        if window.id() != id {
            window.set_active(false);
        }
    }
    if let Some(window) = find_window_mut(windows, id) {
        window.set_active(true);
    }
}

pub fn find_window_mut<S: WindowSurface>(
    windows: &mut [Window<S>],
    id: WindowId,
) -> Option<&mut Window<S>> {
    windows.iter_mut().find(|window| window.id() == id)
}
