//! Single-window state and operations.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Rect, ResizePlan};
use crate::options::Options;
use crate::region::Region;
use crate::surface::{StateStore, WindowSurface};

/// Unique window identifier, allocated sequentially per workplace.
pub type WindowId = u64;

/// Width of the resize hit-margin around the window border, in pixels.
/// The body height leaves room for it on both sides.
pub const DRAG_MARGIN: i32 = 5;

const LEFT_KEY: &str = "left";

/// One manipulable window: chrome, body, geometry, activation state.
///
/// Geometry is double-tracked: `rect` is the live rectangle, `captured` is
/// the baseline snapshot that delta math runs against. The baseline is
/// taken at activation and zeroed when the pointer is released.
pub struct Window<S: WindowSurface> {
    id: WindowId,
    surface: S,
    options: Rc<Options>,
    store: Rc<RefCell<dyn StateStore>>,
    maximized: bool,
    active: bool,
    captured: Rect,
    rect: Rect,
}

impl<S: WindowSurface> Window<S> {
    /// Wraps `surface`, reads its initial layout as the starting rectangle
    /// and paints it back.
    pub fn new(
        id: WindowId,
        surface: S,
        options: Rc<Options>,
        store: Rc<RefCell<dyn StateStore>>,
    ) -> Self {
        let (left, top) = surface.offset_position();
        let (width, height) = surface.client_size();
        let mut window = Self {
            id,
            surface,
            options,
            store,
            maximized: false,
            active: false,
            captured: Rect::default(),
            rect: Rect::new(left, top, width, height),
        };
        log::debug!(
            "window {} created at {},{} {}x{}",
            id,
            left,
            top,
            width,
            height
        );
        window.repaint();
        window
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn captured(&self) -> Rect {
        self.captured
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Activates or deactivates this window. Activation raises the window
    /// to the foreground and captures the on-screen geometry as the new
    /// delta baseline; deactivation clears both. Sibling bookkeeping lives
    /// in [`crate::workplace::activate_window`], which deactivates every
    /// other window first.
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.surface.set_active_marker(true);
            self.surface.set_raised(true);
            let (left, top) = self.surface.offset_position();
            let (width, height) = self.surface.offset_size();
            self.captured = Rect::new(left, top, width, height);
        } else {
            self.surface.set_active_marker(false);
            self.surface.set_raised(false);
            self.captured = Rect::default();
        }
        self.active = active;
    }

    /// Detaches the element from its parent. The window must not be used
    /// afterward.
    pub fn close(&mut self) {
        log::info!("window {} closed", self.id);
        self.surface.detach();
    }

    /// Toggles maximization.
    pub fn maximize(&mut self) {
        self.maximized = !self.maximized;
        log::debug!("window {} maximized={}", self.id, self.maximized);
        self.repaint();
    }

    /// Pushes the current state onto the surface: either the live rectangle
    /// or, when maximized, the container-filling geometry. Writes the left
    /// coordinate to the state store (best-effort) and recomputes the body
    /// height so it never overlaps the chrome or the resize margin.
    pub fn repaint(&mut self) {
        if self.maximized {
            self.surface.set_maximized_marker(true);
            self.surface.apply_fill();
        } else {
            self.surface.set_maximized_marker(false);
            self.surface.apply_rect(self.rect);
        }

        if let Err(err) = self
            .store
            .borrow_mut()
            .put(LEFT_KEY, &self.rect.left.to_string())
        {
            log::debug!("window {}: {}", self.id, err);
        }

        let body_height =
            self.surface.client_size().1 - self.surface.chrome_height() - 2 * DRAG_MARGIN;
        self.surface.set_body_height(body_height);
    }

    /// Moves the window by a pointer delta from the captured baseline.
    /// Ignored while maximized.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        if self.maximized {
            return;
        }
        self.surface.set_selection_enabled(false);
        self.rect.left = self.captured.left + dx;
        self.rect.top = self.captured.top + dy;
        self.repaint();
    }

    /// Resizes by a pointer delta against the edges engaged by `region`,
    /// clamped to the configured minimums. Ignored while maximized.
    pub fn resize_by(&mut self, dx: i32, dy: i32, region: Region) {
        if self.maximized {
            return;
        }
        self.surface.set_selection_enabled(false);
        let mut plan = ResizePlan::compute(self.captured, dx, dy, region);
        plan.clamp(self.options.min_width, self.options.min_height);
        plan.commit(&mut self.rect);
        self.repaint();
    }

    /// Ends a drag: re-enables text selection on the parent.
    pub fn stop_dragging(&mut self) {
        self.surface.set_selection_enabled(true);
    }

    /// Zeroes the delta baseline. Called when the pointer is released.
    pub fn reset_captured(&mut self) {
        self.captured = Rect::default();
    }
}
