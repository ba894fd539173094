//! Pointer-event state machine.
//!
//! Translates raw pointer events into move and resize commands against the
//! targeted window. Two states: idle and tracking. Tracking state is
//! all-or-nothing; either a drag is in progress with every field populated,
//! or the controller holds nothing.

use crate::region::Region;
use crate::surface::WindowSurface;
use crate::window::{Window, WindowId};
use crate::workplace::{activate_window, find_window_mut};

/// Resolved pointer-down target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub window: WindowId,
    pub region: Region,
}

/// Live drag state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracking {
    pub window: WindowId,
    pub target: Region,
    pub start_x: i32,
    pub start_y: i32,
}

#[derive(Debug, Default)]
pub struct PointerController {
    tracking: Option<Tracking>,
}

impl PointerController {
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn tracked_window(&self) -> Option<WindowId> {
        self.tracking.map(|tracking| tracking.window)
    }

    /// Pointer-down entry. Misses and control buttons are ignored. A hit on
    /// the body region activates the window without starting a drag; any
    /// other window region activates it and enters tracking.
    pub fn pointer_down<S: WindowSurface>(
        &mut self,
        windows: &mut [Window<S>],
        hit: Option<Hit>,
        x: i32,
        y: i32,
    ) {
        let Some(hit) = hit else { return };
        if matches!(hit.region, Region::Control(_)) {
            return;
        }

        activate_window(windows, hit.window);
        if hit.region == Region::Body {
            return;
        }

        log::debug!("tracking window {} via {:?}", hit.window, hit.region);
        self.tracking = Some(Tracking {
            window: hit.window,
            target: hit.region,
            start_x: x,
            start_y: y,
        });
    }

    /// Drag step. The delta accumulated since pointer-down goes to resize
    /// when the drag started on an edge or corner, to move otherwise.
    pub fn pointer_move<S: WindowSurface>(&mut self, windows: &mut [Window<S>], x: i32, y: i32) {
        let Some(tracking) = self.tracking else {
            return;
        };
        let Some(window) = find_window_mut(windows, tracking.window) else {
            return;
        };

        let dx = x - tracking.start_x;
        let dy = y - tracking.start_y;
        if tracking.target.is_resize_target() {
            window.resize_by(dx, dy, tracking.target);
        } else {
            window.move_by(dx, dy);
        }
    }

    /// Pointer-up: ends the drag if one was in progress, zeroes the tracked
    /// window's captured baseline and clears all transient state.
    pub fn pointer_up<S: WindowSurface>(&mut self, windows: &mut [Window<S>]) {
        if let Some(tracking) = self.tracking.take() {
            if let Some(window) = find_window_mut(windows, tracking.window) {
                window.stop_dragging();
                window.reset_captured();
            }
        }
    }

    /// Pointer re-entry over the surface. No buttons held while a tracked
    /// window is still set means the matching pointer-up fired elsewhere;
    /// take the pointer-up path to recover.
    pub fn pointer_enter<S: WindowSurface>(
        &mut self,
        windows: &mut [Window<S>],
        buttons_down: bool,
    ) {
        if buttons_down || self.tracking.is_none() {
            return;
        }
        self.pointer_up(windows);
    }
}
