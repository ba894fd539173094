//! Browser layer for the webdesk window-manager widget.
//!
//! Scans the page for `.desktop` surfaces, dresses every `.window` element
//! in chrome, and wires the pointer events that drive the interaction core
//! in `webdesk-core`.

pub mod chrome;
pub mod error;
pub mod hit;
pub mod manager;
pub mod storage;
pub mod surface;

pub use error::DeskError;
pub use hit::{resolve, WindowIndex};
pub use manager::{bootstrap, run, Desk};
pub use storage::LocalStore;
pub use surface::DomSurface;

use wasm_bindgen::prelude::*;

/// Page entry point: sets up logging and boots every desktop surface. The
/// returned context is leaked; the widgets live as long as the page.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    match manager::bootstrap() {
        Ok(desk) => {
            log::info!("webdesk running with {} window(s)", desk.window_count());
            std::mem::forget(desk);
        }
        Err(err) => log::error!("webdesk failed to start: {err}"),
    }
}
