//! Pointer-driven desktop-window interaction core.
//!
//! State machine and geometry for draggable, resizable, maximizable windows
//! hosted on a desktop surface. The core never touches a document directly;
//! layout measurement and mutation are injected through
//! [`surface::WindowSurface`], so the interaction logic runs (and is tested)
//! without a rendering host.

pub mod geometry;
pub mod options;
pub mod pointer;
pub mod region;
pub mod surface;
pub mod window;
pub mod workplace;

pub use geometry::{Rect, ResizePlan};
pub use options::Options;
pub use pointer::{Hit, PointerController, Tracking};
pub use region::{Control, Edge, Region};
pub use surface::{MemoryStore, StateStore, StoreError, WindowSurface};
pub use window::{Window, WindowId, DRAG_MARGIN};
pub use workplace::Workplace;
