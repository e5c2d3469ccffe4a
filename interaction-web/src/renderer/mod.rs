//! Renderer module - draw command stream and its backends
//!
//! Re-exports only. All logic in submodules.

mod commands;
mod transform;
mod canvas;

pub use commands::{DrawCommand, DrawList, LineSegment, Viewport};
pub use transform::{flatten, Flattened};
pub use canvas::execute;
