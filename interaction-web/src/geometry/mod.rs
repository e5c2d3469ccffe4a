//! Geometry module - finger edges and the pentagon they close
//!
//! Re-exports only. All logic in submodules.

mod triangle;
mod edges;
mod pentagon;

pub use triangle::{aggregate, corner_angle, is_valid_triangle};
pub use edges::{EdgeLengthExtractor, EdgeLengthSet};
pub use pentagon::{solve_corners, PentagonCornerSet};
