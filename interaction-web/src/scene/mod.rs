//! Scene module - per-scene state and the three geometry mappers
//!
//! Re-exports only. All logic in submodules.

mod kind;
mod pairing;
mod unit;
mod pile;
mod circle;
mod indicator;
mod trace;
mod context;

pub use kind::SceneKind;
pub use pairing::{mirror, paired_hands};
pub use unit::{bend_offset, map_unit, unit_stroke};
pub use pile::{map_pile, pile_stroke, pile_tilt, settled_offset, vertical_offset};
pub use circle::{edge_strokes, map_circle, PentagonFigure};
pub use indicator::draw_countdown;
pub use trace::{EdgeTrace, TRACE_BATCH};
pub use context::{SceneContext, SceneFrame};
