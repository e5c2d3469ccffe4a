//! Interaction Web - hand-driven procedural finger geometry
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod installation;
pub mod renderer;
pub mod scene;
pub mod tracking;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    capture, configure, current_scene, init_logging, is_screensaver, lost_ratio,
    presence_state, render_frame, report_detector_failure, scene_progress, scene_title,
    submit_detections, JsDetector,
};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use installation::{FrameOutput, FrameSignals, Installation};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
