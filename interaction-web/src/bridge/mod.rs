//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod state;
mod js_detector;
mod entry;

pub use entry::{
    capture, configure, current_scene, init_logging, is_screensaver, lost_ratio,
    presence_state, render_frame, report_detector_failure, scene_progress, scene_title,
    submit_detections,
};
pub use js_detector::JsDetector;
