//! wasm_bindgen entry points

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::hand::HandDetection;
use crate::renderer::{execute, Viewport};

use super::js_detector::JsDetector;
use super::state::{installation_handle, pump, with_installation};

// ============================================================================
// SETUP
// ============================================================================

/// Initialize logging. Level: "trace", "debug", "info", "warn", "error"
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "info" => log::Level::Info,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    let _ = wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("interaction engine logging at {}", level);
}

/// Override engine parameters. Missing fields keep their defaults.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: EngineConfig = serde_wasm_bindgen::from_value(config)?;
    with_installation(|inst| inst.reconfigure(config))?;
    Ok(())
}

// ============================================================================
// DETECTOR SIDE
// ============================================================================

/// Run one detector call through `estimate_fn` (returns a promise of hands).
///
/// Resolves to the presence update, or null when a call was already pending
/// or the detector failed.
#[wasm_bindgen]
pub async fn capture(estimate_fn: Function) -> Result<JsValue, JsValue> {
    let installation = installation_handle();
    let mut detector = JsDetector::new(estimate_fn);

    match pump().pump(&mut detector, &installation).await {
        Some(update) => Ok(serde_wasm_bindgen::to_value(&update)?),
        None => Ok(JsValue::NULL),
    }
}

/// Push detections obtained outside `capture`
#[wasm_bindgen]
pub fn submit_detections(detections: JsValue) -> Result<JsValue, JsValue> {
    let detections: Vec<HandDetection> = serde_wasm_bindgen::from_value(detections)?;
    let update = with_installation(|inst| inst.on_detections(detections));
    Ok(serde_wasm_bindgen::to_value(&update)?)
}

#[wasm_bindgen]
pub fn report_detector_failure(message: String) {
    with_installation(|inst| inst.on_detector_error(&EngineError::Detector(message)));
}

// ============================================================================
// RENDER SIDE
// ============================================================================

/// Draw one frame onto `ctx` and return the frame signals
#[wasm_bindgen]
pub fn render_frame(
    ctx: &CanvasRenderingContext2d,
    now_ms: f64,
    width: f64,
    height: f64,
) -> Result<JsValue, JsValue> {
    let viewport = Viewport::new(width as f32, height as f32);
    let output = with_installation(|inst| inst.render(now_ms, viewport));
    execute(ctx, output.commands.commands(), width, height)?;
    Ok(serde_wasm_bindgen::to_value(&output.signals)?)
}

// ============================================================================
// QUERIES
// ============================================================================

#[wasm_bindgen]
pub fn presence_state() -> String {
    with_installation(|inst| inst.presence().as_str().to_string())
}

#[wasm_bindgen]
pub fn lost_ratio() -> Option<f64> {
    with_installation(|inst| inst.lost_ratio())
}

#[wasm_bindgen]
pub fn current_scene() -> usize {
    with_installation(|inst| inst.scene().index())
}

#[wasm_bindgen]
pub fn scene_title() -> String {
    with_installation(|inst| inst.scene().title().to_string())
}

#[wasm_bindgen]
pub fn scene_progress() -> String {
    with_installation(|inst| inst.scene().progress())
}

#[wasm_bindgen]
pub fn is_screensaver() -> bool {
    with_installation(|inst| inst.is_screensaver())
}
