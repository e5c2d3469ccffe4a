//! Engine errors
//!
//! Every failure here is frame-local: callers hold the previous state or skip
//! the affected draw, the frame loop itself never stops.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A detection carried a keypoint count other than 21
    #[error("malformed hand: expected 21 keypoints, found {found}")]
    MalformedHand { found: usize },

    /// Pentagon corner triangle violates the triangle inequality
    #[error("degenerate pentagon corner {corner}: sides {a}, {b} cannot span {opposite}")]
    DegenerateCorner {
        corner: usize,
        a: f32,
        b: f32,
        opposite: f32,
    },

    #[error("hand detector failed: {0}")]
    Detector(String),

    #[error("transform stack popped more often than pushed")]
    UnbalancedTransform,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
