//! Hand detector backed by a promise-returning JS function
//!
//! The function is called with no arguments and must resolve to an array of
//! `{ handedness, score | confidence, keypoints: [{ x, y, z? }] }`.

use std::future::Future;

use js_sys::{Function, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::detector::HandDetector;
use crate::error::{EngineError, Result};
use crate::hand::HandDetection;

pub struct JsDetector {
    estimate: Function,
}

impl JsDetector {
    pub fn new(estimate: Function) -> Self {
        Self { estimate }
    }
}

fn detector_error(err: JsValue) -> EngineError {
    EngineError::Detector(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl HandDetector for JsDetector {
    fn estimate(&mut self) -> impl Future<Output = Result<Vec<HandDetection>>> {
        let call = self.estimate.call0(&JsValue::NULL);
        async move {
            let promise = call
                .map_err(detector_error)?
                .dyn_into::<Promise>()
                .map_err(|_| EngineError::Detector("estimate did not return a promise".into()))?;
            let value = JsFuture::from(promise).await.map_err(detector_error)?;
            serde_wasm_bindgen::from_value(value).map_err(|e| EngineError::Detector(e.to_string()))
        }
    }
}
