//! Detector seam - async hand estimation feeding the installation
//!
//! Detector calls are strictly serialized: while one call is pending, a new
//! capture request is refused rather than queued. Results land in the
//! installation's mailbox as soon as the call resolves, independent of the
//! render loop.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use crate::error::Result;
use crate::hand::HandDetection;
use crate::installation::Installation;
use crate::tracking::PresenceUpdate;

/// Anything that can estimate hands on the current video frame
pub trait HandDetector {
    fn estimate(&mut self) -> impl Future<Output = Result<Vec<HandDetection>>>;
}

/// Serializes detector calls. Clones share the in-flight flag.
#[derive(Clone, Default)]
pub struct DetectionPump {
    in_flight: Rc<Cell<bool>>,
}

/// Clears the in-flight flag when the call finishes or is dropped
struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl DetectionPump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    fn try_begin(&self) -> Option<InFlight> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlight(Rc::clone(&self.in_flight)))
    }

    /// Run one detector call and hand its result to the installation.
    ///
    /// Returns None when a call was already pending or the detector failed.
    /// The installation is only borrowed after the call resolves.
    pub async fn pump<D: HandDetector>(
        &self,
        detector: &mut D,
        installation: &RefCell<Installation>,
    ) -> Option<PresenceUpdate> {
        let Some(_guard) = self.try_begin() else {
            log::trace!("detector busy, skipping capture");
            return None;
        };

        match detector.estimate().await {
            Ok(detections) => Some(installation.borrow_mut().on_detections(detections)),
            Err(err) => {
                installation.borrow_mut().on_detector_error(&err);
                None
            }
        }
    }
}
