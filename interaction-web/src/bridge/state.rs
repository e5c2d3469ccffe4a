//! Thread-local engine state shared by all entry points

use std::cell::RefCell;
use std::rc::Rc;

use crate::detector::DetectionPump;
use crate::installation::Installation;

thread_local! {
    static INSTALLATION: Rc<RefCell<Installation>> = Rc::new(RefCell::new(Installation::default()));
    static PUMP: DetectionPump = DetectionPump::new();
}

pub fn with_installation<R>(f: impl FnOnce(&mut Installation) -> R) -> R {
    INSTALLATION.with(|cell| f(&mut cell.borrow_mut()))
}

/// Shared handle for async callers, which must not hold a borrow across an await
pub fn installation_handle() -> Rc<RefCell<Installation>> {
    INSTALLATION.with(Rc::clone)
}

pub fn pump() -> DetectionPump {
    PUMP.with(DetectionPump::clone)
}
