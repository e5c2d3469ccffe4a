//! Single-slot mailbox between the detector loop and the render loop
//!
//! The detector side overwrites the slot when a call resolves; the render
//! side reads whatever is present each tick without waiting.

pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn post(&mut self, value: T) {
        self.slot = Some(value);
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
