//! Tracking module - temporal smoothing and presence state
//!
//! Re-exports only. All logic in submodules.

mod rolling;
mod smoother;
mod presence;
mod lost_timer;
mod mailbox;

pub use rolling::RollingWindow;
pub use smoother::{HandposeHistory, TemporalSmoother};
pub use presence::{PresenceLevel, PresenceTracker, PresenceUpdate};
pub use lost_timer::{LostStatus, LostTimer};
pub use mailbox::Mailbox;
