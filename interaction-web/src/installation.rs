//! Installation - presence gating, scene rotation and the per-frame entry
//!
//! Two independent inputs drive this type:
//! - `on_detections` runs whenever a detector call resolves
//! - `render` runs every animation frame and reads whatever is buffered
//!
//! The outer presence tracker decides what reaches the buffer and when the
//! screensaver takes over. The active scene context only ever sees the
//! buffered detections.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::hand::{normalize_detections, DualHandFrame, HandDetection};
use crate::renderer::{DrawList, Viewport};
use crate::scene::{SceneContext, SceneKind};
use crate::tracking::{Mailbox, PresenceLevel, PresenceTracker, PresenceUpdate};

/// Per-frame state surfaced to the page
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSignals {
    pub presence: PresenceLevel,
    pub screensaver: bool,
    pub scene: SceneKind,
    pub lost_ratio: Option<f64>,
    pub scene_advanced: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub commands: DrawList,
    pub signals: FrameSignals,
}

pub struct Installation {
    config: EngineConfig,
    presence: PresenceTracker,
    mailbox: Mailbox<Vec<HandDetection>>,
    scene: SceneKind,
    context: Option<SceneContext>,
    screensaver: bool,
    lost_ratio: Option<f64>,
}

impl Installation {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: EngineConfig) -> Self {
        Self {
            presence: Self::tracker(&config),
            config,
            mailbox: Mailbox::new(),
            scene: SceneKind::default(),
            context: None,
            screensaver: true,
            lost_ratio: None,
        }
    }

    fn tracker(config: &EngineConfig) -> PresenceTracker {
        PresenceTracker::new(config.confidence_threshold, config.soft_lost_after, config.hard_lost_after)
    }

    /// Swap in a new configuration. Tracking state and the active scene
    /// context are rebuilt; the scene index is kept.
    pub fn reconfigure(&mut self, config: EngineConfig) -> Result<()> {
        config.validate()?;
        log::info!("reconfigured: {:?}", config);
        self.presence = Self::tracker(&config);
        self.config = config;
        self.mailbox.clear();
        self.context = None;
        self.lost_ratio = None;
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    pub fn presence(&self) -> PresenceLevel {
        self.presence.level()
    }

    pub fn is_screensaver(&self) -> bool {
        self.screensaver
    }

    /// Countdown ratio from the last rendered frame, if the scene was lost
    pub fn lost_ratio(&self) -> Option<f64> {
        self.lost_ratio
    }

    pub fn buffered(&self) -> Option<&Vec<HandDetection>> {
        self.mailbox.current()
    }

    /// Buffered detections as the active scene receives them
    pub fn buffered_frame(&self) -> DualHandFrame {
        self.mailbox.current().map(|d| normalize_detections(d)).unwrap_or_default()
    }

    pub fn has_scene_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn on_detections(&mut self, detections: Vec<HandDetection>) -> PresenceUpdate {
        let update = self.presence.update(&detections);

        if update.accepted {
            if self.screensaver {
                log::info!("hands back, resuming {}", self.scene.title());
                self.screensaver = false;
            }
            self.mailbox.post(detections);
        } else if update.level != PresenceLevel::Tracking {
            self.mailbox.clear();
        }

        if let Some(level) = update.entered {
            log::debug!("presence {} after {} misses", level.as_str(), update.misses);
        }
        if update.entered == Some(PresenceLevel::HardLost) {
            log::info!("no hands for {} frames, screensaver takes over", update.misses);
            self.screensaver = true;
            self.context = None;
            self.lost_ratio = None;
        }

        update
    }

    /// A failed detector call is skipped; the next call proceeds normally.
    pub fn on_detector_error(&mut self, err: &EngineError) {
        log::warn!("hand detector failed: {}", err);
    }

    pub fn render(&mut self, now_ms: f64, viewport: Viewport) -> FrameOutput {
        if self.screensaver {
            let mut commands = DrawList::new();
            commands.clear();
            return FrameOutput { commands, signals: self.signals(false) };
        }

        let raw = self.buffered_frame();
        let hand_count = self.mailbox.current().map_or(0, Vec::len);

        let scene = self.scene;
        let config = &self.config;
        let context = self.context.get_or_insert_with(|| {
            log::debug!("mounting {}", scene.title());
            SceneContext::new(scene, config)
        });
        let frame = context.frame(&raw, hand_count, now_ms, viewport, config);

        self.lost_ratio = frame.lost.ratio;
        if frame.lost.advance {
            self.advance_scene();
        }

        FrameOutput { commands: frame.commands, signals: self.signals(frame.lost.advance) }
    }

    fn advance_scene(&mut self) {
        let next = self.scene.next();
        log::info!("{} idle, advancing to {}", self.scene.title(), next.title());
        self.scene = next;
        self.context = None;
        self.lost_ratio = None;
    }

    fn signals(&self, scene_advanced: bool) -> FrameSignals {
        FrameSignals {
            presence: self.presence.level(),
            screensaver: self.screensaver,
            scene: self.scene,
            lost_ratio: self.lost_ratio,
            scene_advanced,
        }
    }
}

impl Default for Installation {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
