//! Tunable parameters for the tracking pipeline and the three scenes
//!
//! Defaults reproduce the installation as exhibited. JS can override any
//! subset through `configure()`; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keypoint smoothing window (frames)
    pub history_window: usize,
    /// Edge-length smoothing window (frames)
    pub edge_window: usize,
    /// Minimum detector confidence for a frame to count as tracked
    pub confidence_threshold: f32,
    /// Misses tolerated before buffered detections are dropped
    pub soft_lost_after: u32,
    /// Misses tolerated before the application takes over
    pub hard_lost_after: u32,
    /// Time a scene may stay handless before advancing
    pub lost_countdown_ms: f64,
    pub unit: UnitParams,
    pub pile: PileParams,
    pub circle: CircleParams,
    pub indicator: IndicatorParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window: 4,
            edge_window: 5,
            confidence_threshold: 0.75,
            soft_lost_after: 5,
            hard_lost_after: 200,
            lost_countdown_ms: 2000.0,
            unit: UnitParams::default(),
            pile: PileParams::default(),
            circle: CircleParams::default(),
            indicator: IndicatorParams::default(),
        }
    }
}

/// Upper bound for both smoothing windows (frames)
pub const MAX_WINDOW: usize = 600;

fn positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::InvalidConfig(format!("{} must be positive and finite, got {}", name, value)));
    }
    Ok(())
}

fn finite(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidConfig(format!("{} must be finite, got {}", name, value)));
    }
    Ok(())
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        for window in [self.history_window, self.edge_window] {
            if !(1..=MAX_WINDOW).contains(&window) {
                return Err(EngineError::InvalidConfig(format!(
                    "smoothing window {} outside [1, {}]",
                    window, MAX_WINDOW
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(EngineError::InvalidConfig(format!(
                "confidence_threshold {} outside [0, 1]",
                self.confidence_threshold
            )));
        }
        if self.hard_lost_after <= self.soft_lost_after {
            return Err(EngineError::InvalidConfig(format!(
                "hard_lost_after ({}) must exceed soft_lost_after ({})",
                self.hard_lost_after, self.soft_lost_after
            )));
        }
        if !self.lost_countdown_ms.is_finite() || self.lost_countdown_ms <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "lost_countdown_ms must be positive and finite, got {}",
                self.lost_countdown_ms
            )));
        }

        let (unit, pile, circle, indicator) = (&self.unit, &self.pile, &self.circle, &self.indicator);
        positive("unit.reach", unit.reach)?;
        positive("unit.divisor", unit.divisor)?;
        finite("unit.offset", unit.offset)?;
        finite("unit.label_drop", unit.label_drop)?;
        positive("pile.reach", pile.reach)?;
        positive("pile.scale", pile.scale)?;
        finite("pile.offset", pile.offset)?;
        finite("pile.label_offset", pile.label_offset)?;
        positive("circle.reach", circle.reach)?;
        positive("circle.scale", circle.scale)?;
        positive("circle.min_edge", circle.min_edge)?;
        finite("circle.hand_spacing", circle.hand_spacing)?;
        finite("circle.label_offset", circle.label_offset)?;
        positive("indicator.radius", indicator.radius)?;
        finite("indicator.inset", indicator.inset)?;

        if circle.min_edge > circle.reach {
            return Err(EngineError::InvalidConfig(format!(
                "circle.min_edge {} must not exceed circle.reach {}",
                circle.min_edge, circle.reach
            )));
        }
        Ok(())
    }
}

/// "Unit" scene: one bent stroke per finger, mirrored left/right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitParams {
    pub reach: f32,
    pub offset: f32,
    /// Raw vertical finger offset is divided by this
    pub divisor: f32,
    pub label_drop: f32,
}

impl Default for UnitParams {
    fn default() -> Self {
        Self { reach: 50.0, offset: 30.0, divisor: 1.5, label_drop: 50.0 }
    }
}

/// "Pile" scene: bent strokes stacked and tilted finger over finger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PileParams {
    pub reach: f32,
    pub offset: f32,
    pub scale: f32,
    pub label_offset: f32,
}

impl Default for PileParams {
    fn default() -> Self {
        Self { reach: 150.0, offset: 60.0, scale: 1.0, label_offset: 200.0 }
    }
}

/// "Circle" scene: finger extensions unfolded into a pentagon chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Maximum edge length, also the stroke length of each bent edge
    pub reach: f32,
    pub scale: f32,
    /// Floor for edge lengths so every corner triangle stays non-degenerate
    pub min_edge: f32,
    /// Horizontal distance of each figure from the canvas centre
    pub hand_spacing: f32,
    pub label_offset: f32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            reach: 200.0,
            scale: 2.0,
            min_edge: 10.0,
            hand_spacing: 300.0,
            label_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub radius: f32,
    /// Distance of the indicator centre from the top-right corner
    pub inset: f32,
    pub segments: usize,
    pub label: String,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            radius: 30.0,
            inset: 100.0,
            segments: 48,
            label: "switching scene".into(),
        }
    }
}
