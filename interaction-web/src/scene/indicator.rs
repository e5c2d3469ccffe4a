//! Countdown ring shown while a scene has lost its hands

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::IndicatorParams;
use crate::renderer::{DrawList, Viewport};

/// Arc from twelve o'clock, clockwise, covering `ratio` of the circle
/// (clamped to [0, 1]), plus the label underneath.
pub fn draw_countdown(ratio: f64, viewport: Viewport, params: &IndicatorParams, out: &mut DrawList) {
    let ratio = ratio.clamp(0.0, 1.0) as f32;
    let steps = (params.segments.max(1) as f32 * ratio).ceil() as usize;

    out.scoped(|out| {
        out.translate(viewport.width - params.inset, params.inset);

        let point = |t: f32| {
            let angle = -FRAC_PI_2 + TAU * ratio * t;
            (params.radius * angle.cos(), params.radius * angle.sin())
        };
        for k in 0..steps {
            let (x1, y1) = point(k as f32 / steps as f32);
            let (x2, y2) = point((k + 1) as f32 / steps as f32);
            out.line(x1, y1, x2, y2);
        }

        out.text(&params.label, 0.0, params.radius + 25.0);
    });
}
