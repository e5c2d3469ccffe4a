//! Resolves a command stream into world-space geometry
//!
//! Mirrors what a canvas does with save/restore/translate/rotate, so
//! scene output can be checked without one.

use nalgebra::{Isometry2, Point2};

use crate::error::{EngineError, Result};

use super::commands::{DrawCommand, LineSegment};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flattened {
    pub segments: Vec<LineSegment>,
    pub labels: Vec<(String, Point2<f32>)>,
}

pub fn flatten(commands: &[DrawCommand]) -> Result<Flattened> {
    let mut current = Isometry2::identity();
    let mut stack: Vec<Isometry2<f32>> = Vec::new();
    let mut out = Flattened::default();

    for command in commands {
        match command {
            DrawCommand::Clear => {
                out.segments.clear();
                out.labels.clear();
            }
            DrawCommand::Line(seg) => {
                let a = current * Point2::new(seg.x1, seg.y1);
                let b = current * Point2::new(seg.x2, seg.y2);
                out.segments.push(LineSegment::new(a.x, a.y, b.x, b.y));
            }
            DrawCommand::Text { label, x, y } => {
                out.labels.push((label.clone(), current * Point2::new(*x, *y)));
            }
            DrawCommand::Push => stack.push(current),
            DrawCommand::Pop => {
                current = stack.pop().ok_or(EngineError::UnbalancedTransform)?;
            }
            DrawCommand::Translate { x, y } => {
                current *= Isometry2::translation(*x, *y);
            }
            DrawCommand::Rotate { angle } => {
                current *= Isometry2::rotation(*angle);
            }
        }
    }

    Ok(out)
}
