//! Draw command stream handed to the renderer each frame
//!
//! Immediate-mode: a clear, then lines and labels under a push/pop stack
//! of translate/rotate transforms. Nothing is ever read back.

use serde::Serialize;

/// Canvas size in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Clear,
    Line(LineSegment),
    Text { label: String, x: f32, y: f32 },
    Push,
    Pop,
    Translate { x: f32, y: f32 },
    Rotate { angle: f32 },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.segment(LineSegment::new(x1, y1, x2, y2));
    }

    pub fn segment(&mut self, segment: LineSegment) {
        self.commands.push(DrawCommand::Line(segment));
    }

    pub fn text(&mut self, label: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text { label: label.to_owned(), x, y });
    }

    pub fn push(&mut self) {
        self.commands.push(DrawCommand::Push);
    }

    pub fn pop(&mut self) {
        self.commands.push(DrawCommand::Pop);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    pub fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    /// Run `draw` between a push and its matching pop
    pub fn scoped(&mut self, draw: impl FnOnce(&mut Self)) {
        self.push();
        draw(self);
        self.pop();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_balances_stack() {
        let mut list = DrawList::new();
        list.scoped(|l| {
            l.translate(1.0, 2.0);
            l.line(0.0, 0.0, 1.0, 1.0);
        });
        assert_eq!(list.commands().first(), Some(&DrawCommand::Push));
        assert_eq!(list.commands().last(), Some(&DrawCommand::Pop));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_serializes_with_op_tag() {
        let mut list = DrawList::new();
        list.rotate(0.5);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"op":"rotate","angle":0.5}]"#);
    }
}
