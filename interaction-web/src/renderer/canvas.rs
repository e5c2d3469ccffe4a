//! Canvas 2D backend - replays a command list on a browser canvas

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::commands::DrawCommand;

/// Stroke and label styling shared by all scenes
mod style {
    pub const STROKE: &str = "rgb(220, 220, 220)";
    pub const LABEL: &str = "rgb(255, 255, 255)";
    pub const STROKE_WIDTH: f64 = 10.0;
    pub const FONT: &str = "15px sans-serif";
}

pub fn execute(
    ctx: &CanvasRenderingContext2d,
    commands: &[DrawCommand],
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(style::STROKE);
    ctx.set_fill_style_str(style::LABEL);
    ctx.set_line_width(style::STROKE_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_font(style::FONT);
    ctx.set_text_align("center");

    for command in commands {
        match command {
            DrawCommand::Clear => ctx.clear_rect(0.0, 0.0, width, height),
            DrawCommand::Line(seg) => {
                ctx.begin_path();
                ctx.move_to(seg.x1.into(), seg.y1.into());
                ctx.line_to(seg.x2.into(), seg.y2.into());
                ctx.stroke();
            }
            DrawCommand::Text { label, x, y } => ctx.fill_text(label, (*x).into(), (*y).into())?,
            DrawCommand::Push => ctx.save(),
            DrawCommand::Pop => ctx.restore(),
            DrawCommand::Translate { x, y } => ctx.translate((*x).into(), (*y).into())?,
            DrawCommand::Rotate { angle } => ctx.rotate((*angle).into())?,
        }
    }

    Ok(())
}
