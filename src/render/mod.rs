//! Presentation module
//!
//! The simulation never draws. Each frame it is turned into a display list
//! (`shapes::frame`) which a `Canvas` backend rasterizes.

pub mod ascii;
pub mod shapes;

pub use ascii::AsciiCanvas;
pub use shapes::{Color, DrawCommand, colors, frame};

use glam::Vec2;

use crate::sim::{Aabb, GameSession, GapSampler};

/// Drawing primitives a platform layer must provide
pub trait Canvas {
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn text(&mut self, pos: Vec2, text: &str, color: Color);
}

/// Replay a display list onto `canvas`
pub fn submit(commands: &[DrawCommand], canvas: &mut impl Canvas) {
    for command in commands {
        match command {
            DrawCommand::Rect { rect, color } => canvas.fill_rect(*rect, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => canvas.fill_circle(*center, *radius, *color),
            DrawCommand::Text { pos, text, color } => canvas.text(*pos, text, *color),
        }
    }
}

/// Render callback: draw the session's current state
pub fn draw<S: GapSampler>(session: &GameSession<S>, canvas: &mut impl Canvas) {
    submit(&frame(session), canvas);
}

/// Canvas that records what was drawn
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}
