//! Display list generation for a session frame

use glam::Vec2;

use crate::sim::{Aabb, GameSession, GapSampler};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.45, 0.75, 0.95, 1.0];
    pub const AVATAR: Color = [1.0, 0.9, 0.1, 1.0];
    pub const OBSTACLE: Color = [0.2, 0.75, 0.25, 1.0];
    pub const HUD_TEXT: Color = [0.0, 0.0, 0.0, 1.0];
}

/// Where the score overlay is anchored
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 20.0);

/// One primitive in a frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Aabb, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { pos: Vec2, text: String, color: Color },
}

/// Build the frame: avatar, then each obstacle's two columns, then the score
pub fn frame<S: GapSampler>(session: &GameSession<S>) -> Vec<DrawCommand> {
    let obstacles = session.obstacles();
    let height = session.settings().playfield_height;
    let mut commands = Vec::with_capacity(2 + obstacles.len() * 2);

    let avatar = session.avatar();
    commands.push(DrawCommand::Circle {
        center: avatar.center(),
        radius: avatar.radius(),
        color: colors::AVATAR,
    });

    for obstacle in obstacles {
        commands.push(DrawCommand::Rect {
            rect: obstacle.top_rect(),
            color: colors::OBSTACLE,
        });
        commands.push(DrawCommand::Rect {
            rect: obstacle.bottom_rect(height),
            color: colors::OBSTACLE,
        });
    }

    commands.push(DrawCommand::Text {
        pos: SCORE_POS,
        text: score_text(session.score()),
        color: colors::HUD_TEXT,
    });

    commands
}

/// Overlay text for a score
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}
