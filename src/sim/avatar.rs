//! The player avatar
//!
//! Integer position and velocity with constant-acceleration integration, so
//! motion is identical tick to tick at a fixed tick rate.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;

/// The falling square the player steers through gaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x never changes after spawn
    pub pos: IVec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub velocity: i32,
    /// Side of the square bounding box
    pub size: i32,
    gravity: i32,
    jump_velocity: i32,
}

impl Avatar {
    /// Fresh avatar at rest at the configured spawn point
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.avatar_spawn,
            velocity: 0,
            size: settings.avatar_size,
            gravity: settings.gravity,
            jump_velocity: settings.jump_velocity,
        }
    }

    /// Override velocity with the upward jump impulse
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    /// Advance one tick: gravity into velocity, velocity into position
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Current collision box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, IVec2::splat(self.size))
    }

    /// Where the bottom edge will be after the next `update`, without jumping
    pub fn predicted_bottom(&self) -> i32 {
        self.pos.y + self.size + self.velocity + self.gravity
    }

    pub fn center(&self) -> Vec2 {
        self.pos.as_vec2() + Vec2::splat(self.size as f32 / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.size as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_at_spawn_at_rest() {
        let avatar = Avatar::new(&Settings::default());
        assert_eq!(avatar.pos, IVec2::new(100, 300));
        assert_eq!(avatar.velocity, 0);
        assert_eq!(avatar.size, 30);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut avatar = Avatar::new(&Settings::default());
        let mut last_velocity = avatar.velocity;
        let mut last_y = avatar.pos.y;
        for _ in 0..20 {
            avatar.update();
            assert_eq!(avatar.velocity, last_velocity + 1);
            assert_eq!(avatar.pos.y, last_y + avatar.velocity);
            last_velocity = avatar.velocity;
            last_y = avatar.pos.y;
        }
        assert_eq!(avatar.pos.y, 300 + (1..=20).sum::<i32>());
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut avatar = Avatar::new(&Settings::default());
        for _ in 0..15 {
            avatar.update();
        }
        assert_eq!(avatar.velocity, 15);
        avatar.jump();
        assert_eq!(avatar.velocity, -10);

        // Jumping while rising also resets to the impulse
        avatar.update();
        avatar.jump();
        assert_eq!(avatar.velocity, -10);
    }

    #[test]
    fn test_jump_then_update_rises() {
        let mut avatar = Avatar::new(&Settings::default());
        avatar.jump();
        avatar.update();
        assert_eq!(avatar.velocity, -9);
        assert_eq!(avatar.pos.y, 291);
    }

    #[test]
    fn test_x_fixed() {
        let mut avatar = Avatar::new(&Settings::default());
        for i in 0..50 {
            if i % 7 == 0 {
                avatar.jump();
            }
            avatar.update();
            assert_eq!(avatar.pos.x, 100);
        }
    }

    #[test]
    fn test_bounds_and_prediction() {
        let mut avatar = Avatar::new(&Settings::default());
        let b = avatar.bounds();
        assert_eq!(b.min, IVec2::new(100, 300));
        assert_eq!(b.max, IVec2::new(130, 330));

        avatar.velocity = 4;
        let predicted = avatar.predicted_bottom();
        avatar.update();
        assert_eq!(avatar.bounds().max.y, predicted);
    }

    #[test]
    fn test_center_and_radius() {
        let avatar = Avatar::new(&Settings::default());
        assert_eq!(avatar.center(), Vec2::new(115.0, 315.0));
        assert_eq!(avatar.radius(), 15.0);
    }
}
