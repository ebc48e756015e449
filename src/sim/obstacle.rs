//! Gapped obstacles
//!
//! An obstacle is a full-height column with one passable band. It is stored as
//! the band (`gap_top`, `gap`) rather than two solid boxes, so the collision
//! test stays a single comparison per axis.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::gaps::GapSampler;
use crate::settings::Settings;

/// A scrolling column with a gap band `[gap_top, gap_top + gap]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: i32,
    pub width: i32,
    /// Top of the gap band
    pub gap_top: i32,
    /// Height of the gap band
    pub gap: i32,
    /// Pixels moved left per tick
    pub speed: i32,
}

impl Obstacle {
    /// New obstacle at `start_x` with its gap placed by `sampler`
    ///
    /// Sampled values are clamped into the settings' gap range, so a scripted
    /// sampler can never produce a band outside the margins.
    pub fn new(start_x: i32, settings: &Settings, sampler: &mut impl GapSampler) -> Self {
        let range = settings.gap_top_range();
        let (lo, hi) = (*range.start(), *range.end());
        let gap_top = sampler.sample(range).clamp(lo, hi);
        Self {
            x: start_x,
            width: settings.obstacle_width,
            gap_top,
            gap: settings.gap_height,
            speed: settings.obstacle_speed,
        }
    }

    /// Scroll left one tick
    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> i32 {
        self.gap_top + self.gap
    }

    /// True if `avatar` overlaps the column and pokes out of the gap band
    pub fn collides_with(&self, avatar: &Aabb) -> bool {
        avatar.overlaps_x(self.x, self.right()) && !avatar.within_y(self.gap_top, self.gap_bottom())
    }

    /// Fully past the left screen edge
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0
    }

    /// Solid part above the gap
    pub fn top_rect(&self) -> Aabb {
        Aabb::new(IVec2::new(self.x, 0), IVec2::new(self.right(), self.gap_top))
    }

    /// Solid part below the gap, down to the playfield floor
    pub fn bottom_rect(&self, playfield_height: i32) -> Aabb {
        Aabb::new(
            IVec2::new(self.x, self.gap_bottom()),
            IVec2::new(self.right(), playfield_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::gaps::{FixedGaps, RngSampler};
    use proptest::prelude::*;

    fn obstacle_at(x: i32, gap_top: i32) -> Obstacle {
        Obstacle::new(x, &Settings::default(), &mut FixedGaps::constant(gap_top))
    }

    fn avatar_box(x: i32, y: i32) -> Aabb {
        Aabb::from_pos_size(IVec2::new(x, y), IVec2::splat(30))
    }

    #[test]
    fn test_new_uses_settings() {
        let o = obstacle_at(800, 200);
        assert_eq!(o.x, 800);
        assert_eq!(o.width, 50);
        assert_eq!(o.gap, 150);
        assert_eq!(o.gap_top, 200);
        assert_eq!(o.gap_bottom(), 350);
    }

    #[test]
    fn test_sampled_gap_clamped() {
        assert_eq!(obstacle_at(800, 10).gap_top, 50);
        assert_eq!(obstacle_at(800, 599).gap_top, 400);
    }

    #[test]
    fn test_update_moves_left() {
        let mut o = obstacle_at(800, 200);
        o.update();
        assert_eq!(o.x, 795);
        for _ in 0..10 {
            o.update();
        }
        assert_eq!(o.x, 745);
    }

    #[test]
    fn test_avatar_inside_gap_no_collision() {
        // Spans 300..330 inside band 200..350, overlapping horizontally
        let o = obstacle_at(90, 200);
        assert!(!o.collides_with(&avatar_box(100, 300)));
    }

    #[test]
    fn test_avatar_above_gap_collides() {
        let o = obstacle_at(90, 200);
        assert!(o.collides_with(&avatar_box(100, 150)));
    }

    #[test]
    fn test_avatar_below_gap_collides() {
        let o = obstacle_at(90, 200);
        assert!(o.collides_with(&avatar_box(100, 321)));
        assert!(!o.collides_with(&avatar_box(100, 320)));
    }

    #[test]
    fn test_band_edges_are_passable() {
        let o = obstacle_at(90, 200);
        assert!(!o.collides_with(&avatar_box(100, 200)));
        assert!(o.collides_with(&avatar_box(100, 199)));
    }

    #[test]
    fn test_no_horizontal_overlap_never_collides() {
        let o = obstacle_at(90, 200);
        for y in [-100, 0, 150, 300, 500, 700] {
            assert!(!o.collides_with(&avatar_box(140, y)));
            assert!(!o.collides_with(&avatar_box(60, y)));
        }
    }

    #[test]
    fn test_offscreen() {
        let mut o = obstacle_at(-49, 200);
        assert!(!o.is_offscreen());
        o.x = -50;
        assert!(!o.is_offscreen());
        o.x = -51;
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_solid_rects() {
        let o = obstacle_at(300, 120);
        let top = o.top_rect();
        let bottom = o.bottom_rect(600);
        assert_eq!(top, Aabb::new(IVec2::new(300, 0), IVec2::new(350, 120)));
        assert_eq!(bottom, Aabb::new(IVec2::new(300, 270), IVec2::new(350, 600)));
    }

    proptest! {
        #[test]
        fn prop_gap_fits_margins(seed in any::<u64>()) {
            let settings = Settings::default();
            let mut sampler = RngSampler::seeded(seed);
            for _ in 0..32 {
                let o = Obstacle::new(settings.playfield_width, &settings, &mut sampler);
                prop_assert!(o.gap_top >= 50);
                prop_assert!(o.gap_top <= 600 - 150 - 50);
            }
        }

        #[test]
        fn prop_collision_matches_solid_rects(
            gap_top in 50i32..=400,
            ax in 0i32..200,
            ay in -50i32..650,
        ) {
            let o = obstacle_at(90, gap_top);
            let avatar = avatar_box(ax, ay);
            let hits_solid = avatar.intersects(&o.top_rect())
                || avatar.intersects(&o.bottom_rect(600))
                || (avatar.overlaps_x(o.x, o.right()) && (avatar.min.y < 0 || avatar.max.y > 600));
            prop_assert_eq!(o.collides_with(&avatar), hits_solid);
        }
    }
}
