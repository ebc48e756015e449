//! Fixed timestep simulation tick
//!
//! Applies one tick's input to the session, then advances it.

use super::gaps::GapSampler;
use super::obstacle::Obstacle;
use super::state::{GameEvent, GameSession};

/// Distance kept between the avatar's bottom edge and the gap bottom by the autopilot
pub const AUTOPILOT_MARGIN: i32 = 10;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space/click/tap)
    pub jump: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one tick
pub fn tick<S: GapSampler>(
    session: &mut GameSession<S>,
    input: &TickInput,
    mut on_event: impl FnMut(GameEvent),
) {
    let jump = input.jump || (input.idle_mode && autopilot_wants_jump(session));
    if jump {
        session.jump();
        on_event(GameEvent::Jumped);
    }
    session.update(on_event);
}

/// The obstacle the avatar still has to get through
pub fn next_obstacle<S: GapSampler>(session: &GameSession<S>) -> Option<&Obstacle> {
    let left = session.avatar().pos.x;
    session.obstacles().iter().find(|o| o.right() > left)
}

/// Jump whenever the next tick would carry the avatar's bottom edge past the
/// target just above the gap bottom. Far below a gap this jumps every tick,
/// which climbs at close to the full impulse.
pub fn autopilot_wants_jump<S: GapSampler>(session: &GameSession<S>) -> bool {
    let Some(target) = next_obstacle(session) else {
        return false;
    };
    let aim = target.gap_bottom() - AUTOPILOT_MARGIN;
    session.avatar().predicted_bottom() > aim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::gaps::FixedGaps;

    fn session(gaps: FixedGaps) -> GameSession<FixedGaps> {
        GameSession::new(Settings::default(), gaps).unwrap()
    }

    #[test]
    fn test_tick_without_input() {
        let mut s = session(FixedGaps::constant(225));
        let mut events = Vec::new();
        tick(&mut s, &TickInput::default(), |e| events.push(e));
        assert!(events.is_empty());
        assert_eq!(s.avatar().velocity, 1);
    }

    #[test]
    fn test_tick_jump() {
        let mut s = session(FixedGaps::constant(225));
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        tick(&mut s, &input, |e| events.push(e));
        assert_eq!(events, vec![GameEvent::Jumped]);
        // Impulse then one gravity step
        assert_eq!(s.avatar().velocity, -9);
        assert_eq!(s.avatar().pos.y, 291);
    }

    #[test]
    fn test_next_obstacle_skips_passed() {
        let mut s = session(FixedGaps::new(vec![100, 300]));
        s.obstacles_mut()[0].x = 40;
        let second = crate::sim::Obstacle {
            x: 300,
            ..s.obstacles()[0].clone()
        };
        s.obstacles_mut().push(second);
        // Right edge 90 is behind the avatar's left edge at 100
        assert_eq!(next_obstacle(&s).map(|o| o.x), Some(300));
        s.obstacles_mut()[0].x = 60;
        assert_eq!(next_obstacle(&s).map(|o| o.x), Some(60));
    }

    #[test]
    fn test_autopilot_jumps_below_gap() {
        let mut s = session(FixedGaps::constant(100));
        // Band 100..250, aim 240; avatar bottom at 330
        assert!(autopilot_wants_jump(&s));
        s.avatar_mut().pos.y = 150;
        s.avatar_mut().velocity = 0;
        assert!(!autopilot_wants_jump(&s));
    }

    #[test]
    fn test_autopilot_survives_constant_course() {
        let mut s = session(FixedGaps::constant(225));
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut deaths = 0;
        let mut cleared = 0;
        for _ in 0..2000 {
            tick(&mut s, &input, |e| match e {
                GameEvent::RunOver { .. } => deaths += 1,
                GameEvent::ObstacleCleared { .. } => cleared += 1,
                _ => {}
            });
        }
        assert_eq!(deaths, 0);
        assert!(cleared >= 25, "only cleared {cleared}");
        assert_eq!(s.score(), cleared);
    }

    #[test]
    fn test_autopilot_climbs_to_higher_gap() {
        let mut s = session(FixedGaps::constant(60));
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut s, &input, |_| {});
        }
        let bounds = s.avatar().bounds();
        assert!(bounds.within_y(60, 210), "avatar at {:?}", bounds);
    }
}
