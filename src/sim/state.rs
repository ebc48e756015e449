//! Game session state
//!
//! The session owns the avatar, the obstacle stream and the score, and is the
//! only thing a driver needs to hold. Death is not a phase: the run is reset
//! in place and play continues on the next tick.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::gaps::{GapSampler, RngSampler};
use super::obstacle::Obstacle;
use crate::settings::{Settings, SettingsError};

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hit the solid part of an obstacle
    Obstacle,
    /// Fell to the playfield floor
    Floor,
}

/// Things that happened during a tick, reported in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump impulse was applied
    Jumped,
    /// An obstacle left the screen; `score` is the new score
    ObstacleCleared { score: u32 },
    /// A new obstacle entered at the right edge
    ObstacleSpawned { gap_top: i32 },
    /// The run ended; emitted before the session resets
    RunOver {
        score: u32,
        cause: DeathCause,
        run_ticks: u64,
    },
}

/// One game, reset in place on every death
#[derive(Debug, Clone)]
pub struct GameSession<S = RngSampler<Pcg32>> {
    settings: Settings,
    sampler: S,
    avatar: Avatar,
    /// Ordered left to right (spawn order)
    obstacles: Vec<Obstacle>,
    score: u32,
    best_score: u32,
    /// Completed runs
    runs: u32,
    /// Ticks since construction
    time_ticks: u64,
    /// Ticks in the current run
    run_ticks: u64,
}

impl GameSession<RngSampler<Pcg32>> {
    /// Session with gaps drawn from a seeded PCG stream
    pub fn with_seed(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        log::info!("Session seed: {}", seed);
        Self::new(settings, RngSampler::seeded(seed))
    }
}

impl<S: GapSampler> GameSession<S> {
    /// Validate `settings` and start the first run
    pub fn new(settings: Settings, mut sampler: S) -> Result<Self, SettingsError> {
        settings.validate()?;
        let avatar = Avatar::new(&settings);
        let first = Obstacle::new(settings.playfield_width, &settings, &mut sampler);
        Ok(Self {
            settings,
            sampler,
            avatar,
            obstacles: vec![first],
            score: 0,
            best_score: 0,
            runs: 0,
            time_ticks: 0,
            run_ticks: 0,
        })
    }

    /// Apply the jump impulse; safe to call any time between ticks
    pub fn jump(&mut self) {
        self.avatar.jump();
    }

    /// Advance one tick, reporting events to `on_event` as they happen
    ///
    /// A `RunOver` event is delivered before the reset, so the sink still
    /// sees the final score.
    pub fn update(&mut self, mut on_event: impl FnMut(GameEvent)) {
        self.time_ticks += 1;
        self.run_ticks += 1;

        self.avatar.update();
        for obstacle in &mut self.obstacles {
            obstacle.update();
        }

        if let Some(cause) = self.check_death() {
            let score = self.score;
            log::info!(
                "Run {} over ({:?}): score {}, {} ticks",
                self.runs + 1,
                cause,
                score,
                self.run_ticks
            );
            on_event(GameEvent::RunOver {
                score,
                cause,
                run_ticks: self.run_ticks,
            });
            self.best_score = self.best_score.max(score);
            self.runs += 1;
            self.reset();
            return;
        }

        self.despawn_offscreen(&mut on_event);
        self.spawn_if_spaced(&mut on_event);
    }

    /// First failure condition found this tick, if any
    fn check_death(&self) -> Option<DeathCause> {
        if self.avatar.pos.y >= self.settings.playfield_height {
            return Some(DeathCause::Floor);
        }
        let bounds = self.avatar.bounds();
        self.obstacles
            .iter()
            .any(|o| o.collides_with(&bounds))
            .then_some(DeathCause::Obstacle)
    }

    fn despawn_offscreen(&mut self, on_event: &mut impl FnMut(GameEvent)) {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let removed = (before - self.obstacles.len()) as u32;
        for _ in 0..removed {
            self.score += 1;
            log::debug!("Obstacle cleared, score {}", self.score);
            on_event(GameEvent::ObstacleCleared { score: self.score });
        }
    }

    fn spawn_if_spaced(&mut self, on_event: &mut impl FnMut(GameEvent)) {
        let threshold = self.settings.playfield_width - self.settings.obstacle_spacing;
        let due = self.obstacles.last().is_none_or(|last| last.x < threshold);
        if due {
            let obstacle = self.spawn_obstacle();
            log::debug!("Spawned obstacle with gap at {}", obstacle.gap_top);
            on_event(GameEvent::ObstacleSpawned {
                gap_top: obstacle.gap_top,
            });
            self.obstacles.push(obstacle);
        }
    }

    fn spawn_obstacle(&mut self) -> Obstacle {
        Obstacle::new(
            self.settings.playfield_width,
            &self.settings,
            &mut self.sampler,
        )
    }

    /// Start a fresh run: new avatar, one obstacle at the right edge, score 0
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(&self.settings);
        self.obstacles.clear();
        let first = self.spawn_obstacle();
        self.obstacles.push(first);
        self.score = 0;
        self.run_ticks = 0;
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score of any run in this session (not persisted)
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.score)
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn run_ticks(&self) -> u64 {
        self.run_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }
}
