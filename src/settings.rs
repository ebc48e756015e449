//! Game settings
//!
//! Every gameplay constant lives here so it can be tuned without touching the
//! simulation. Settings are validated once, when a session is built, so an
//! impossible layout never surfaces mid-run.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration problems detected before a session starts
#[derive(Debug)]
pub enum SettingsError {
    /// A size, speed or interval that must be strictly positive
    NonPositive { field: &'static str, value: i64 },
    /// A margin that may be zero but not below it
    Negative { field: &'static str, value: i64 },
    /// Gap band plus margins is taller than the playfield
    GapDoesNotFit {
        gap_height: i32,
        margin_top: i32,
        margin_bottom: i32,
        playfield_height: i32,
    },
    /// Jump velocity must point up (negative)
    JumpNotUpward { jump_velocity: i32 },
    /// Avatar spawn box is not inside the playfield
    SpawnOutsidePlayfield { spawn: IVec2 },
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            SettingsError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            SettingsError::GapDoesNotFit {
                gap_height,
                margin_top,
                margin_bottom,
                playfield_height,
            } => write!(
                f,
                "gap height {gap_height} with margins {margin_top}/{margin_bottom} \
                 does not fit in playfield height {playfield_height}"
            ),
            SettingsError::JumpNotUpward { jump_velocity } => {
                write!(f, "jump velocity must be negative (got {jump_velocity})")
            }
            SettingsError::SpawnOutsidePlayfield { spawn } => {
                write!(f, "avatar spawn ({}, {}) is outside the playfield", spawn.x, spawn.y)
            }
            SettingsError::Io(e) => write!(f, "read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "parse settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: i32,
    pub playfield_height: i32,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,

    // === Avatar ===
    pub avatar_size: i32,
    pub avatar_spawn: IVec2,
    /// Added to velocity each tick
    pub gravity: i32,
    /// Velocity set by a jump (negative is up)
    pub jump_velocity: i32,

    // === Obstacles ===
    /// Pixels moved left each tick
    pub obstacle_speed: i32,
    pub obstacle_width: i32,
    pub gap_height: i32,
    pub obstacle_spacing: i32,
    pub gap_margin_top: i32,
    pub gap_margin_bottom: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,

            avatar_size: AVATAR_SIZE,
            avatar_spawn: IVec2::new(AVATAR_SPAWN_X, AVATAR_SPAWN_Y),
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_spacing: OBSTACLE_SPACING,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
        }
    }
}

impl Settings {
    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive: [(&'static str, i64); 9] = [
            ("playfield_width", self.playfield_width.into()),
            ("playfield_height", self.playfield_height.into()),
            ("tick_interval_ms", self.tick_interval_ms as i64),
            ("avatar_size", self.avatar_size.into()),
            ("gravity", self.gravity.into()),
            ("obstacle_speed", self.obstacle_speed.into()),
            ("obstacle_width", self.obstacle_width.into()),
            ("gap_height", self.gap_height.into()),
            ("obstacle_spacing", self.obstacle_spacing.into()),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        if self.gap_margin_top < 0 {
            return Err(SettingsError::Negative {
                field: "gap_margin_top",
                value: self.gap_margin_top.into(),
            });
        }
        if self.gap_margin_bottom < 0 {
            return Err(SettingsError::Negative {
                field: "gap_margin_bottom",
                value: self.gap_margin_bottom.into(),
            });
        }

        if self.gap_top_max().is_none_or(|max| max < self.gap_margin_top) {
            return Err(SettingsError::GapDoesNotFit {
                gap_height: self.gap_height,
                margin_top: self.gap_margin_top,
                margin_bottom: self.gap_margin_bottom,
                playfield_height: self.playfield_height,
            });
        }

        if self.jump_velocity >= 0 {
            return Err(SettingsError::JumpNotUpward {
                jump_velocity: self.jump_velocity,
            });
        }

        let spawn = self.avatar_spawn;
        let fits = |start: i32, limit: i32| {
            start >= 0
                && start
                    .checked_add(self.avatar_size)
                    .is_some_and(|end| end <= limit)
        };
        let inside = fits(spawn.x, self.playfield_width) && fits(spawn.y, self.playfield_height);
        if !inside {
            return Err(SettingsError::SpawnOutsidePlayfield { spawn });
        }

        Ok(())
    }

    /// Valid values for an obstacle's gap top (inclusive)
    ///
    /// Empty when the band and margins cannot fit in the playfield.
    pub fn gap_top_range(&self) -> RangeInclusive<i32> {
        match self.gap_top_max() {
            Some(max) => self.gap_margin_top..=max,
            None => 1..=0,
        }
    }

    /// Highest gap top, `None` if the subtraction leaves `i32`
    fn gap_top_max(&self) -> Option<i32> {
        self.playfield_height
            .checked_sub(self.gap_height)?
            .checked_sub(self.gap_margin_bottom)
    }

    /// Fixed tick interval as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse and validate settings from JSON (missing fields use defaults)
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter settings file)
    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
