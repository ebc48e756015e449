//! Gap Runner - A side-scrolling gap runner arcade game
//!
//! Core modules:
//! - `sim`: Simulation (avatar physics, obstacles, collisions, session state)
//! - `render`: Display list generation and canvas backends
//! - `platform`: Fixed-timestep tick source
//! - `settings`: Validated game configuration

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameEvent, GameSession, TickInput, tick};

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Fixed tick interval in milliseconds (50 Hz)
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Maximum ticks run per driver frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 800;
    pub const PLAYFIELD_HEIGHT: i32 = 600;

    /// Avatar defaults
    pub const AVATAR_SIZE: i32 = 30;
    pub const AVATAR_SPAWN_X: i32 = 100;
    pub const AVATAR_SPAWN_Y: i32 = PLAYFIELD_HEIGHT / 2;
    /// Added to velocity every tick (pixels/tick²)
    pub const GRAVITY: i32 = 1;
    /// Velocity after a jump (negative is up)
    pub const JUMP_VELOCITY: i32 = -10;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: i32 = 5;
    pub const OBSTACLE_WIDTH: i32 = 50;
    pub const GAP_HEIGHT: i32 = 150;
    /// Horizontal distance between consecutive spawns
    pub const OBSTACLE_SPACING: i32 = 300;
    /// Minimum distance between the gap band and the playfield edges
    pub const GAP_MARGIN_TOP: i32 = 50;
    pub const GAP_MARGIN_BOTTOM: i32 = 50;
}
