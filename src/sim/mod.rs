//! Simulation module
//!
//! All gameplay logic lives here. This module must stay presentation-free:
//! - Fixed timestep only (one `update` per tick)
//! - Injected gap placement only (no global RNG)
//! - Integer positions so runs replay exactly
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod gaps;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::Aabb;
pub use gaps::{FixedGaps, GapSampler, RngSampler};
pub use obstacle::Obstacle;
pub use state::{DeathCause, GameEvent, GameSession};
pub use tick::{AUTOPILOT_MARGIN, TickInput, autopilot_wants_jump, next_obstacle, tick};
