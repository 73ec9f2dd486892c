//! Catwalk - a cat wandering around a walled room
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (collision, movement, animation state)
//! - `input`: Logical actions and key bindings feeding the simulation
//! - `settings`: Data-driven tuning loaded from JSON

pub mod input;
pub mod settings;
pub mod sim;

pub use input::{Action, ActionSource, HeldKeys, KeyBindings};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport, matches a stock 640x480 window
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;
    /// Thickness of the room's walls
    pub const WALL_THICKNESS: f32 = 16.0;

    /// Cat hit-box is square (one sprite cell at 3x scale)
    pub const ACTOR_SIZE: f32 = 96.0;
    /// Default spawn sits this far below the viewport centre
    pub const SPAWN_DROP: f32 = 64.0;
    /// Pixels per tick while walking
    pub const WALK_SPEED: f32 = 1.0;
    /// Pixels per tick while running
    pub const RUN_SPEED: f32 = 3.0;

    /// Height of the opening in the interior partition
    pub const DOORWAY_HEIGHT: f32 = ACTOR_SIZE * 2.0;
}
