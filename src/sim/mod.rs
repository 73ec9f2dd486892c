//! Frame-synchronous simulation module
//!
//! All movement and animation logic lives here. This module must stay pure:
//! - One tick per rendered frame, no suspension points
//! - Walls fixed for the session, iterated in construction order
//! - No rendering, asset, or platform dependencies

pub mod animation;
pub mod collision;
pub mod rect;
pub mod room;
pub mod state;
pub mod tick;

pub use animation::{
    CAT_SHEET, ClipFinished, ClipId, ClipPlayer, ClipSpec, SpriteGrid, on_clip_complete,
    select_clip,
};
pub use collision::{BlockedSet, classify_collision};
pub use rect::Rect;
pub use room::{LayoutError, Room, RoomLayout};
pub use state::{Actor, BehaviorState, Direction, GameSession};
pub use tick::{TickInput, TickOutput, resolve_movement, tick};
