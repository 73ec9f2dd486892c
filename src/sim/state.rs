//! Session state and core simulation types
//!
//! One room, one cat. Everything the per-tick pipeline reads or writes lives
//! on `GameSession`; there are no globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{ClipId, ClipPlayer};
use super::rect::Rect;
use super::room::{LayoutError, Room};
use crate::consts::*;
use crate::settings::Settings;

/// Facing of the cat (no diagonals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step for this direction (y-up)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::North => Vec2::Y,
            Direction::South => Vec2::NEG_Y,
            Direction::East => Vec2::X,
            Direction::West => Vec2::NEG_X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// What the cat is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Breathing in place, loops until input arrives
    #[default]
    Idle,
    Walk,
    Run,
    /// Settling down after moving; finishes into `Idle`
    Sit,
}

impl BehaviorState {
    pub const ALL: [BehaviorState; 4] = [
        BehaviorState::Idle,
        BehaviorState::Walk,
        BehaviorState::Run,
        BehaviorState::Sit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorState::Idle => "idle",
            BehaviorState::Walk => "walk",
            BehaviorState::Run => "run",
            BehaviorState::Sit => "sit",
        }
    }

    /// True for the states that end on their own once moving stops
    pub fn is_settled(&self) -> bool {
        matches!(self, BehaviorState::Idle | BehaviorState::Sit)
    }
}

/// The player-controlled cat
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Bottom-left corner of the hit-box
    pub pos: Vec2,
    /// Hit-box size, fixed for the session
    pub size: Vec2,
    pub direction: Direction,
    pub state: BehaviorState,
    /// Pose as of the end of the previous tick (`None` before the first tick)
    pub previous_direction: Option<Direction>,
    pub previous_state: Option<BehaviorState>,
}

impl Actor {
    /// A cat sitting still, facing the viewer
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            direction: Direction::South,
            state: BehaviorState::Idle,
            previous_direction: None,
            previous_state: None,
        }
    }

    /// Current hit-box
    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Whether state or direction differ from the previous tick
    pub fn pose_changed(&self) -> bool {
        self.previous_state != Some(self.state) || self.previous_direction != Some(self.direction)
    }

    /// Remember the current pose for next tick's change detection
    pub fn record_pose(&mut self) {
        self.previous_state = Some(self.state);
        self.previous_direction = Some(self.direction);
    }
}

/// Complete session: the room, the cat, and the clip on screen
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Static walls, fixed for the session
    pub room: Room,
    pub actor: Actor,
    /// Clip currently playing for the cat
    pub player: ClipPlayer,
    /// Pixels per tick
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a session with the default walk/run speeds
    pub fn new(room: Room, actor: Actor) -> Self {
        let player = ClipPlayer::new(ClipId::for_pose(actor.state, actor.direction));
        Self {
            room,
            actor,
            player,
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            time_ticks: 0,
        }
    }

    pub fn with_speeds(mut self, walk_speed: f32, run_speed: f32) -> Self {
        self.walk_speed = walk_speed;
        self.run_speed = run_speed;
        self
    }

    /// Build the room and spawn the cat as described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, LayoutError> {
        let room = Room::from_layout(&settings.layout())?;
        let size = Vec2::splat(settings.actor_size);
        let actor = Actor::new(settings.spawn_position(), size);

        log::info!(
            "Session: {} walls, cat at ({}, {}), walk={} run={}",
            room.len(),
            actor.pos.x,
            actor.pos.y,
            settings.walk_speed,
            settings.run_speed
        );

        Ok(Self::new(room, actor).with_speeds(settings.walk_speed, settings.run_speed))
    }
}
