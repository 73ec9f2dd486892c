//! Per-frame simulation tick
//!
//! Order within a tick:
//! 1. Blocked directions from the cat's current hit-box against every wall
//! 2. Movement and behaviour state from the held actions
//! 3. Clip selection on a pose change, then the pose is recorded
//! 4. Clip playback, where a finished sit clip turns the cat idle

use glam::Vec2;

use super::animation::{ClipId, on_clip_complete, select_clip};
use super::collision::BlockedSet;
use super::state::{Actor, BehaviorState, Direction, GameSession};
use crate::input::{Action, ActionSource};

/// Held actions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_west: bool,
    pub move_east: bool,
    pub move_north: bool,
    pub move_south: bool,
    /// Run modifier (only matters while a direction is held)
    pub run: bool,
}

impl TickInput {
    /// Snapshot every action from an input backend
    pub fn sample(source: &impl ActionSource) -> Self {
        Self {
            move_west: source.is_held(Action::MoveWest),
            move_east: source.is_held(Action::MoveEast),
            move_north: source.is_held(Action::MoveNorth),
            move_south: source.is_held(Action::MoveSouth),
            run: source.is_held(Action::Run),
        }
    }

    /// The one direction that counts this tick: West, then East, North, South
    pub fn direction(&self) -> Option<Direction> {
        if self.move_west {
            Some(Direction::West)
        } else if self.move_east {
            Some(Direction::East)
        } else if self.move_north {
            Some(Direction::North)
        } else if self.move_south {
            Some(Direction::South)
        } else {
            None
        }
    }
}

/// What the frame driver needs to draw after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub position: Vec2,
    pub direction: Direction,
    pub state: BehaviorState,
    pub clip: ClipId,
    /// Sheet cell to draw
    pub frame_cell: u16,
    /// A new clip started this tick
    pub clip_started: bool,
    /// A non-looping clip finished this tick
    pub clip_finished: bool,
    pub blocked: BlockedSet,
}

/// Apply held input to the cat
///
/// Facing always follows the winning direction, even into a wall; only the
/// displacement is dropped when that direction is blocked. With nothing held
/// a moving cat sits down, and a sitting or idle one stays put.
pub fn resolve_movement(
    actor: &mut Actor,
    blocked: &BlockedSet,
    input: &TickInput,
    walk_speed: f32,
    run_speed: f32,
) {
    let Some(direction) = input.direction() else {
        if !actor.state.is_settled() {
            actor.state = BehaviorState::Sit;
        }
        return;
    };

    actor.direction = direction;
    let step = if blocked.is_blocked(direction) {
        Vec2::ZERO
    } else {
        direction.unit()
    };

    if input.run {
        actor.state = BehaviorState::Run;
        actor.pos += step * run_speed;
    } else {
        actor.state = BehaviorState::Walk;
        actor.pos += step * walk_speed;
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> TickOutput {
    session.time_ticks += 1;

    let blocked = session.room.blocked_for(&session.actor.hitbox());
    resolve_movement(
        &mut session.actor,
        &blocked,
        input,
        session.walk_speed,
        session.run_speed,
    );

    let actor = &mut session.actor;
    let changed = actor.pose_changed();
    let selected = select_clip(actor.state, actor.direction, changed);
    if let Some(clip) = selected {
        log::debug!(
            "Tick {}: {} facing {} -> clip {}",
            session.time_ticks,
            actor.state.as_str(),
            actor.direction.as_str(),
            clip.name()
        );
        session.player.play(clip);
    }
    actor.record_pose();

    let finished = session.player.advance(dt);
    if finished.is_some() {
        on_clip_complete(actor);
    }

    TickOutput {
        position: actor.pos,
        direction: actor.direction,
        state: actor.state,
        clip: session.player.clip(),
        frame_cell: session.player.current_cell(),
        clip_started: selected.is_some(),
        clip_finished: finished.is_some(),
        blocked,
    }
}
