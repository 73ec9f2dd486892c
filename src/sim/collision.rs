//! Collision classification between the cat and the room's walls
//!
//! Every wall is an axis-aligned rectangle, so a hit is resolved to a single
//! axis: whichever overlap is shallower decides which direction gets blocked.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Direction;

/// Classify the overlap between a moving hit-box and a fixed rectangle
///
/// Returns `None` when the rectangles do not overlap. Otherwise the result is
/// the movement direction that becomes prohibited:
/// - `overlap_x > overlap_y` is a vertical block: `North` when the mover's
///   bottom edge is lower than the fixed rectangle's, `South` otherwise
/// - anything else (ties included) is a horizontal block: `East` when the
///   mover's left edge is further left than the fixed rectangle's, `West`
///   otherwise
///
/// The labels compare edges, not contact sides, so a hit-box buried deep in a
/// large block can report a direction that points further into it.
pub fn classify_collision(moving: &Rect, fixed: &Rect) -> Option<Direction> {
    let overlap = moving.overlap(fixed)?;

    if overlap.x > overlap.y {
        if moving.y < fixed.y {
            Some(Direction::North)
        } else {
            Some(Direction::South)
        }
    } else if moving.x < fixed.x {
        Some(Direction::East)
    } else {
        Some(Direction::West)
    }
}

/// Directions the cat may not move in this tick
///
/// Rebuilt from scratch every tick, never carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedSet {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl BlockedSet {
    /// Nothing blocked
    pub fn clear() -> Self {
        Self::default()
    }

    /// Fold `classify_collision` over every obstacle
    ///
    /// A direction is blocked if any obstacle blocks it; a later obstacle
    /// never unblocks an earlier one.
    pub fn from_obstacles<'a>(
        hitbox: &Rect,
        obstacles: impl IntoIterator<Item = &'a Rect>,
    ) -> Self {
        let mut blocked = Self::clear();
        for obstacle in obstacles {
            if let Some(direction) = classify_collision(hitbox, obstacle) {
                blocked.block(direction);
            }
        }
        blocked
    }

    /// Mark a direction as blocked
    pub fn block(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::East => self.east = true,
            Direction::West => self.west = true,
        }
    }

    #[inline]
    pub fn is_blocked(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn any(&self) -> bool {
        self.north || self.south || self.east || self.west
    }
}
