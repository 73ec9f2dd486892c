//! The room: static walls the cat collides with
//!
//! Walls are validated once at construction and never change afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::BlockedSet;
use super::rect::Rect;
use crate::consts::DOORWAY_HEIGHT;

/// Rejected room geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("wall {index} has non-positive size {width}x{height}")]
    DegenerateWall { index: usize, width: f32, height: f32 },

    #[error("wall {index} has a non-finite position or size")]
    NonFiniteWall { index: usize },

    #[error("viewport {width}x{height} too small for walls of thickness {thickness}")]
    ViewportTooSmall {
        width: f32,
        height: f32,
        thickness: f32,
    },

    #[error("room has no walls")]
    Empty,
}

/// How the room's walls are laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomLayout {
    /// Closed outer boundary plus a partition down the middle with a doorway
    Reference {
        width: f32,
        height: f32,
        wall_thickness: f32,
    },
    /// Explicit wall list, kept in the given order
    Custom { walls: Vec<Rect> },
}

/// Ordered, immutable set of walls
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    walls: Vec<Rect>,
}

impl Room {
    /// Validate and take ownership of a wall list
    pub fn new(walls: Vec<Rect>) -> Result<Self, LayoutError> {
        if walls.is_empty() {
            return Err(LayoutError::Empty);
        }
        for (index, wall) in walls.iter().enumerate() {
            let fields = [wall.x, wall.y, wall.width, wall.height];
            if !fields.iter().all(|v| v.is_finite()) {
                return Err(LayoutError::NonFiniteWall { index });
            }
            if !wall.is_well_formed() {
                return Err(LayoutError::DegenerateWall {
                    index,
                    width: wall.width,
                    height: wall.height,
                });
            }
        }
        Ok(Self { walls })
    }

    /// Four boundary walls and a two-piece partition at mid-width
    ///
    /// Wall order: bottom, top, left, right, lower partition, upper partition.
    /// The partition leaves a `DOORWAY_HEIGHT` opening centred vertically.
    pub fn from_viewport(width: f32, height: f32, thickness: f32) -> Result<Self, LayoutError> {
        let too_small = LayoutError::ViewportTooSmall {
            width,
            height,
            thickness,
        };
        if !(width > 3.0 * thickness && height > DOORWAY_HEIGHT + 2.0 * thickness) {
            return Err(too_small);
        }

        let partition_x = width / 2.0 - thickness / 2.0;
        let gap_bottom = (height - DOORWAY_HEIGHT) / 2.0;
        let gap_top = gap_bottom + DOORWAY_HEIGHT;

        Self::new(vec![
            Rect::new(0.0, 0.0, width, thickness),
            Rect::new(0.0, height - thickness, width, thickness),
            Rect::new(0.0, 0.0, thickness, height),
            Rect::new(width - thickness, 0.0, thickness, height),
            Rect::new(partition_x, thickness, thickness, gap_bottom - thickness),
            Rect::new(partition_x, gap_top, thickness, height - thickness - gap_top),
        ])
    }

    pub fn from_layout(layout: &RoomLayout) -> Result<Self, LayoutError> {
        match layout {
            RoomLayout::Reference {
                width,
                height,
                wall_thickness,
            } => Self::from_viewport(*width, *height, *wall_thickness),
            RoomLayout::Custom { walls } => Self::new(walls.clone()),
        }
    }

    /// Walls in construction order
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Directions a hit-box may not move in against these walls
    pub fn blocked_for(&self, hitbox: &Rect) -> BlockedSet {
        BlockedSet::from_obstacles(hitbox, self.iter())
    }
}

impl<'a> IntoIterator for &'a Room {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
