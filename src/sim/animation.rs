//! Animation clips and playback for the cat
//!
//! All sixteen clips (4 states x 4 facings) come from one sprite sheet sliced
//! into a 17 x 32 grid. Clips store grid cell indices only; turning a cell
//! into pixels is `SpriteGrid`'s job, and loading the image is the frame
//! driver's.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Actor, BehaviorState, Direction};

/// A sprite sheet sliced into equal cells
///
/// Cells are numbered row-major starting from the bottom-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteGrid {
    pub rows: u16,
    pub columns: u16,
}

/// Layout of the cat sheet
pub const CAT_SHEET: SpriteGrid = SpriteGrid {
    rows: 17,
    columns: 32,
};

impl SpriteGrid {
    pub fn cell_count(&self) -> u16 {
        self.rows * self.columns
    }

    /// (column, row) of a cell, row 0 at the bottom
    pub fn cell(&self, index: u16) -> Option<(u16, u16)> {
        if index >= self.cell_count() {
            return None;
        }
        Some((index % self.columns, index / self.columns))
    }

    /// Pixel rectangle of a cell on a sheet of the given size (y-up)
    pub fn source_rect(&self, index: u16, sheet_width: f32, sheet_height: f32) -> Option<Rect> {
        let (column, row) = self.cell(index)?;
        let cell_w = sheet_width / self.columns as f32;
        let cell_h = sheet_height / self.rows as f32;
        Some(Rect::new(
            column as f32 * cell_w,
            row as f32 * cell_h,
            cell_w,
            cell_h,
        ))
    }
}

/// Frames, timing, and looping of one clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    pub name: &'static str,
    /// Grid cells in playback order
    pub frames: &'static [u16],
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    pub looping: bool,
}

impl ClipSpec {
    const fn sit(name: &'static str, frames: &'static [u16]) -> Self {
        Self {
            name,
            frames,
            frame_duration: 0.1,
            looping: false,
        }
    }

    const fn idle(name: &'static str, frames: &'static [u16]) -> Self {
        Self {
            name,
            frames,
            frame_duration: 1.5,
            looping: true,
        }
    }

    const fn walk(name: &'static str, frames: &'static [u16]) -> Self {
        Self {
            name,
            frames,
            frame_duration: 0.25,
            looping: true,
        }
    }

    const fn run(name: &'static str, frames: &'static [u16]) -> Self {
        Self {
            name,
            frames,
            frame_duration: 0.1,
            looping: true,
        }
    }
}

/// Clip table, indexed by `ClipId`
///
/// Row blocks on the sheet: south (448..), west (320..), north (192..),
/// east (64..). Idle reuses a few sit cells for the breathing cycle.
static CLIPS: [ClipSpec; 16] = [
    ClipSpec::idle("idle_north", &[230, 231, 196, 231, 230, 229, 228, 229]),
    ClipSpec::idle("idle_south", &[486, 487, 452, 487, 486, 485, 484, 485]),
    ClipSpec::idle("idle_east", &[102, 103, 68, 103, 102, 101, 100, 101]),
    ClipSpec::idle("idle_west", &[358, 359, 324, 359, 358, 357, 356, 357]),
    ClipSpec::walk("walk_north", &[236, 237, 238, 239]),
    ClipSpec::walk("walk_south", &[492, 493, 494, 495]),
    ClipSpec::walk("walk_east", &[108, 109, 110, 111]),
    ClipSpec::walk("walk_west", &[364, 365, 366, 367]),
    ClipSpec::run("run_north", &[240, 241, 242, 243, 208]),
    ClipSpec::run("run_south", &[496, 497, 498, 499, 464]),
    ClipSpec::run("run_east", &[112, 113, 114, 115, 80]),
    ClipSpec::run("run_west", &[368, 369, 370, 371, 336]),
    ClipSpec::sit("sit_north", &[224, 225, 226, 227, 192, 193, 194]),
    ClipSpec::sit("sit_south", &[480, 481, 482, 483, 448, 449, 450]),
    ClipSpec::sit("sit_east", &[96, 97, 98, 99, 64, 65, 66]),
    ClipSpec::sit("sit_west", &[352, 353, 354, 355, 320, 321, 322]),
];

/// Opaque handle to one of the sixteen clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(u8);

impl ClipId {
    /// Clip for a (state, direction) pair; every pair has one
    pub fn for_pose(state: BehaviorState, direction: Direction) -> Self {
        let state_row = match state {
            BehaviorState::Idle => 0,
            BehaviorState::Walk => 1,
            BehaviorState::Run => 2,
            BehaviorState::Sit => 3,
        };
        let facing = match direction {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        };
        Self(state_row * 4 + facing)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn spec(&self) -> &'static ClipSpec {
        &CLIPS[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

/// Pick a new clip, but only on a pose change
///
/// Returns `None` when nothing changed so the clip already on screen keeps
/// playing instead of restarting every frame.
pub fn select_clip(state: BehaviorState, direction: Direction, changed: bool) -> Option<ClipId> {
    changed.then(|| ClipId::for_pose(state, direction))
}

/// Reaction to a non-looping clip running out: a sitting cat settles into idle
pub fn on_clip_complete(actor: &mut Actor) {
    if actor.state == BehaviorState::Sit {
        log::debug!("Sit finished, facing {}: now idle", actor.direction.as_str());
        actor.state = BehaviorState::Idle;
    }
}

/// Completion signal from `ClipPlayer::advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFinished {
    pub clip: ClipId,
}

/// Plays one clip at a time
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlayer {
    clip: ClipId,
    frame: usize,
    /// Time spent on the current frame
    elapsed: f32,
    finished: bool,
}

impl ClipPlayer {
    pub fn new(clip: ClipId) -> Self {
        Self {
            clip,
            frame: 0,
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Start `clip` from its first frame
    pub fn play(&mut self, clip: ClipId) {
        *self = Self::new(clip);
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Sheet cell of the frame on screen
    pub fn current_cell(&self) -> u16 {
        self.clip.spec().frames[self.frame]
    }

    /// A non-looping clip that reached its last frame
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move playback forward by `dt` seconds
    ///
    /// A non-looping clip reports completion once, on the step that lands on
    /// its last frame, and holds that frame afterwards. Looping clips never
    /// report completion.
    pub fn advance(&mut self, dt: f32) -> Option<ClipFinished> {
        if self.finished {
            return None;
        }

        let spec = self.clip.spec();
        let last = spec.frames.len() - 1;
        self.elapsed += dt;

        while self.elapsed >= spec.frame_duration {
            self.elapsed -= spec.frame_duration;
            self.frame = if self.frame < last { self.frame + 1 } else { 0 };

            if !spec.looping && self.frame == last {
                self.finished = true;
                self.elapsed = 0.0;
                return Some(ClipFinished { clip: self.clip });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_every_pose_has_distinct_clip() {
        let mut seen = std::collections::HashSet::new();
        for state in BehaviorState::ALL {
            for direction in Direction::ALL {
                let clip = ClipId::for_pose(state, direction);
                assert!(seen.insert(clip), "duplicate clip for {:?}/{:?}", state, direction);
                let expected = format!("{}_{}", state.as_str(), direction.as_str());
                assert_eq!(clip.name(), expected);
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_clip_table_shape() {
        for clip in &CLIPS {
            assert!(!clip.frames.is_empty());
            assert!(clip.frames.iter().all(|&cell| CAT_SHEET.cell(cell).is_some()));
        }
        let sit = ClipId::for_pose(BehaviorState::Sit, Direction::South).spec();
        assert_eq!(sit.frames.len(), 7);
        assert!(!sit.looping);
        assert_eq!(sit.frame_duration, 0.1);

        let idle = ClipId::for_pose(BehaviorState::Idle, Direction::East).spec();
        assert_eq!(idle.frames.len(), 8);
        assert!(idle.looping);

        let walk = ClipId::for_pose(BehaviorState::Walk, Direction::West).spec();
        assert_eq!(walk.frames.len(), 4);
        assert_eq!(walk.frame_duration, 0.25);

        let run = ClipId::for_pose(BehaviorState::Run, Direction::North).spec();
        assert_eq!(run.frames.len(), 5);
        assert_eq!(run.frame_duration, 0.1);
    }

    #[test]
    fn test_sprite_grid_cells() {
        assert_eq!(CAT_SHEET.cell_count(), 544);
        assert_eq!(CAT_SHEET.cell(0), Some((0, 0)));
        assert_eq!(CAT_SHEET.cell(33), Some((1, 1)));
        assert_eq!(CAT_SHEET.cell(480), Some((0, 15)));
        assert_eq!(CAT_SHEET.cell(544), None);

        // 32 * 32 px cells
        let rect = CAT_SHEET.source_rect(33, 1024.0, 544.0).unwrap();
        assert_eq!(rect, Rect::new(32.0, 32.0, 32.0, 32.0));
    }

    #[test]
    fn test_select_clip_only_on_change() {
        assert_eq!(select_clip(BehaviorState::Walk, Direction::East, false), None);
        assert_eq!(
            select_clip(BehaviorState::Walk, Direction::East, true),
            Some(ClipId::for_pose(BehaviorState::Walk, Direction::East))
        );
    }

    #[test]
    fn test_on_clip_complete() {
        let mut actor = Actor::new(Vec2::ZERO, Vec2::splat(96.0));
        actor.state = BehaviorState::Sit;
        actor.direction = Direction::West;
        on_clip_complete(&mut actor);
        assert_eq!(actor.state, BehaviorState::Idle);
        assert_eq!(actor.direction, Direction::West);

        for state in [BehaviorState::Idle, BehaviorState::Walk, BehaviorState::Run] {
            actor.state = state;
            on_clip_complete(&mut actor);
            assert_eq!(actor.state, state);
        }
    }

    #[test]
    fn test_sit_clip_finishes_once() {
        let clip = ClipId::for_pose(BehaviorState::Sit, Direction::North);
        let mut player = ClipPlayer::new(clip);
        let step = clip.spec().frame_duration;

        // Six steps move through frames 1..=6; the sixth lands on the last frame
        for _ in 0..5 {
            assert_eq!(player.advance(step), None);
        }
        assert_eq!(player.advance(step), Some(ClipFinished { clip }));
        assert!(player.is_finished());
        assert_eq!(player.frame_index(), 6);
        assert_eq!(player.current_cell(), 194);

        // Holds the last frame and stays quiet
        assert_eq!(player.advance(10.0), None);
        assert_eq!(player.frame_index(), 6);
    }

    #[test]
    fn test_looping_clip_wraps() {
        let clip = ClipId::for_pose(BehaviorState::Walk, Direction::South);
        let mut player = ClipPlayer::new(clip);

        // Four frames at 0.25s, one full second brings us back to frame 0
        for _ in 0..4 {
            assert_eq!(player.advance(0.25), None);
        }
        assert_eq!(player.frame_index(), 0);
        assert!(!player.is_finished());

        // A big step loops several times without ever finishing
        assert_eq!(player.advance(2.75), None);
        assert_eq!(player.frame_index(), 3);
    }

    #[test]
    fn test_play_restarts() {
        let mut player = ClipPlayer::new(ClipId::for_pose(BehaviorState::Run, Direction::East));
        player.advance(0.25);
        assert_ne!(player.frame_index(), 0);

        let idle = ClipId::for_pose(BehaviorState::Idle, Direction::East);
        player.play(idle);
        assert_eq!(player.clip(), idle);
        assert_eq!(player.frame_index(), 0);
        assert_eq!(player.current_cell(), 102);
    }
}
