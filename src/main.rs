//! Catwalk entry point
//!
//! Headless driver: no window or sprite sheet, just the simulation fed by a
//! scripted key timeline through the fixed-timestep loop a real frame driver
//! would use. Pass a settings file as the first argument or via
//! `CATWALK_SETTINGS`.

use std::path::PathBuf;

use catwalk::consts::*;
use catwalk::sim::{BehaviorState, Direction, GameSession, TickInput, TickOutput, tick};
use catwalk::{Action, HeldKeys, Settings};

/// Actions held for a stretch of time
struct Step {
    seconds: f32,
    actions: &'static [Action],
}

const fn step(seconds: f32, actions: &'static [Action]) -> Step {
    Step { seconds, actions }
}

/// A walk around the room: through the doorway, into a wall, and a rest
const SCRIPT: &[Step] = &[
    step(1.5, &[]),
    step(1.0, &[Action::MoveWest]),
    step(2.5, &[Action::MoveWest, Action::Run]),
    step(2.0, &[]),
    step(1.0, &[Action::MoveNorth]),
    step(4.0, &[Action::MoveEast, Action::Run]),
    step(0.5, &[Action::MoveSouth, Action::MoveEast]),
    step(2.0, &[]),
];

/// Frame interval of the pretend display (30 Hz, so two ticks per frame)
const FRAME_DT: f32 = 1.0 / 30.0;

/// Drives the session the way a render loop would
struct Driver {
    session: GameSession,
    keys: HeldKeys,
    accumulator: f32,
    last_pose: Option<(BehaviorState, Direction)>,
}

impl Driver {
    fn new(session: GameSession, keys: HeldKeys) -> Self {
        Self {
            session,
            keys,
            accumulator: 0.0,
            last_pose: None,
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput::sample(&self.keys);
            let out = tick(&mut self.session, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.report(&out);
        }
    }

    /// Log pose transitions, standing in for drawing
    fn report(&mut self, out: &TickOutput) {
        let pose = (out.state, out.direction);
        if self.last_pose != Some(pose) {
            let blocked = if out.blocked.is_blocked(out.direction) {
                " [blocked]"
            } else {
                ""
            };
            log::info!(
                "t={:>4} pos=({:>5.1}, {:>5.1}) {} {} clip={} cell={}{}",
                self.session.time_ticks,
                out.position.x,
                out.position.y,
                out.state.as_str(),
                out.direction.as_str(),
                out.clip.name(),
                out.frame_cell,
                blocked
            );
            self.last_pose = Some(pose);
        }
        if out.clip_finished {
            log::info!("t={:>4} {} finished", self.session.time_ticks, out.clip.name());
        }
    }

    /// Press the bound key of each action, releasing everything else
    fn hold(&mut self, actions: &[Action]) {
        self.keys.release_all();
        for &action in actions {
            let key = self.keys.bindings().key_for(action).to_string();
            self.keys.press(&key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Catwalk (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(Settings::ENV_VAR).ok())
        .map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    let session = GameSession::from_settings(&settings)?;
    let keys = HeldKeys::new(settings.bindings.clone());
    let mut driver = Driver::new(session, keys);

    for step in SCRIPT {
        let names: Vec<&str> = step.actions.iter().map(Action::as_str).collect();
        log::info!("Holding [{}] for {}s", names.join(", "), step.seconds);
        driver.hold(step.actions);
        let frames = (step.seconds / FRAME_DT).round() as u32;
        for _ in 0..frames {
            driver.update(FRAME_DT);
        }
    }

    let actor = &driver.session.actor;
    log::info!(
        "Done after {} ticks: cat at ({}, {}) {} {}",
        driver.session.time_ticks,
        actor.pos.x,
        actor.pos.y,
        actor.state.as_str(),
        actor.direction.as_str()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host page
}
