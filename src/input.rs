//! Logical input actions
//!
//! The simulation only asks "is this action held right now". Device polling
//! belongs to the frame driver, which exposes it through `ActionSource`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Something the player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveWest,
    MoveEast,
    MoveNorth,
    MoveSouth,
    Run,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveWest,
        Action::MoveEast,
        Action::MoveNorth,
        Action::MoveSouth,
        Action::Run,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveWest => "move_west",
            Action::MoveEast => "move_east",
            Action::MoveNorth => "move_north",
            Action::MoveSouth => "move_south",
            Action::Run => "run",
        }
    }
}

/// Anything that can answer whether an action is held
pub trait ActionSource {
    fn is_held(&self, action: Action) -> bool;
}

impl<F: Fn(Action) -> bool> ActionSource for F {
    fn is_held(&self, action: Action) -> bool {
        self(action)
    }
}

/// Key name bound to each action
///
/// Key names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_west: String,
    pub move_east: String,
    pub move_north: String,
    pub move_south: String,
    pub run: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_west: "A".to_string(),
            move_east: "D".to_string(),
            move_north: "W".to_string(),
            move_south: "S".to_string(),
            run: "LShift".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn key_for(&self, action: Action) -> &str {
        match action {
            Action::MoveWest => &self.move_west,
            Action::MoveEast => &self.move_east,
            Action::MoveNorth => &self.move_north,
            Action::MoveSouth => &self.move_south,
            Action::Run => &self.run,
        }
    }

    /// Key names used by more than one action
    pub fn conflicts(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for action in Action::ALL {
            let key = self.key_for(action).to_ascii_uppercase();
            if !seen.insert(key.clone()) && !dupes.contains(&key) {
                dupes.push(key);
            }
        }
        dupes
    }
}

/// Keys currently down, resolved through a set of bindings
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    bindings: KeyBindings,
    down: HashSet<String>,
}

impl HeldKeys {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            down: HashSet::new(),
        }
    }

    pub fn press(&mut self, key: &str) {
        self.down.insert(key.to_ascii_uppercase());
    }

    pub fn release(&mut self, key: &str) {
        self.down.remove(&key.to_ascii_uppercase());
    }

    /// Release everything (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.down.contains(&key.to_ascii_uppercase())
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl ActionSource for HeldKeys {
    fn is_held(&self, action: Action) -> bool {
        self.is_key_down(self.bindings.key_for(action))
    }
}
