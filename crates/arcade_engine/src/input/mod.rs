//! Input state tracking and per-frame snapshots
//!
//! The platform layer feeds key transition events into the [`InputManager`];
//! the simulation only ever sees an [`InputSnapshot`] taken against a set of
//! [`KeyBindings`]. Movement flags report held state, the fire flag reports
//! the key-down edge so one press produces exactly one spawn attempt.

use std::collections::HashSet;

/// Key codes
///
/// Only the keys the exercises bind: movement clusters, fire, quit, and the
/// number row that selects the pacing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Number row 0
    Key0,
    /// Number row 1
    Key1,
    /// Number row 2
    Key2,
    /// Number row 3
    Key3,
    /// Number row 4
    Key4,
}

/// Key bindings for one controllable entity
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Move up
    pub up: KeyCode,

    /// Move down
    pub down: KeyCode,

    /// Move left
    pub left: KeyCode,

    /// Move right
    pub right: KeyCode,

    /// Fire, if the entity can shoot
    pub fire: Option<KeyCode>,
}

impl KeyBindings {
    /// WASD movement with space to fire
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            fire: Some(KeyCode::Space),
        }
    }

    /// Arrow-key movement, no fire key
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            fire: None,
        }
    }
}

/// Per-frame boolean input state consumed by the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Up movement key held
    pub up: bool,

    /// Down movement key held
    pub down: bool,

    /// Left movement key held
    pub left: bool,

    /// Right movement key held
    pub right: bool,

    /// Fire key pressed this frame (edge, not held state)
    pub fire: bool,
}

/// Tracks held keys and per-frame key-down edges
#[derive(Debug, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-frame edge set; call at the top of each frame before
    /// polling events
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Apply a key transition event
    ///
    /// A key-down only counts as an edge when the key was not already held,
    /// so OS key repeat does not produce extra edges.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.just_pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Whether a key is currently held
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether a key went down this frame
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Take a snapshot of the given bindings for this frame
    pub fn snapshot(&self, bindings: &KeyBindings) -> InputSnapshot {
        InputSnapshot {
            up: self.is_pressed(bindings.up),
            down: self.is_pressed(bindings.down),
            left: self.is_pressed(bindings.left),
            right: self.is_pressed(bindings.right),
            fire: bindings.fire.is_some_and(|key| self.just_pressed(key)),
        }
    }
}
