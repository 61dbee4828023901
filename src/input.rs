//! Pressed-key state and per-rider key bindings
//!
//! The host writes key-down/key-up events into `InputState` as they arrive;
//! the simulation only reads it, once, at the start of each step. Keys are
//! logical names in the browser `KeyboardEvent.key` style, compared
//! case-insensitively.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One rider's resolved direction flags for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Logical key names for a rider's four directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    /// Default bindings for rider slot 0
    pub fn wasd() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            up: "w".to_string(),
            down: "s".to_string(),
        }
    }

    /// Default bindings for rider slot 1
    pub fn arrows() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
        }
    }

    /// Resolve the currently pressed keys into direction flags
    pub fn resolve(&self, input: &InputState) -> DirectionFlags {
        DirectionFlags {
            left: input.is_pressed(&self.left),
            right: input.is_pressed(&self.right),
            up: input.is_pressed(&self.up),
            down: input.is_pressed(&self.down),
        }
    }
}

/// The process-wide pressed-key set. Written by input-event collaborators,
/// read (never mutated) by the simulation step.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase());
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.remove(&key.to_lowercase());
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&key.to_lowercase())
    }

    /// Release everything (host focus loss, match restart)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
