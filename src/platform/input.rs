//! Keyboard input
//!
//! Tracks which keys are held and folds them into one [`Intent`] per frame.
//! Key names follow the DOM `KeyboardEvent.key` values.

use crate::sim::Intent;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a `KeyboardEvent.key` value; unknown keys are ignored
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

impl KeyState {
    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Restart => &mut self.restart,
        }
    }

    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    /// Handle a keydown event by key name. Returns whether the key is bound.
    pub fn key_down(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        self.press(key);
        true
    }

    /// Handle a keyup event by key name. Returns whether the key is bound.
    pub fn key_up(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        self.release(key);
        true
    }

    /// This frame's intent. Opposite keys cancel out.
    pub fn intent(&self) -> Intent {
        let dx = self.right as i8 - self.left as i8;
        let dy = self.down as i8 - self.up as i8;
        Intent {
            restart: self.restart,
            ..Intent::new(dx, dy)
        }
    }
}
