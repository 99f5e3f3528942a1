//! Keyboard state map and driver controls.
//!
//! Key-down/key-up events are folded into a held-key set; the game polls it
//! once per frame through [`KeyState::controls`].

use egui::Key;
use std::collections::HashSet;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl GameKey {
    /// Map an egui key to a game key.
    pub fn from_egui(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Self::ArrowUp),
            Key::ArrowDown => Some(Self::ArrowDown),
            Key::ArrowLeft => Some(Self::ArrowLeft),
            Key::ArrowRight => Some(Self::ArrowRight),
            Key::W => Some(Self::W),
            Key::A => Some(Self::A),
            Key::S => Some(Self::S),
            Key::D => Some(Self::D),
            _ => None,
        }
    }
}

/// Driver intent for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriverControls {
    /// Accelerator held
    pub throttle: bool,
    /// Brake held
    pub brake: bool,
    /// -1 left, 0 straight, 1 right
    pub steer: f32,
}

impl DriverControls {
    /// Throttle only, no steering.
    pub fn accelerate() -> Self {
        Self {
            throttle: true,
            ..Default::default()
        }
    }

    /// Nothing held.
    pub fn coast() -> Self {
        Self::default()
    }
}

/// Currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<GameKey>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down or key-up.
    pub fn set(&mut self, key: GameKey, down: bool) {
        if down {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Fold an egui input event into the map. Returns true if it was a game key.
    pub fn handle_event(&mut self, event: &egui::Event) -> bool {
        if let egui::Event::Key { key, pressed, .. } = event {
            if let Some(game_key) = GameKey::from_egui(*key) {
                self.set(game_key, *pressed);
                return true;
            }
        }
        false
    }

    pub fn is_down(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Poll the driver controls.
    pub fn controls(&self) -> DriverControls {
        let either = |a, b| self.is_down(a) || self.is_down(b);

        // Right wins when both directions are held
        let mut steer = 0.0;
        if either(GameKey::ArrowLeft, GameKey::A) {
            steer = -1.0;
        }
        if either(GameKey::ArrowRight, GameKey::D) {
            steer = 1.0;
        }

        DriverControls {
            throttle: either(GameKey::ArrowUp, GameKey::W),
            brake: either(GameKey::ArrowDown, GameKey::S),
            steer,
        }
    }
}
