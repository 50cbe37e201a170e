//! Keyboard to command mapping

use serde::{Deserialize, Serialize};

use crate::sim::{Event, MoveIntent};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    KeyR,
    /// Anything else (ignored)
    Other,
}

impl Key {
    /// Parse a DOM-style key code ("ArrowLeft", "Space", ...)
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Space" => Key::Space,
            "KeyR" => Key::KeyR,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A raw key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    /// Generated by key auto-repeat
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
            repeat: false,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Up,
            repeat: false,
        }
    }
}

/// Map a key event to a game command (auto-repeat is dropped)
pub fn map_key(event: KeyEvent) -> Option<Event> {
    if event.repeat {
        return None;
    }
    match (event.key, event.phase) {
        (Key::ArrowLeft, KeyPhase::Down) => Some(Event::Move(MoveIntent::StartLeft)),
        (Key::ArrowLeft, KeyPhase::Up) => Some(Event::Move(MoveIntent::StopLeft)),
        (Key::ArrowRight, KeyPhase::Down) => Some(Event::Move(MoveIntent::StartRight)),
        (Key::ArrowRight, KeyPhase::Up) => Some(Event::Move(MoveIntent::StopRight)),
        (Key::Space, KeyPhase::Down) => Some(Event::Shoot),
        (Key::KeyR, KeyPhase::Down) => Some(Event::Restart),
        _ => None,
    }
}
