//! Pure state-to-frame projection
//!
//! The view owns no simulation data: `project` turns a `GameState` into the
//! draw calls and HUD text for that state. `Scene` is a retained element set
//! that a display layer can reconcile frame by frame.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Entity, EntityKind, GameState};

/// Stable element name for an entity ("alien12", "shield30", ...)
pub fn element_id(kind: EntityKind, id: u64) -> String {
    match kind {
        EntityKind::Ship => "ship".to_string(),
        _ => format!("{}{}", kind.as_str(), id),
    }
}

/// A circle to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub element: String,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub radius: f32,
}

impl From<&Entity> for Circle {
    fn from(entity: &Entity) -> Self {
        Self {
            element: element_id(entity.kind, entity.id),
            kind: entity.kind,
            pos: entity.pos,
            radius: entity.radius,
        }
    }
}

/// HUD strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: String,
    pub level: String,
    /// Empty unless the game is over
    pub game_over: String,
    /// Empty unless the game is over
    pub subtext: String,
}

impl Hud {
    pub fn for_state(state: &GameState) -> Self {
        let (game_over, subtext) = if state.game_over {
            ("Game Over!".to_string(), "-Press 'R' to restart-".to_string())
        } else {
            (String::new(), String::new())
        };
        Self {
            score: format!("Score: {:03}", state.score),
            level: format!("Level: {}", state.level),
            game_over,
            subtext,
        }
    }
}

/// Everything needed to display one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    /// Ship position (drawn as a triangle)
    pub ship: Vec2,
    /// Live circles: bullets, aliens, projectiles, shields
    pub circles: Vec<Circle>,
    /// Elements to delete before drawing
    pub removals: Vec<String>,
    pub hud: Hud,
}

/// Project a state into a frame
pub fn project(state: &GameState) -> Frame {
    Frame {
        tick: state.tick,
        ship: state.ship.body.pos,
        circles: state.live_entities().map(Circle::from).collect(),
        removals: state
            .removed
            .iter()
            .map(|e| element_id(e.kind, e.id))
            .collect(),
        hud: Hud::for_state(state),
    }
}

impl Frame {
    /// One-line text rendering (for logs)
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "[{}] {} | {} | ship x={:.1} | {} objects",
            self.tick,
            self.hud.score,
            self.hud.level,
            self.ship.x,
            self.circles.len()
        );
        if !self.hud.game_over.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.hud.game_over);
        }
        line
    }
}

/// Retained set of drawn elements
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: BTreeMap<String, Circle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with a frame: delete removals, then create or move circles
    pub fn apply(&mut self, frame: &Frame) {
        for element in &frame.removals {
            self.elements.remove(element);
        }
        for circle in &frame.circles {
            self.elements.insert(circle.element.clone(), circle.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.elements.contains_key(element)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Circle> {
        self.elements.values()
    }
}
