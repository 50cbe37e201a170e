//! Moving, colliding bodies
//!
//! Every simulated object is a circle with an id, a velocity and the tick it
//! was created on. The ship wraps a body with its held-direction flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Bullet,
    Alien,
    Projectile,
    Shield,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Ship => "ship",
            EntityKind::Bullet => "bullet",
            EntityKind::Alien => "alien",
            EntityKind::Projectile => "projectile",
            EntityKind::Shield => "shield",
        }
    }
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Tick the entity was spawned on (drives expiry)
    pub created_at: u64,
}

impl Entity {
    pub fn new(id: u64, kind: EntityKind, pos: Vec2, radius: f32, created_at: u64) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            created_at,
        }
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn bullet(id: u64, pos: Vec2, created_at: u64) -> Self {
        Self::new(id, EntityKind::Bullet, pos, BULLET_RADIUS, created_at)
            .with_vel(Vec2::new(0.0, BULLET_VELOCITY))
    }

    pub fn projectile(id: u64, pos: Vec2, created_at: u64) -> Self {
        Self::new(id, EntityKind::Projectile, pos, PROJECTILE_RADIUS, created_at)
            .with_vel(Vec2::new(0.0, PROJECTILE_VELOCITY))
    }

    pub fn alien(id: u64, pos: Vec2, created_at: u64) -> Self {
        Self::new(id, EntityKind::Alien, pos, ALIEN_RADIUS, created_at)
            .with_vel(Vec2::new(ALIEN_VELOCITY, 0.0))
    }

    pub fn shield(id: u64, pos: Vec2, radius: f32, created_at: u64) -> Self {
        Self::new(id, EntityKind::Shield, pos, radius, created_at)
    }

    /// True when the two circles strictly overlap
    #[inline]
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Age in ticks at `now` (zero if `now` precedes creation)
    #[inline]
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }

    /// Same entity (category and id)
    #[inline]
    pub fn same(&self, other: &Entity) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: Entity,
    /// Left key held
    pub moving_left: bool,
    /// Right key held
    pub moving_right: bool,
}

impl Ship {
    pub fn new(id: u64) -> Self {
        Self {
            body: Entity::new(
                id,
                EntityKind::Ship,
                Vec2::new(SHIP_START_X, SHIP_Y),
                SHIP_RADIUS,
                0,
            ),
            moving_left: false,
            moving_right: false,
        }
    }

    /// Horizontal velocity implied by the held keys.
    ///
    /// Holding both (or neither) stands still; otherwise the single held
    /// direction wins, so releasing one of two held keys resumes motion
    /// toward the other.
    pub fn steering_velocity(&self, speed: f32) -> f32 {
        match (self.moving_left, self.moving_right) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0.0,
        }
    }
}
