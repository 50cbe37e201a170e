//! Invaders - a deterministic Space Invaders simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state, reducer)
//! - `view`: Pure projection of a game state into draw calls and HUD text
//! - `platform`: Key mapping, fixed-step clock and event merging
//! - `demo`: Seeded autopilot that plays the game headlessly
//! - `session`: Drives the reducer and keeps the finished-game history

pub mod demo;
pub mod history;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use history::History;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Square playfield edge length
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Leftmost x the ship (and the alien sweep) may reach
    pub const MIN_X: f32 = 25.0;
    /// Rightmost x the ship (and the alien sweep) may reach
    pub const MAX_X: f32 = CANVAS_SIZE - MIN_X;
    /// Nominal clock period in milliseconds (one logical tick)
    pub const TICK_MILLIS: u64 = 10;

    /// Ship defaults
    pub const SHIP_START_X: f32 = 300.0;
    pub const SHIP_Y: f32 = 550.0;
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Base horizontal speed before the level bonus
    pub const SHIP_VELOCITY: f32 = 5.0;

    /// Bullets and alien projectiles expire after this many ticks
    pub const BULLET_LIFETIME_TICKS: u64 = 100;
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Bullets travel up the screen
    pub const BULLET_VELOCITY: f32 = -10.0;
    pub const PROJECTILE_RADIUS: f32 = 3.0;
    /// Alien projectiles travel down the screen
    pub const PROJECTILE_VELOCITY: f32 = 5.0;

    /// Shield row
    pub const SHIELD_COUNT: usize = 5;
    pub const SHIELD_START_RADIUS: f32 = 30.0;
    pub const SHIELD_Y: f32 = 480.0;
    pub const SHIELD_SPACING: f32 = 100.0;
    /// Radius factor applied per hit
    pub const SHIELD_REDUCTION: f32 = 0.75;
    /// Hits a shield absorbs before it is destroyed
    pub const SHIELD_TOLERANCE: i32 = 4;

    /// Alien grid (7 columns x 4 rows)
    pub const ALIEN_COLUMNS: usize = 7;
    pub const ALIEN_ROWS: usize = 4;
    pub const ALIEN_COUNT: usize = ALIEN_COLUMNS * ALIEN_ROWS;
    pub const ALIEN_RADIUS: f32 = 10.0;
    pub const ALIEN_SPACING: f32 = 40.0;
    pub const ALIEN_GRID_LEFT: f32 = 160.0;
    pub const ALIEN_GRID_TOP: f32 = 60.0;
    pub const ALIEN_VELOCITY: f32 = 0.8;
    /// Vertical drop each time the formation reverses
    pub const ALIEN_ROW_STEP: f32 = 20.0;
    /// Per-alien, per-tick chance of firing
    pub const ALIEN_FIRE_RATE: f64 = 0.001;
}

/// Smallest radius a shield may shrink to before it is destroyed
#[inline]
pub fn shield_floor() -> f32 {
    use consts::*;
    SHIELD_START_RADIUS * SHIELD_REDUCTION.powi(SHIELD_TOLERANCE)
}

/// Ship speed for a level: faster ships on later waves
#[inline]
pub fn ship_speed(level: u32) -> f32 {
    consts::SHIP_VELOCITY + (level as f32 * 5.0).sqrt()
}

/// Alien formation speed factor for the remaining alien count and level
#[inline]
pub fn speed_multiplier(remaining_aliens: usize, level: u32) -> f32 {
    let destroyed = consts::ALIEN_COUNT.saturating_sub(remaining_aliens) as f32;
    destroyed.sqrt() / 4.0 + (level as f32).sqrt()
}
