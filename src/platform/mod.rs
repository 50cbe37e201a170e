//! Platform abstraction layer
//!
//! Produces the event stream the simulation folds:
//! - Key events mapped to commands
//! - Fixed-step clock ticks
//! - Merging both into one ordered timeline

pub mod clock;
pub mod input;

pub use clock::{Clock, merge};
pub use input::{Key, KeyEvent, KeyPhase, map_key};
