//! Simon Core - Platform-agnostic Spiellogik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Hardware-Traits, Pure Functions und die Runden-Engine.

#![no_std]

// Log-Makros zuerst, damit alle Module sie nutzen können
#[macro_use]
mod fmt;

pub mod config;
pub mod engine;
pub mod logic;
pub mod round;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use engine::{RoundEngine, play_sequence, validate_input};
pub use logic::{colour_from_random, decay_pacing, scan_controls};
pub use round::{Round, Sequence, SequenceFull};
pub use traits::{ColourSource, HardwareError, SimonHardware};
pub use types::{ButtonPress, Colour, GameState, RoundOutcome, Validation};
