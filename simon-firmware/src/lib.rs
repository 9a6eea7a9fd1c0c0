// Library-Root: Board-spezifische Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von simon-core
pub use simon_core::{
    ButtonPress, Colour, ColourSource, HardwareError, RoundEngine, RoundOutcome, SimonHardware,
};

/// Engine-Typ mit echter Board-Hardware und Hardware-RNG
pub type BoardEngine<'d> = RoundEngine<hal::BoardHardware<'d>, hal::HardwareColourSource>;

// ============================================================================
// Testing
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf.
// Die komplette Spiellogik liegt in simon-core und wird dort bzw. in
// simon-tests auf dem Host gegen MockHardware getestet.
