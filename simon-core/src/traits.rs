//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Alle Aufrufe blockieren, bis sie fertig sind.

use crate::types::{ButtonPress, Colour};

/// Fehler-Typ für Hardware-Operationen
///
/// Die Engine reicht diese Fehler nur weiter (`?`), sie versucht keine
/// Wiederherstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    IndicatorFailed,
    ToneFailed,
    InputFailed,
}

/// Trait für die Spiel-Hardware (LEDs, Tasten, Lautsprecher)
///
/// # Implementierungen
/// - **Production:** BoardHardware (ESP32-C6 GPIOs)
/// - **Testing:** MockHardware (zeichnet Aufrufe auf, liefert Tastendrücke aus Skript)
pub trait SimonHardware {
    /// Schaltet die LED einer Farbe sofort ein oder aus
    fn set_indicator(&mut self, colour: Colour, on: bool) -> Result<(), HardwareError>;

    /// Spielt einen Ton für `duration_ms`, danach gleich lange Stille
    fn emit_tone(&mut self, pitch_hz: u32, duration_ms: u32) -> Result<(), HardwareError>;

    /// Blockiert bis eine Farbtaste oder die Reset-Taste gedrückt wird
    fn await_button(&mut self) -> Result<ButtonPress, HardwareError>;

    /// Blockiert bis die Reset-Taste gedrückt wird, Farbtasten werden ignoriert
    fn await_reset_confirm(&mut self) -> Result<(), HardwareError>;

    /// Blockierende Pause, Ausgänge bleiben unverändert
    fn pause(&mut self, duration_ms: u32) -> Result<(), HardwareError>;

    /// LED an, Ton der Farbe, LED aus
    fn emit(&mut self, colour: Colour, duration_ms: u32) -> Result<(), HardwareError> {
        self.set_indicator(colour, true)?;
        self.emit_tone(colour.pitch_hz(), duration_ms)?;
        self.set_indicator(colour, false)
    }

    /// Alle LEDs in Layout-Reihenfolge schalten
    fn set_all_indicators(&mut self, on: bool) -> Result<(), HardwareError> {
        for colour in Colour::ALL {
            self.set_indicator(colour, on)?;
        }
        Ok(())
    }
}

/// Quelle für neue Sequenz-Farben
///
/// Production nutzt den Hardware-RNG, Tests ein festes Skript.
pub trait ColourSource {
    fn next_colour(&mut self) -> Colour;
}

#[cfg(feature = "defmt")]
impl defmt::Format for HardwareError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HardwareError::IndicatorFailed => defmt::write!(fmt, "IndicatorFailed"),
            HardwareError::ToneFailed => defmt::write!(fmt, "ToneFailed"),
            HardwareError::InputFailed => defmt::write!(fmt, "InputFailed"),
        }
    }
}
