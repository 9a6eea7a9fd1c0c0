//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::config::{PACING_DECAY_DENOMINATOR, PACING_DECAY_NUMERATOR};
use crate::types::{ButtonPress, Colour};

/// Verkürzt das Tempo um den festen Faktor ×0.75 (abgerundet)
///
/// # Beispiele
///
/// ```
/// # use simon_core::decay_pacing;
/// assert_eq!(decay_pacing(500), 375);
/// assert_eq!(decay_pacing(375), 281);
/// ```
pub fn decay_pacing(pacing_ms: u32) -> u32 {
    // Ganzzahl-Division rundet ab, Ergebnis ist nie größer als die Eingabe
    (u64::from(pacing_ms) * PACING_DECAY_NUMERATOR / PACING_DECAY_DENOMINATOR) as u32
}

/// Wertet einen Abtast-Durchlauf aller Tasten aus
///
/// Die erste gedrückte Taste gewinnt: Farben in Layout-Reihenfolge,
/// danach die Reset-Taste. `None` wenn nichts gedrückt ist.
pub fn scan_controls(colour_pressed: [bool; Colour::COUNT], reset_pressed: bool) -> Option<ButtonPress> {
    Colour::ALL
        .iter()
        .zip(colour_pressed)
        .find(|(_, pressed)| *pressed)
        .map(|(colour, _)| ButtonPress::Colour(*colour))
        .or(if reset_pressed {
            Some(ButtonPress::Reset)
        } else {
            None
        })
}

/// Bildet einen Zufallswert gleichverteilt auf eine Farbe ab
///
/// 2^32 ist durch 4 teilbar, `% 4` ist daher ohne Verzerrung.
pub fn colour_from_random(value: u32) -> Colour {
    Colour::ALL[(value % Colour::COUNT as u32) as usize]
}

/// Halbe Periodendauer einer Rechteckwelle in µs (0 Hz = Stille)
pub fn tone_half_period_us(pitch_hz: u32) -> u32 {
    if pitch_hz == 0 {
        return 0;
    }
    500_000 / pitch_hz
}

/// Anzahl voller Perioden für einen Ton von `duration_ms`
pub fn tone_cycles(pitch_hz: u32, duration_ms: u32) -> u32 {
    (u64::from(pitch_hz) * u64::from(duration_ms) / 1000) as u32
}
