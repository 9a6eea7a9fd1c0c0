//! Core Types für das Simon-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::config::{NOTE_BLUE, NOTE_GREEN, NOTE_RED, NOTE_YELLOW};

/// Spielfarbe
///
/// Die Reihenfolge der Varianten entspricht dem physischen LED-Layout
/// und bestimmt die Reihenfolge von Start-Fanfare und Fehler-Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Green,
    Red,
    Blue,
    Yellow,
}

impl Colour {
    /// Anzahl der Farben
    pub const COUNT: usize = 4;

    /// Alle Farben in Layout-Reihenfolge
    pub const ALL: [Colour; Colour::COUNT] =
        [Colour::Green, Colour::Red, Colour::Blue, Colour::Yellow];

    /// Position im LED-Layout (0..4)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Farbe an Layout-Position `index`, `None` außerhalb von 0..4
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Feste Tonhöhe der Farbe in Hz
    pub const fn pitch_hz(self) -> u32 {
        match self {
            Colour::Green => NOTE_GREEN,
            Colour::Red => NOTE_RED,
            Colour::Blue => NOTE_BLUE,
            Colour::Yellow => NOTE_YELLOW,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Colour::Green => "green",
            Colour::Red => "red",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
        }
    }
}

/// Ergebnis eines Tastendrucks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    /// Eine der vier Farbtasten
    Colour(Colour),
    /// Reset-Taste (Abbruch während der Eingabe)
    Reset,
}

/// Zustände der Runden-Engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Start-Fanfare nach dem Einschalten
    Fanfare,
    /// Wartet auf Reset-Taste
    Idle,
    /// Sequenz um eine Farbe verlängern
    Growing,
    /// Sequenz vorspielen
    Playback,
    /// Spieler-Eingabe prüfen
    Validating,
    /// Fehler-Fanfare und Wiederholung
    Failing,
}

impl GameState {
    pub const fn name(self) -> &'static str {
        match self {
            GameState::Fanfare => "Fanfare",
            GameState::Idle => "Idle",
            GameState::Growing => "Growing",
            GameState::Playback => "Playback",
            GameState::Validating => "Validating",
            GameState::Failing => "Failing",
        }
    }
}

/// Ergebnis einer Eingabe-Prüfung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Alle Eingaben stimmen mit der Sequenz überein
    Match,
    /// Erste abweichende Eingabe an `position`
    Mismatch {
        position: usize,
        expected: Colour,
        pressed: Colour,
    },
    /// Reset-Taste an `position` gedrückt (kein Mismatch!)
    ResetAbort { position: usize },
}

/// Wie eine Runde geendet hat
///
/// Jede Runde endet mit genau einem dieser Ergebnisse. Es gibt keinen
/// Gewinn-Zustand, die Sequenz wächst bis zum ersten Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Falsche Farbe gedrückt
    Mismatch {
        length: usize,
        position: usize,
        expected: Colour,
        pressed: Colour,
        final_pacing_ms: u32,
    },
    /// Reset während der Eingabe: neue Runde startet sofort
    ResetAbort {
        length: usize,
        position: usize,
        final_pacing_ms: u32,
    },
    /// Sequenz hat `MAX_SEQUENCE_LEN` erreicht
    SequenceFull { final_pacing_ms: u32 },
}

impl RoundOutcome {
    /// Sequenz-Länge beim Ende der Runde
    pub const fn length(&self) -> usize {
        match self {
            RoundOutcome::Mismatch { length, .. } | RoundOutcome::ResetAbort { length, .. } => {
                *length
            }
            RoundOutcome::SequenceFull { .. } => crate::config::MAX_SEQUENCE_LEN,
        }
    }

    pub const fn final_pacing_ms(&self) -> u32 {
        match self {
            RoundOutcome::Mismatch {
                final_pacing_ms, ..
            }
            | RoundOutcome::ResetAbort {
                final_pacing_ms, ..
            }
            | RoundOutcome::SequenceFull { final_pacing_ms } => *final_pacing_ms,
        }
    }

    /// Der Reset-Druck beim Abbruch gilt schon als Bestätigung,
    /// die nächste Runde startet ohne erneutes Warten.
    pub const fn restarts_immediately(&self) -> bool {
        matches!(self, RoundOutcome::ResetAbort { .. })
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Colour {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonPress {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ButtonPress::Colour(colour) => defmt::write!(fmt, "Colour({})", colour),
            ButtonPress::Reset => defmt::write!(fmt, "Reset"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GameState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Validation {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Validation::Match => defmt::write!(fmt, "Match"),
            Validation::Mismatch {
                position,
                expected,
                pressed,
            } => defmt::write!(
                fmt,
                "Mismatch {{ position: {}, expected: {}, pressed: {} }}",
                position,
                expected,
                pressed
            ),
            Validation::ResetAbort { position } => {
                defmt::write!(fmt, "ResetAbort {{ position: {} }}", position)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RoundOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RoundOutcome::Mismatch {
                length,
                position,
                expected,
                pressed,
                final_pacing_ms,
            } => defmt::write!(
                fmt,
                "Mismatch {{ length: {}, position: {}, expected: {}, pressed: {}, pacing: {} ms }}",
                length,
                position,
                expected,
                pressed,
                final_pacing_ms
            ),
            RoundOutcome::ResetAbort {
                length,
                position,
                final_pacing_ms,
            } => defmt::write!(
                fmt,
                "ResetAbort {{ length: {}, position: {}, pacing: {} ms }}",
                length,
                position,
                final_pacing_ms
            ),
            RoundOutcome::SequenceFull { final_pacing_ms } => {
                defmt::write!(fmt, "SequenceFull {{ pacing: {} ms }}", final_pacing_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_layout_order() {
        assert_eq!(
            Colour::ALL,
            [Colour::Green, Colour::Red, Colour::Blue, Colour::Yellow]
        );
    }

    #[test]
    fn test_colour_index_roundtrip() {
        for (i, colour) in Colour::ALL.iter().enumerate() {
            assert_eq!(colour.index(), i);
            assert_eq!(Colour::from_index(i), Some(*colour));
        }
        assert_eq!(Colour::from_index(4), None);
    }

    #[test]
    fn test_colour_pitches_are_distinct() {
        assert_eq!(Colour::Green.pitch_hz(), 165);
        assert_eq!(Colour::Red.pitch_hz(), 440);
        assert_eq!(Colour::Blue.pitch_hz(), 330);
        assert_eq!(Colour::Yellow.pitch_hz(), 277);
    }

    #[test]
    fn test_only_reset_abort_restarts_immediately() {
        let abort = RoundOutcome::ResetAbort {
            length: 3,
            position: 1,
            final_pacing_ms: 500,
        };
        let mismatch = RoundOutcome::Mismatch {
            length: 3,
            position: 1,
            expected: Colour::Red,
            pressed: Colour::Blue,
            final_pacing_ms: 500,
        };
        assert!(abort.restarts_immediately());
        assert!(!mismatch.restarts_immediately());
        assert!(!RoundOutcome::SequenceFull { final_pacing_ms: 1 }.restarts_immediately());
    }
}
