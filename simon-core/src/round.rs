//! Sequenz und Runden-Zustand
//!
//! Die Sequenz liegt in einem `heapless::Vec` mit fester Kapazität,
//! es wird kein Heap benötigt.

use heapless::Vec;

use crate::config::{INITIAL_PACING_MS, MAX_SEQUENCE_LEN, PACING_DECAY_INTERVAL};
use crate::logic::decay_pacing;
use crate::types::Colour;

/// Sequenz hat ihre Kapazität erreicht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFull;

/// Geordnete Farbfolge, innerhalb einer Runde nur anhängbar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    colours: Vec<Colour, MAX_SEQUENCE_LEN>,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { colours: Vec::new() }
    }

    /// Hängt eine Farbe an
    ///
    /// # Fehlerbehandlung
    /// Gibt `SequenceFull` zurück wenn `MAX_SEQUENCE_LEN` erreicht ist
    pub fn push(&mut self, colour: Colour) -> Result<(), SequenceFull> {
        self.colours.push(colour).map_err(|_| SequenceFull)
    }

    pub fn clear(&mut self) {
        self.colours.clear();
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.colours.is_full()
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }
}

/// Zustand einer laufenden Runde: Sequenz + Tempo
///
/// Nach dem Ende einer Runde bleiben die Werte lesbar,
/// bis die nächste Runde sie mit `reset()` verwirft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    sequence: Sequence,
    pacing_ms: u32,
}

impl Round {
    pub const fn new() -> Self {
        Self {
            sequence: Sequence::new(),
            pacing_ms: INITIAL_PACING_MS,
        }
    }

    /// Leere Sequenz, Start-Tempo
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.pacing_ms = INITIAL_PACING_MS;
    }

    /// Verlängert die Sequenz um eine Farbe
    ///
    /// Ist die neue Länge ein Vielfaches von `PACING_DECAY_INTERVAL`,
    /// wird das Tempo verkürzt. Bei voller Sequenz bleibt alles unverändert.
    pub fn grow(&mut self, colour: Colour) -> Result<(), SequenceFull> {
        self.sequence.push(colour)?;
        if self.sequence.len() % PACING_DECAY_INTERVAL == 0 {
            self.pacing_ms = decay_pacing(self.pacing_ms);
        }
        Ok(())
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn pacing_ms(&self) -> u32 {
        self.pacing_ms
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
