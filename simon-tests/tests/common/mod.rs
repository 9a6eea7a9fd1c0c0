//! Mock-Hardware und Test-Farbquelle für die Host-Tests

#![allow(dead_code)]

use std::collections::VecDeque;

use simon_core::{ButtonPress, Colour, ColourSource, HardwareError, SimonHardware};

// ============================================================================
// Mock Hardware
// ============================================================================

/// Aufgezeichneter Hardware-Aufruf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Emit(Colour, u32),
    Indicator(Colour, bool),
    Tone(u32, u32),
    Pause(u32),
    AwaitButton,
    AwaitReset,
}

/// Zeichnet alle Aufrufe auf und liefert Tastendrücke aus einem Skript
///
/// Ist das Skript leer, liefert `await_button` / `await_reset_confirm`
/// `HardwareError::InputFailed`. Damit endet `run()` in Tests.
#[derive(Default)]
pub struct MockHardware {
    pub events: Vec<Event>,
    pub presses: VecDeque<ButtonPress>,
    pub reset_confirms: usize,
    pub fail_next_tone: bool,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock mit vorbereiteten Tastendrücken
    pub fn with_presses(presses: impl IntoIterator<Item = ButtonPress>) -> Self {
        Self {
            presses: presses.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_colours(&mut self, colours: &[Colour]) {
        self.presses
            .extend(colours.iter().map(|c| ButtonPress::Colour(*c)));
    }

    pub fn buttons_requested(&self) -> usize {
        self.count(|e| matches!(e, Event::AwaitButton))
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Dauern aller `emit`-Aufrufe in Reihenfolge
    pub fn emitted(&self) -> Vec<(Colour, u32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Emit(c, d) => Some((*c, *d)),
                _ => None,
            })
            .collect()
    }
}

impl SimonHardware for MockHardware {
    fn set_indicator(&mut self, colour: Colour, on: bool) -> Result<(), HardwareError> {
        self.events.push(Event::Indicator(colour, on));
        Ok(())
    }

    fn emit_tone(&mut self, pitch_hz: u32, duration_ms: u32) -> Result<(), HardwareError> {
        if self.fail_next_tone {
            self.fail_next_tone = false;
            return Err(HardwareError::ToneFailed);
        }
        self.events.push(Event::Tone(pitch_hz, duration_ms));
        Ok(())
    }

    fn await_button(&mut self) -> Result<ButtonPress, HardwareError> {
        self.events.push(Event::AwaitButton);
        self.presses.pop_front().ok_or(HardwareError::InputFailed)
    }

    fn await_reset_confirm(&mut self) -> Result<(), HardwareError> {
        self.events.push(Event::AwaitReset);
        if self.reset_confirms == 0 {
            return Err(HardwareError::InputFailed);
        }
        self.reset_confirms -= 1;
        Ok(())
    }

    fn pause(&mut self, duration_ms: u32) -> Result<(), HardwareError> {
        self.events.push(Event::Pause(duration_ms));
        Ok(())
    }

    // Ein Event pro Farbe statt LED/Ton/LED
    fn emit(&mut self, colour: Colour, duration_ms: u32) -> Result<(), HardwareError> {
        if self.fail_next_tone {
            self.fail_next_tone = false;
            return Err(HardwareError::ToneFailed);
        }
        self.events.push(Event::Emit(colour, duration_ms));
        Ok(())
    }
}

// ============================================================================
// Scripted Colour Source
// ============================================================================

/// Liefert Farben aus einer festen Liste, zyklisch wiederholt
pub struct ScriptedColours {
    script: Vec<Colour>,
    next: usize,
}

impl ScriptedColours {
    pub fn new(script: &[Colour]) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }

    /// Farbe an Sequenz-Position `index`
    pub fn colour_at(&self, index: usize) -> Colour {
        self.script[index % self.script.len()]
    }

    /// Die ersten `len` Farben, die die Quelle liefern wird
    pub fn prefix(&self, len: usize) -> Vec<Colour> {
        (0..len).map(|i| self.colour_at(i)).collect()
    }
}

impl ColourSource for ScriptedColours {
    fn next_colour(&mut self) -> Colour {
        let colour = self.colour_at(self.next);
        self.next += 1;
        colour
    }
}

/// Irgendeine Farbe ungleich `colour`
pub fn other_than(colour: Colour) -> Colour {
    Colour::ALL[(colour.index() + 1) % Colour::COUNT]
}

/// Tastendrücke für `rounds` erfolgreiche Runden:
/// Runde n gibt die ersten n Farben ein
pub fn matching_presses(source: &ScriptedColours, rounds: usize) -> Vec<Colour> {
    (1..=rounds).flat_map(|n| source.prefix(n)).collect()
}
