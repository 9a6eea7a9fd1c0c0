//! Runden-Engine - Zustandsmaschine des Spiels
//!
//! Die Engine besitzt Hardware und Farbquelle und steuert den Ablauf:
//!
//! ```text
//! Fanfare → Idle → (Reset) → Growing → Playback → Validating ─(Match)→ Growing
//!                                                     │
//!                              (Mismatch / Reset / Sequenz voll)
//!                                                     ↓
//!                                          Failing → Idle
//! ```
//!
//! Ein Fehler des Spielers ist kein `Err`, sondern das normale Ende jeder
//! Runde. `Err` transportiert nur Hardware-Fehler, die Engine reicht sie
//! unverändert weiter.

use core::convert::Infallible;

use crate::config::{
    FAIL_HOLD_MS, FAIL_NOTE_FIRST_HZ, FAIL_NOTE_FIRST_MS, FAIL_NOTE_SECOND_HZ, FAIL_NOTE_SECOND_MS,
    FAIL_REPLAY_MS, FANFARE_MS, FEEDBACK_MS, ROUND_PAUSE_MS,
};
use crate::round::Round;
use crate::traits::{ColourSource, HardwareError, SimonHardware};
use crate::types::{ButtonPress, Colour, GameState, RoundOutcome, Validation};

/// Spielt eine Sequenz nacheinander ab, jede Farbe mit `duration_ms`
pub fn play_sequence<H: SimonHardware>(
    hw: &mut H,
    sequence: &[Colour],
    duration_ms: u32,
) -> Result<(), HardwareError> {
    for &colour in sequence {
        hw.emit(colour, duration_ms)?;
    }
    Ok(())
}

/// Prüft die Eingabe des Spielers gegen `sequence`
///
/// Liest höchstens `sequence.len()` Tastendrücke:
/// - Jede gedrückte Farbe wird als Quittung abgespielt, auch eine falsche
/// - Bei der ersten Abweichung wird abgebrochen, weitere Drücke werden nicht abgefragt
/// - Die Reset-Taste bricht sofort ab (`ResetAbort`), das zählt nicht als Mismatch
///
/// Eine leere Sequenz ist ohne Tastendruck ein `Match`.
pub fn validate_input<H: SimonHardware>(
    hw: &mut H,
    sequence: &[Colour],
) -> Result<Validation, HardwareError> {
    for (position, &expected) in sequence.iter().enumerate() {
        let pressed = match hw.await_button()? {
            ButtonPress::Colour(colour) => colour,
            ButtonPress::Reset => return Ok(Validation::ResetAbort { position }),
        };

        hw.emit(pressed, FEEDBACK_MS)?;

        if pressed != expected {
            return Ok(Validation::Mismatch {
                position,
                expected,
                pressed,
            });
        }
    }
    Ok(Validation::Match)
}

/// Runden-Engine
///
/// # Trait-basierte Abstraktion
/// - `H: SimonHardware`: echte Board-Hardware oder Mock
/// - `S: ColourSource`: Hardware-RNG oder festes Test-Skript
pub struct RoundEngine<H, S> {
    hw: H,
    colours: S,
    round: Round,
    state: GameState,
}

impl<H: SimonHardware, S: ColourSource> RoundEngine<H, S> {
    pub fn new(hw: H, colours: S) -> Self {
        Self {
            hw,
            colours,
            round: Round::new(),
            state: GameState::Idle,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Aktuelle (oder zuletzt beendete) Runde
    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    pub fn into_parts(self) -> (H, S) {
        (self.hw, self.colours)
    }

    /// Einschalt-Fanfare: alle Farben vorwärts, dann rückwärts
    pub fn start_fanfare(&mut self) -> Result<(), HardwareError> {
        self.state = GameState::Fanfare;
        info!("Start fanfare");

        for colour in Colour::ALL {
            self.hw.emit(colour, FANFARE_MS)?;
        }
        for colour in Colour::ALL.into_iter().rev() {
            self.hw.emit(colour, FANFARE_MS)?;
        }

        self.state = GameState::Idle;
        Ok(())
    }

    /// Fehler-Fanfare: alle LEDs an, zwei absteigende Töne, alle LEDs aus
    pub fn failure_fanfare(&mut self) -> Result<(), HardwareError> {
        self.hw.pause(FAIL_HOLD_MS)?;
        self.hw.set_all_indicators(true)?;

        self.hw.emit_tone(FAIL_NOTE_FIRST_HZ, FAIL_NOTE_FIRST_MS)?;
        self.hw.emit_tone(FAIL_NOTE_SECOND_HZ, FAIL_NOTE_SECOND_MS)?;

        self.hw.pause(FAIL_HOLD_MS)?;
        self.hw.set_all_indicators(false)
    }

    /// Spielt eine komplette Runde bis zum ersten Fehler
    ///
    /// Gibt genau ein Ergebnis pro Aufruf zurück. Danach steht die Engine
    /// wieder in `Idle`.
    pub fn play_round(&mut self) -> Result<RoundOutcome, HardwareError> {
        self.round.reset();
        info!("Round started");

        let outcome = loop {
            self.state = GameState::Growing;
            let colour = self.colours.next_colour();
            if self.round.grow(colour).is_err() {
                warn!("Sequence full, ending round");
                break RoundOutcome::SequenceFull {
                    final_pacing_ms: self.round.pacing_ms(),
                };
            }
            debug!(
                "Sequence length {}, pacing {} ms",
                self.round.sequence().len(),
                self.round.pacing_ms()
            );

            self.state = GameState::Playback;
            play_sequence(
                &mut self.hw,
                self.round.sequence().as_slice(),
                self.round.pacing_ms(),
            )?;

            self.state = GameState::Validating;
            let length = self.round.sequence().len();
            let final_pacing_ms = self.round.pacing_ms();
            match validate_input(&mut self.hw, self.round.sequence().as_slice())? {
                Validation::Match => self.hw.pause(ROUND_PAUSE_MS)?,
                Validation::Mismatch {
                    position,
                    expected,
                    pressed,
                } => {
                    break RoundOutcome::Mismatch {
                        length,
                        position,
                        expected,
                        pressed,
                        final_pacing_ms,
                    };
                }
                Validation::ResetAbort { position } => {
                    break RoundOutcome::ResetAbort {
                        length,
                        position,
                        final_pacing_ms,
                    };
                }
            }
        };

        info!("Round over: {}", outcome);
        self.fail(&outcome)?;
        Ok(outcome)
    }

    /// Wartet auf die Reset-Taste und startet dann eine neue Runde
    pub fn await_restart(&mut self) -> Result<RoundOutcome, HardwareError> {
        self.state = GameState::Idle;
        info!("Waiting for reset button...");
        self.hw.await_reset_confirm()?;
        self.play_round()
    }

    /// Haupt-Schleife: Fanfare, dann endlos Runden
    ///
    /// Kehrt nur bei einem Hardware-Fehler zurück. Nach einem Reset-Abbruch
    /// startet die nächste Runde sofort, sonst wird auf die Reset-Taste gewartet.
    pub fn run(&mut self) -> Result<Infallible, HardwareError> {
        self.start_fanfare()?;

        let mut outcome = self.await_restart()?;
        loop {
            outcome = if outcome.restarts_immediately() {
                self.play_round()?
            } else {
                self.await_restart()?
            };
        }
    }

    // Failing → Idle: eine Fehler-Fanfare pro Fehler
    fn fail(&mut self, outcome: &RoundOutcome) -> Result<(), HardwareError> {
        self.state = GameState::Failing;
        self.failure_fanfare()?;

        // Nach Reset-Abbruch keine Wiederholung, die neue Runde folgt direkt
        if !outcome.restarts_immediately() {
            play_sequence(
                &mut self.hw,
                self.round.sequence().as_slice(),
                FAIL_REPLAY_MS,
            )?;
        }

        self.state = GameState::Idle;
        Ok(())
    }
}
