// Board-Hardware: LEDs, Tasten und Buzzer an GPIOs
//
// Alle Operationen blockieren (esp_hal::delay::Delay), es gibt
// keine Interrupts und keinen Executor.

use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Output};
use simon_core::logic::{scan_controls, tone_cycles, tone_half_period_us};
use simon_core::{ButtonPress, Colour, HardwareError, SimonHardware};

use crate::config::BUTTON_POLL_INTERVAL_MS;

/// Real Hardware für das Simon-Board
///
/// LEDs und Tasten sind in Layout-Reihenfolge (`Colour::ALL`) angeordnet.
pub struct BoardHardware<'d> {
    leds: [Output<'d>; Colour::COUNT],
    buttons: [Input<'d>; Colour::COUNT],
    reset: Input<'d>,
    speaker: Output<'d>,
    delay: Delay,
}

impl<'d> BoardHardware<'d> {
    /// Erstellt die Board-Hardware aus bereits konfigurierten Pins
    ///
    /// # Parameter
    /// - `leds`: LED-Ausgänge (Grün, Rot, Blau, Gelb)
    /// - `buttons`: Farbtasten mit Pull-Up (Grün, Rot, Blau, Gelb)
    /// - `reset`: Reset-Taste mit Pull-Up
    /// - `speaker`: Ausgang für den passiven Buzzer
    pub fn new(
        leds: [Output<'d>; Colour::COUNT],
        buttons: [Input<'d>; Colour::COUNT],
        reset: Input<'d>,
        speaker: Output<'d>,
    ) -> Self {
        Self {
            leds,
            buttons,
            reset,
            speaker,
            delay: Delay::new(),
        }
    }

    // Ein Abtast-Durchlauf aller Tasten (aktiv low)
    fn scan(&self) -> Option<ButtonPress> {
        let pressed = [
            self.buttons[0].is_low(),
            self.buttons[1].is_low(),
            self.buttons[2].is_low(),
            self.buttons[3].is_low(),
        ];
        scan_controls(pressed, self.reset.is_low())
    }

    // Rechteckwelle auf dem Buzzer-Pin
    fn square_wave(&mut self, pitch_hz: u32, duration_ms: u32) {
        let half_period_us = tone_half_period_us(pitch_hz);
        if half_period_us == 0 {
            self.delay.delay_millis(duration_ms);
            return;
        }

        for _ in 0..tone_cycles(pitch_hz, duration_ms) {
            self.speaker.set_high();
            self.delay.delay_micros(half_period_us);
            self.speaker.set_low();
            self.delay.delay_micros(half_period_us);
        }
    }
}

impl SimonHardware for BoardHardware<'_> {
    fn set_indicator(&mut self, colour: Colour, on: bool) -> Result<(), HardwareError> {
        let led = &mut self.leds[colour.index()];
        if on {
            led.set_high();
        } else {
            led.set_low();
        }
        Ok(())
    }

    fn emit_tone(&mut self, pitch_hz: u32, duration_ms: u32) -> Result<(), HardwareError> {
        self.square_wave(pitch_hz, duration_ms);
        // Gleich lange Stille als Pause zwischen Tönen
        self.speaker.set_low();
        self.delay.delay_millis(duration_ms);
        Ok(())
    }

    fn await_button(&mut self) -> Result<ButtonPress, HardwareError> {
        loop {
            if let Some(press) = self.scan() {
                return Ok(press);
            }
            self.delay.delay_millis(BUTTON_POLL_INTERVAL_MS);
        }
    }

    fn await_reset_confirm(&mut self) -> Result<(), HardwareError> {
        while self.reset.is_high() {
            self.delay.delay_millis(BUTTON_POLL_INTERVAL_MS);
        }
        Ok(())
    }

    fn pause(&mut self, duration_ms: u32) -> Result<(), HardwareError> {
        self.delay.delay_millis(duration_ms);
        Ok(())
    }
}
