// Farbquelle auf Basis des ESP32 Hardware-RNG

use esp_hal::rng::Rng;
use simon_core::{Colour, ColourSource, colour_from_random};

/// Liefert gleichverteilte Zufallsfarben aus dem Hardware-RNG
///
/// Wird einmal beim Start erzeugt und nie neu initialisiert.
pub struct HardwareColourSource {
    rng: Rng,
}

impl HardwareColourSource {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl ColourSource for HardwareColourSource {
    fn next_colour(&mut self) -> Colour {
        colour_from_random(self.rng.random())
    }
}
