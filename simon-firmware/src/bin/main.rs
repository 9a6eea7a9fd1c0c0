// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use simon_firmware::BoardEngine;
use simon_firmware::hal::{BoardHardware, HardwareColourSource};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert GPIOs und RNG, spielt die Start-Fanfare und läuft dann
/// endlos in der Runden-Schleife. Kehrt nur bei einem Hardware-Fehler zurück,
/// dann hält esp-backtrace das System an.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // LEDs: aktiv high, Start aus (Pins siehe config.rs)
    let led = OutputConfig::default();
    let leds = [
        Output::new(peripherals.GPIO19, Level::Low, led),
        Output::new(peripherals.GPIO20, Level::Low, led),
        Output::new(peripherals.GPIO21, Level::Low, led),
        Output::new(peripherals.GPIO22, Level::Low, led),
    ];

    // Tasten: Pull-Up, gedrückt = low
    let button = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        Input::new(peripherals.GPIO0, button),
        Input::new(peripherals.GPIO1, button),
        Input::new(peripherals.GPIO2, button),
        Input::new(peripherals.GPIO3, button),
    ];
    let reset = Input::new(peripherals.GPIO4, button);

    // Passiver Buzzer
    let speaker = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());

    let hardware = BoardHardware::new(leds, buttons, reset, speaker);

    // Zufallsquelle einmalig beim Start erzeugen
    let colours = HardwareColourSource::new(Rng::new());

    let mut engine: BoardEngine<'_> = BoardEngine::new(hardware, colours);
    info!("Simon ready");

    // run() kehrt nur mit einem Hardware-Fehler zurück
    let Err(e) = engine.run();
    error!("Hardware fault: {}", e);
    panic!("unrecoverable hardware fault");
}
