// Projekt-Konfiguration: Hardware-Zuordnungen des Simon-Boards
//
// Die Pins selbst werden in main.rs über die typisierten Peripherals gewählt,
// diese Konstanten dokumentieren die Verdrahtung.
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration (aktiv high)
// ============================================================================

pub const PIN_LED_GREEN: u8 = 19;
pub const PIN_LED_RED: u8 = 20;
pub const PIN_LED_BLUE: u8 = 21;
pub const PIN_LED_YELLOW: u8 = 22;

// ============================================================================
// Tasten Konfiguration (Pull-Up, aktiv low)
// ============================================================================

pub const PIN_BUTTON_GREEN: u8 = 0;
pub const PIN_BUTTON_RED: u8 = 1;
pub const PIN_BUTTON_BLUE: u8 = 2;
pub const PIN_BUTTON_YELLOW: u8 = 3;
pub const PIN_BUTTON_RESET: u8 = 4;

/// Abtast-Intervall der Tasten in Millisekunden
/// Keine Entprellung: die erste gedrückte Taste gewinnt
pub const BUTTON_POLL_INTERVAL_MS: u32 = 100;

// ============================================================================
// Lautsprecher Konfiguration
// ============================================================================

/// GPIO-Pin für den passiven Buzzer
/// Der Ton wird als Rechteckwelle per GPIO-Toggle erzeugt
pub const PIN_SPEAKER: u8 = 5;
