// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus simon-core für das ESP32-C6 Board.

pub mod board;
pub mod rng;

pub use board::BoardHardware;
pub use rng::HardwareColourSource;
