// Spiel-Konfiguration: Timing-Konstanten und Tonhöhen
//
// Alle Werte sind fest, es gibt keine Schwierigkeits-Einstellung.

// ============================================================================
// Sequenz & Tempo
// ============================================================================

/// Start-Tempo einer Runde (ms pro LED/Ton)
pub const INITIAL_PACING_MS: u32 = 500;

/// Tempo wird alle N Sequenz-Schritte verkürzt
pub const PACING_DECAY_INTERVAL: usize = 4;

/// Verkürzungs-Faktor als Bruch (3/4 = ×0.75, abgerundet)
pub const PACING_DECAY_NUMERATOR: u64 = 3;
pub const PACING_DECAY_DENOMINATOR: u64 = 4;

/// Maximale Sequenz-Länge (feste Kapazität, kein Heap)
pub const MAX_SEQUENCE_LEN: usize = 128;

// ============================================================================
// Feste Dauern (ms)
// ============================================================================

/// Quittungs-Ton nach jedem Tastendruck
pub const FEEDBACK_MS: u32 = 250;

/// Pause zwischen erfolgreicher Eingabe und nächstem Schritt
pub const ROUND_PAUSE_MS: u32 = 1000;

/// Start-Fanfare: Dauer pro Farbe
pub const FANFARE_MS: u32 = 100;

/// Wiederholung der Sequenz nach einem Fehler
pub const FAIL_REPLAY_MS: u32 = 200;

/// Haltezeit der Fehler-LEDs vor und nach dem Fehler-Signal
pub const FAIL_HOLD_MS: u32 = 1000;

// ============================================================================
// Tonhöhen (Hz)
// ============================================================================
//
// Siehe https://pages.mtu.edu/~suits/notefreqs.html

pub const NOTE_C2: u32 = 65;
pub const NOTE_G2: u32 = 98;
pub const NOTE_E3: u32 = 165;
pub const NOTE_C4S: u32 = 277;
pub const NOTE_E4: u32 = 330;
pub const NOTE_A4: u32 = 440;

pub const NOTE_GREEN: u32 = NOTE_E3;
pub const NOTE_RED: u32 = NOTE_A4;
pub const NOTE_BLUE: u32 = NOTE_E4;
pub const NOTE_YELLOW: u32 = NOTE_C4S;

/// Fehler-Signal: zwei absteigende Töne
pub const FAIL_NOTE_FIRST_HZ: u32 = NOTE_G2;
pub const FAIL_NOTE_FIRST_MS: u32 = 250;
pub const FAIL_NOTE_SECOND_HZ: u32 = NOTE_C2;
pub const FAIL_NOTE_SECOND_MS: u32 = 500;
