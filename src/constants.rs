//! pcmflow common constants

/// Number of taps in every interpolation filter of the polyphase bank.
pub const FILTER_LENGTH: usize = 64;

/// Number of sub-sample phases in the polyphase bank.
pub const FILTER_PHASES: usize = 256;

/// Kaiser window shape parameter used to design the bank.
pub const KAISER_BETA: f64 = 8.6;

/// Fraction of the usable bandwidth kept below the cutoff.
pub const CUTOFF_MARGIN: f64 = 0.95;

/// Terms of the power series used to evaluate the modified Bessel function `I0`.
pub const BESSEL_TERMS: usize = 50;

/// Input samples the resampler can hold between calls by default.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// Output samples a `process` call must produce before the result counts as a packet.
pub const DEFAULT_MIN_OUTPUT_SAMPLES: usize = 512;

/// Weight of the previous estimate in the one-pole DC tracker.
pub const DC_DECAY: f64 = 0.9995;

/// Weight of the new sample in the one-pole DC tracker.
pub const DC_GAIN: f64 = 0.0005;
