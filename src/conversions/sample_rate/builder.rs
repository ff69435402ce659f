//! Configuration for the streaming resampler.

use crate::constants::{DEFAULT_BUFFER_CAPACITY, DEFAULT_MIN_OUTPUT_SAMPLES};

/// Tunables of a [`Resampler`](super::Resampler).
///
/// The filter design (64 taps, 256 phases, Kaiser β = 8.6) is fixed; this
/// only controls buffering and packet sizing.
///
/// # Examples
///
/// ```rust
/// use pcmflow::{Resampler, ResamplerConfig};
///
/// // 20 ms packets at 16 kHz: 320 samples, 640 bytes
/// let config = ResamplerConfig::new()
///     .with_packet_size(640)
///     .with_buffer_capacity(4096);
/// let resampler = Resampler::with_config(44_100, 16_000, config)?;
/// assert_eq!(resampler.min_output_samples(), 320);
/// # Ok::<(), pcmflow::ResamplerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResamplerConfig {
    /// Input samples held between calls. Anything past this is dropped.
    pub buffer_capacity: usize,
    /// Output samples a call must produce to count as a packet.
    pub min_output_samples: usize,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            min_output_samples: DEFAULT_MIN_OUTPUT_SAMPLES,
        }
    }
}

impl ResamplerConfig {
    /// Creates a configuration with default values.
    ///
    /// Equivalent to [`ResamplerConfig::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many input samples the resampler buffers between calls.
    ///
    /// Must be larger than the filter length or construction fails.
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Sets the packet threshold in output samples.
    pub fn with_min_output_samples(mut self, min_output_samples: usize) -> Self {
        self.min_output_samples = min_output_samples;
        self
    }

    /// Sets the packet threshold in bytes of 16-bit output.
    ///
    /// An odd byte count is rounded down to whole samples.
    pub fn with_packet_size(self, bytes: usize) -> Self {
        self.with_min_output_samples(bytes / 2)
    }
}
