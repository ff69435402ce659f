//! Streaming sample rate conversion of 16-bit PCM.
//!
//! [`Resampler`] converts a continuous mono stream that arrives in small chunks,
//! as it does on a telephony or streaming connection. Each call to
//! [`Resampler::process`] appends the chunk to an internal buffer, emits every
//! output sample the buffered look-ahead allows, and keeps the tail for the
//! next call.
//!
//! Interpolation uses a 64-tap, 256-phase polyphase bank of Kaiser-windowed
//! sinc filters. Output passes through a slow one-pole DC blocker and is
//! clipped to the 16-bit range.
//!
//! # Example
//!
//! ```rust
//! use pcmflow::Resampler;
//!
//! let mut resampler = Resampler::new(8_000, 16_000)?;
//! let silence = vec![0u8; 2048];
//! let mut produced = Vec::new();
//! for _ in 0..4 {
//!     produced.extend(resampler.process(&silence));
//! }
//! assert!(produced.iter().all(|&b| b == 0));
//! # Ok::<(), pcmflow::ResamplerError>(())
//! ```

use dasp_sample::Sample as _;
use num_rational::Ratio;

use crate::common::{assert_error_traits, SampleRate};
use crate::constants::{DC_DECAY, DC_GAIN};

mod builder;
mod filter_bank;
mod packet;


pub use builder::ResamplerConfig;
pub use filter_bank::FilterBank;
pub use packet::PacketStatus;

use packet::PendingOutput;

/// Errors returned when constructing a [`Resampler`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ResamplerError {
    /// The source sample rate was zero.
    #[error("Source sample rate must be positive")]
    ZeroSourceRate,
    /// The target sample rate was zero.
    #[error("Target sample rate must be positive")]
    ZeroTargetRate,
    /// The configured input buffer cannot hold a single filter window.
    #[error("Input buffer of {capacity} samples is too small, need more than {required}")]
    BufferTooSmall {
        /// Configured capacity in samples.
        capacity: usize,
        /// Filter length the capacity has to exceed.
        required: usize,
    },
}
assert_error_traits!(ResamplerError);

/// Whether the buffered input is enough to emit output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    /// Fewer samples than half a filter are buffered; nothing can be emitted yet.
    Accumulating,
    /// The look-ahead half of the filter is filled.
    Emitting,
}

/// Streaming polyphase resampler for mono 16-bit PCM.
///
/// One instance belongs to one logical stream. There is no internal locking;
/// the owner serializes calls.
#[derive(Clone, Debug)]
pub struct Resampler {
    source_rate: SampleRate,
    target_rate: SampleRate,
    /// `target / source` in lowest terms.
    rate_ratio: Ratio<u32>,
    ratio: f64,

    /// Running DC estimate of the interpolated signal.
    last_dc: f64,

    /// Fixed-capacity input buffer; only `input[..buffer_used]` is valid.
    input: Vec<i16>,
    buffer_used: usize,
    /// Read cursor into `input`, in input samples.
    frac_pos: f64,
    /// Samples the most recent non-empty call could not buffer.
    dropped: usize,

    filter_bank: FilterBank,
    pending: PendingOutput,
}

impl Resampler {
    /// Creates a resampler from `source_rate` to `target_rate` with the default configuration.
    pub fn new(
        source_rate: SampleRate,
        target_rate: SampleRate,
    ) -> Result<Resampler, ResamplerError> {
        Self::with_config(source_rate, target_rate, ResamplerConfig::default())
    }

    /// Creates a resampler with explicit buffering and packet settings.
    pub fn with_config(
        source_rate: SampleRate,
        target_rate: SampleRate,
        config: ResamplerConfig,
    ) -> Result<Resampler, ResamplerError> {
        if source_rate == 0 {
            return Err(ResamplerError::ZeroSourceRate);
        }
        if target_rate == 0 {
            return Err(ResamplerError::ZeroTargetRate);
        }

        let rate_ratio = Ratio::new(target_rate, source_rate);
        let ratio = f64::from(*rate_ratio.numer()) / f64::from(*rate_ratio.denom());
        let filter_bank = FilterBank::new(ratio);

        if config.buffer_capacity <= filter_bank.filter_length() {
            return Err(ResamplerError::BufferTooSmall {
                capacity: config.buffer_capacity,
                required: filter_bank.filter_length(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            source_rate,
            target_rate,
            ratio = %rate_ratio,
            capacity = config.buffer_capacity,
            min_output_samples = config.min_output_samples,
            "created resampler"
        );

        Ok(Resampler {
            source_rate,
            target_rate,
            rate_ratio,
            ratio,
            last_dc: 0.0,
            input: vec![i16::EQUILIBRIUM; config.buffer_capacity],
            buffer_used: 0,
            frac_pos: 0.0,
            dropped: 0,
            filter_bank,
            pending: PendingOutput::new(config.min_output_samples),
        })
    }

    /// Resamples a chunk of little-endian signed 16-bit PCM.
    ///
    /// A trailing odd byte is ignored. Returns little-endian 16-bit PCM at the
    /// target rate, empty while the stream is still filling up.
    ///
    /// Input that does not fit into the remaining buffer capacity is dropped;
    /// see [`Resampler::dropped_samples`].
    pub fn process(&mut self, pcm: &[u8]) -> Vec<u8> {
        let samples = pcm
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]));
        self.process_iter(samples)
            .into_iter()
            .flat_map(i16::to_le_bytes)
            .collect()
    }

    /// Resamples a chunk of samples. Same semantics as [`Resampler::process`].
    pub fn process_samples(&mut self, samples: &[i16]) -> Vec<i16> {
        self.process_iter(samples.iter().copied())
    }

    fn process_iter<I>(&mut self, samples: I) -> Vec<i16>
    where
        I: ExactSizeIterator<Item = i16>,
    {
        if samples.len() == 0 {
            return Vec::new();
        }
        self.append(samples);

        let filter_half = self.filter_bank.filter_length() / 2;
        let max_out = if self.buffer_used > filter_half {
            ((self.buffer_used - filter_half) as f64 * self.ratio) as usize
        } else {
            0
        };
        if max_out == 0 {
            return Vec::new();
        }

        let step = 1.0 / self.ratio;
        let mut output = Vec::with_capacity(max_out);
        while output.len() < max_out {
            let base = self.frac_pos as usize;
            if base + filter_half >= self.buffer_used {
                break;
            }

            let phase = self.filter_bank.phase_for(self.frac_pos - base as f64);
            let interpolated = self.convolve(base, phase);

            self.last_dc = DC_DECAY * self.last_dc + DC_GAIN * interpolated;
            let sample = (interpolated - self.last_dc)
                .clamp(f64::from(i16::MIN), f64::from(i16::MAX))
                .round();
            output.push(sample as i16);

            self.frac_pos += step;
        }

        self.pending.record(output.len());
        self.retire_consumed();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            produced = output.len(),
            retained = self.buffer_used,
            "processed chunk"
        );

        output
    }

    /// Copies as much of `samples` as fits behind the valid prefix.
    fn append<I>(&mut self, samples: I)
    where
        I: ExactSizeIterator<Item = i16>,
    {
        let offered = samples.len();
        let free = &mut self.input[self.buffer_used..];
        let accepted = offered.min(free.len());
        for (slot, sample) in free.iter_mut().zip(samples) {
            *slot = sample;
        }
        self.buffer_used += accepted;
        self.dropped = offered - accepted;

        #[cfg(feature = "tracing")]
        if self.dropped > 0 {
            tracing::warn!(
                dropped = self.dropped,
                capacity = self.input.len(),
                "resampler input buffer full, dropping samples"
            );
        }
    }

    /// Applies one filter phase centred on `base`. Taps that fall outside the
    /// valid buffer contribute nothing.
    fn convolve(&self, base: usize, phase: usize) -> f64 {
        let valid = &self.input[..self.buffer_used];
        let filter_half = self.filter_bank.filter_length() / 2;
        let first = base as isize - filter_half as isize;

        self.filter_bank
            .phase(phase)
            .iter()
            .enumerate()
            .filter_map(|(i, tap)| {
                let index = usize::try_from(first + i as isize).ok()?;
                valid.get(index).map(|&x| f64::from(x) * tap)
            })
            .sum()
    }

    /// Drops the input samples the cursor has moved past.
    fn retire_consumed(&mut self) {
        let consumed = self.frac_pos as usize;
        if consumed >= self.buffer_used {
            self.buffer_used = 0;
            self.frac_pos = 0.0;
        } else if consumed > 0 {
            self.input.copy_within(consumed..self.buffer_used, 0);
            self.buffer_used -= consumed;
            self.frac_pos -= consumed as f64;
        }
    }

    /// Clears the stream state: DC estimate, buffered input, cursor and
    /// pending count. Rates, filter bank and configuration are kept.
    pub fn reset(&mut self) {
        self.last_dc = 0.0;
        self.frac_pos = 0.0;
        self.buffer_used = 0;
        self.dropped = 0;
        self.pending.clear();
        self.input.fill(i16::EQUILIBRIUM);

        #[cfg(feature = "tracing")]
        tracing::debug!("resampler reset");
    }

    /// Reports whether the output of the last `process` call is a full packet.
    ///
    /// This returns no audio; the samples were already handed out by
    /// `process`. When enough samples are pending they are claimed and
    /// [`PacketStatus::Ready`] is returned, otherwise [`PacketStatus::Empty`]
    /// tells the caller to send an empty placeholder.
    pub fn return_empty(&mut self) -> PacketStatus {
        self.pending.claim()
    }

    /// Derived from the amount of buffered input; nothing extra is stored.
    pub fn state(&self) -> StreamState {
        if self.buffer_used > self.filter_bank.filter_length() / 2 {
            StreamState::Emitting
        } else {
            StreamState::Accumulating
        }
    }

    /// Changes the packet threshold, in output samples.
    pub fn set_min_output_samples(&mut self, min_output_samples: usize) {
        self.pending.set_min_output_samples(min_output_samples);
    }

    /// Changes the packet threshold, in bytes of 16-bit output.
    pub fn set_packet_size(&mut self, bytes: usize) {
        self.set_min_output_samples(bytes / 2);
    }

    /// Rate of the incoming stream.
    #[inline]
    pub fn source_rate(&self) -> SampleRate {
        self.source_rate
    }

    /// Rate of the produced stream.
    #[inline]
    pub fn target_rate(&self) -> SampleRate {
        self.target_rate
    }

    /// Conversion ratio `target / source` in lowest terms.
    #[inline]
    pub fn rate_ratio(&self) -> Ratio<u32> {
        self.rate_ratio
    }

    /// Conversion ratio `target / source`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Input samples currently held for the next call.
    #[inline]
    pub fn buffered_samples(&self) -> usize {
        self.buffer_used
    }

    /// Maximum number of input samples held between calls.
    #[inline]
    pub fn buffer_capacity(&self) -> usize {
        self.input.len()
    }

    /// Input samples discarded by the most recent non-empty `process` call
    /// because the buffer was full.
    #[inline]
    pub fn dropped_samples(&self) -> usize {
        self.dropped
    }

    /// Output samples of the last `process` call not yet claimed by
    /// [`Resampler::return_empty`].
    #[inline]
    pub fn pending_samples(&self) -> usize {
        self.pending.pending()
    }

    /// Output samples a call must produce to count as a packet.
    #[inline]
    pub fn min_output_samples(&self) -> usize {
        self.pending.min_output_samples()
    }

    /// The interpolation filters designed for this ratio.
    #[inline]
    pub fn filter_bank(&self) -> &FilterBank {
        &self.filter_bank
    }
}
