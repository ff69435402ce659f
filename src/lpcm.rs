//! Linear PCM packing.
//!
//! [`Lpcm`] turns integer samples into headerless byte buffers and back, for
//! 8, 16, 24 or 32-bit samples in either byte order. Stereo is interleaved
//! frame by frame: `L0 R0 L1 R1 ...`.
//!
//! Encoding saturates samples that do not fit the bit depth. Decoding
//! sign-extends each sample and silently ignores a trailing partial sample
//! or frame.
//!
//! # Example
//!
//! ```rust
//! use pcmflow::Lpcm;
//!
//! let codec = Lpcm::new(1, 8, false)?;
//! assert_eq!(codec.encode_mono(&[200, -200])?, [0x7f, 0x80]);
//! assert_eq!(codec.decode_mono(&[0x7f, 0x80])?, [127, -128]);
//! # Ok::<(), pcmflow::LpcmError>(())
//! ```

use crate::common::{assert_error_traits, ChannelCount};

mod config;

pub use config::{BitDepth, Channels, Endianness, LpcmConfig};

/// Errors returned by [`Lpcm`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LpcmError {
    /// Only mono and stereo are supported.
    #[error("Channels must be 1 (mono) or 2 (stereo), got {0}")]
    InvalidChannelCount(ChannelCount),
    /// Only 8, 16, 24 and 32-bit samples are supported.
    #[error("Bit depth must be 8, 16, 24, or 32, got {0}")]
    InvalidBitDepth(u32),
    /// The operation needs a different channel layout than the codec was built with.
    #[error("{operation} requires {expected:?} but the codec is {actual:?}")]
    WrongChannelLayout {
        /// Name of the rejected operation
        operation: &'static str,
        /// Layout the operation works on
        expected: Channels,
        /// Layout of the codec
        actual: Channels,
    },
    /// Left and right channels differ in length.
    #[error("Left and right channels must have the same length, got {left} and {right}")]
    LengthMismatch {
        /// Samples in the left channel
        left: usize,
        /// Samples in the right channel
        right: usize,
    },
}
assert_error_traits!(LpcmError);

/// Encoder and decoder for one fixed LPCM layout.
///
/// Holds no state besides its configuration, so a single instance can be
/// shared freely between threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lpcm {
    config: LpcmConfig,
}

impl Lpcm {
    /// Builds a codec from raw parameters, validating them.
    pub fn new(
        channels: ChannelCount,
        bit_depth: u32,
        big_endian: bool,
    ) -> Result<Lpcm, LpcmError> {
        let channels = Channels::try_from(channels)?;
        let bit_depth = BitDepth::try_from(bit_depth)?;
        Ok(Self::from_config(
            LpcmConfig::new(channels, bit_depth).with_big_endian(big_endian),
        ))
    }

    /// Builds a codec from an already validated configuration.
    pub fn from_config(config: LpcmConfig) -> Lpcm {
        Lpcm { config }
    }

    /// The layout this codec reads and writes.
    #[inline]
    pub fn config(&self) -> LpcmConfig {
        self.config
    }

    /// Bytes per sample of a single channel.
    #[inline]
    pub fn bytes_per_sample(&self) -> usize {
        self.config.bit_depth.bytes()
    }

    /// Bytes per interleaved frame.
    #[inline]
    pub fn bytes_per_frame(&self) -> usize {
        self.config.bytes_per_frame()
    }

    /// Packs mono samples, saturating each to the bit depth.
    pub fn encode_mono(&self, samples: &[i32]) -> Result<Vec<u8>, LpcmError> {
        self.require(Channels::Mono, "encode_mono")?;

        let mut out = Vec::with_capacity(samples.len() * self.bytes_per_sample());
        for &sample in samples {
            self.write_sample(sample, &mut out);
        }
        Ok(out)
    }

    /// Unpacks mono samples. A trailing partial sample is ignored.
    pub fn decode_mono(&self, pcm: &[u8]) -> Result<Vec<i32>, LpcmError> {
        self.require(Channels::Mono, "decode_mono")?;

        Ok(pcm
            .chunks_exact(self.bytes_per_sample())
            .map(|bytes| self.read_sample(bytes))
            .collect())
    }

    /// Packs two equally long channels as interleaved frames.
    pub fn encode_stereo(&self, left: &[i32], right: &[i32]) -> Result<Vec<u8>, LpcmError> {
        self.require(Channels::Stereo, "encode_stereo")?;
        if left.len() != right.len() {
            return Err(LpcmError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let mut out = Vec::with_capacity(left.len() * self.bytes_per_frame());
        for (&l, &r) in left.iter().zip(right) {
            self.write_sample(l, &mut out);
            self.write_sample(r, &mut out);
        }
        Ok(out)
    }

    /// Splits interleaved frames into left and right channels. A trailing
    /// partial frame is ignored.
    pub fn decode_stereo(&self, pcm: &[u8]) -> Result<(Vec<i32>, Vec<i32>), LpcmError> {
        self.require(Channels::Stereo, "decode_stereo")?;

        let width = self.bytes_per_sample();
        let frames = pcm.chunks_exact(self.bytes_per_frame());
        let mut left = Vec::with_capacity(frames.len());
        let mut right = Vec::with_capacity(frames.len());
        for frame in frames {
            let (l, r) = frame.split_at(width);
            left.push(self.read_sample(l));
            right.push(self.read_sample(r));
        }
        Ok((left, right))
    }

    fn require(&self, expected: Channels, operation: &'static str) -> Result<(), LpcmError> {
        if self.config.channels == expected {
            Ok(())
        } else {
            Err(LpcmError::WrongChannelLayout {
                operation,
                expected,
                actual: self.config.channels,
            })
        }
    }

    fn write_sample(&self, sample: i32, out: &mut Vec<u8>) {
        let width = self.bytes_per_sample();
        // Two's complement truncation: the low `width` bytes carry the value.
        let le = self.config.bit_depth.clamp(sample).to_le_bytes();
        let low = &le[..width];
        match self.config.endianness {
            Endianness::Little => out.extend_from_slice(low),
            Endianness::Big => out.extend(low.iter().rev()),
        }
    }

    fn read_sample(&self, bytes: &[u8]) -> i32 {
        let mut le = [0u8; 4];
        match self.config.endianness {
            Endianness::Little => le[..bytes.len()].copy_from_slice(bytes),
            Endianness::Big => le
                .iter_mut()
                .zip(bytes.iter().rev())
                .for_each(|(dst, src)| *dst = *src),
        }
        let shift = 32 - self.config.bit_depth.bits();
        // Moving the sign bit to the top lets the arithmetic shift extend it.
        ((u32::from_le_bytes(le) << shift) as i32) >> shift
    }
}
