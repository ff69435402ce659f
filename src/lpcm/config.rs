use crate::common::ChannelCount;

use super::LpcmError;

/// Channel layout of an LPCM stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channels {
    /// One channel.
    Mono,
    /// Two channels, interleaved left then right.
    Stereo,
}

impl Channels {
    /// Number of channels.
    pub fn count(self) -> ChannelCount {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

impl TryFrom<ChannelCount> for Channels {
    type Error = LpcmError;

    fn try_from(count: ChannelCount) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            other => Err(LpcmError::InvalidChannelCount(other)),
        }
    }
}

/// Width of one sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitDepth {
    /// Signed 8-bit.
    Eight,
    /// Signed 16-bit.
    Sixteen,
    /// Signed 24-bit, packed in three bytes.
    TwentyFour,
    /// Signed 32-bit.
    ThirtyTwo,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Bytes per sample.
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Smallest representable sample, `-2^(bits - 1)`.
    pub fn min_value(self) -> i64 {
        -(1i64 << (self.bits() - 1))
    }

    /// Largest representable sample, `2^(bits - 1) - 1`.
    pub fn max_value(self) -> i64 {
        (1i64 << (self.bits() - 1)) - 1
    }

    /// Saturates `sample` to the representable range.
    pub fn clamp(self, sample: i32) -> i32 {
        // Both bounds fit in i32 for every depth.
        i64::from(sample).clamp(self.min_value(), self.max_value()) as i32
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = LpcmError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            other => Err(LpcmError::InvalidBitDepth(other)),
        }
    }
}

/// Byte order of each packed sample.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Describes how samples are laid out in an LPCM byte buffer.
///
/// There is no header on the wire; both ends have to agree on this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LpcmConfig {
    /// Mono or interleaved stereo
    pub channels: Channels,
    /// Width of each sample
    pub bit_depth: BitDepth,
    /// Byte order within a sample
    pub endianness: Endianness,
}

impl LpcmConfig {
    /// Little-endian layout with the given channels and bit depth.
    pub fn new(channels: Channels, bit_depth: BitDepth) -> Self {
        LpcmConfig {
            channels,
            bit_depth,
            endianness: Endianness::default(),
        }
    }

    /// Sets the byte order.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Picks big-endian when `big_endian` is set, little-endian otherwise.
    pub fn with_big_endian(self, big_endian: bool) -> Self {
        self.with_endianness(if big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        })
    }

    /// Bytes in one interleaved frame (one sample per channel).
    pub fn bytes_per_frame(&self) -> usize {
        self.bit_depth.bytes() * usize::from(self.channels.count())
    }
}
