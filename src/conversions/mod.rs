/*!
This module contains the conversions applied to a PCM stream as it flows through.

Currently this is sample rate conversion of 16-bit mono audio.

*/
pub use self::sample_rate::{
    FilterBank, PacketStatus, Resampler, ResamplerConfig, ResamplerError, StreamState,
};

pub mod sample_rate;
