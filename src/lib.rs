//! Streaming resampling and linear PCM packing for real-time audio.
//!
//! The crate has two independent halves:
//!
//! - [`Resampler`] converts a 16-bit mono PCM stream between two integer
//!   sample rates. Audio is fed in whatever chunk sizes arrive from the
//!   network or device; the resampler keeps enough history between calls to
//!   interpolate across chunk boundaries.
//! - [`Lpcm`] packs integer samples into headerless byte buffers of 8, 16, 24
//!   or 32 bits per sample, mono or interleaved stereo, in either byte order.
//!
//! # Resampling a stream
//!
//! ```rust
//! use pcmflow::{PacketStatus, Resampler};
//!
//! let mut resampler = Resampler::new(44_100, 16_000)?;
//! // Chunks of 2048 samples yield more than the default 512-sample packet.
//! let chunk = vec![0u8; 2048 * 2];
//! for _ in 0..10 {
//!     let out = resampler.process(&chunk);
//!     match resampler.return_empty() {
//!         PacketStatus::Ready => assert!(!out.is_empty()),
//!         PacketStatus::Empty => {}
//!     }
//! }
//! # Ok::<(), pcmflow::ResamplerError>(())
//! ```
//!
//! # Packing samples
//!
//! ```rust
//! use pcmflow::Lpcm;
//!
//! let codec = Lpcm::new(2, 16, false)?;
//! let bytes = codec.encode_stereo(&[100, 200], &[-100, -200])?;
//! assert_eq!(bytes.len(), 8);
//! let (left, right) = codec.decode_stereo(&bytes)?;
//! assert_eq!(left, [100, 200]);
//! assert_eq!(right, [-100, -200]);
//! # Ok::<(), pcmflow::LpcmError>(())
//! ```
//!
//! # Optional features
//!
//! - `tracing`: emits [`tracing`](https://docs.rs/tracing) events from the
//!   resampler. Dropped input is reported at `warn` level.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, deny(missing_docs))]

mod common;

pub mod constants;
pub mod conversions;
pub mod lpcm;
pub mod math;

pub use crate::common::{ChannelCount, SampleRate};
pub use crate::conversions::{
    FilterBank, PacketStatus, Resampler, ResamplerConfig, ResamplerError, StreamState,
};
pub use crate::lpcm::{BitDepth, Channels, Endianness, Lpcm, LpcmConfig, LpcmError};
