#![allow(dead_code)]
// in separate folder so its not ran as integration test
use std::f64::consts::TAU;

use pcmflow::SampleRate;

/// Sine generator that hands out consecutive chunks of 16-bit samples.
#[derive(Debug, Clone)]
pub struct Tone {
    pub frequency: f64,
    pub amplitude: f64,
    pub sample_rate: SampleRate,
    position: u64,
}

impl Tone {
    pub fn new(frequency: f64, sample_rate: SampleRate) -> Self {
        Self {
            frequency,
            amplitude: 10_000.0,
            sample_rate,
            position: 0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn next_chunk(&mut self, len: usize) -> Vec<i16> {
        let start = self.position;
        self.position += len as u64;
        (start..self.position)
            .map(|n| {
                let phase = TAU * self.frequency * n as f64 / self.sample_rate as f64;
                (self.amplitude * phase.sin()).round() as i16
            })
            .collect()
    }

    pub fn next_chunk_bytes(&mut self, len: usize) -> Vec<u8> {
        self.next_chunk(len)
            .into_iter()
            .flat_map(i16::to_le_bytes)
            .collect()
    }
}

pub fn rms(samples: &[i16]) -> f64 {
    let energy: f64 = samples.iter().map(|&s| f64::from(s).powi(2)).sum();
    (energy / samples.len() as f64).sqrt()
}

pub fn peak(samples: &[i16]) -> i32 {
    samples
        .iter()
        .map(|&s| i32::from(s).abs())
        .max()
        .unwrap_or(0)
}

/// Frequency estimated from sign changes.
pub fn zero_crossing_frequency(samples: &[i16], sample_rate: SampleRate) -> f64 {
    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] < 0) != (pair[1] < 0))
        .count();
    crossings as f64 / 2.0 / (samples.len() as f64 / sample_rate as f64)
}

pub fn from_le_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
