use pcmflow::{BitDepth, Channels, Endianness, Lpcm, LpcmConfig, LpcmError};

use rstest::rstest;
use rstest_reuse::{self, *};

#[template]
#[rstest]
#[case(BitDepth::Eight, Endianness::Little)]
#[case(BitDepth::Eight, Endianness::Big)]
#[case(BitDepth::Sixteen, Endianness::Little)]
#[case(BitDepth::Sixteen, Endianness::Big)]
#[case(BitDepth::TwentyFour, Endianness::Little)]
#[case(BitDepth::TwentyFour, Endianness::Big)]
#[case(BitDepth::ThirtyTwo, Endianness::Little)]
#[case(BitDepth::ThirtyTwo, Endianness::Big)]
fn all_layouts(#[case] bit_depth: BitDepth, #[case] endianness: Endianness) {}

fn codec(channels: Channels, bit_depth: BitDepth, endianness: Endianness) -> Lpcm {
    Lpcm::from_config(LpcmConfig::new(channels, bit_depth).with_endianness(endianness))
}

/// Values around every bit depth's limits, so each layout sees both
/// in-range samples and samples that must saturate.
fn edge_samples() -> Vec<i32> {
    let mut samples = vec![0, 1, -1, 50, -50, 1000, -1000];
    for bits in [8u32, 16, 24] {
        let max = (1i32 << (bits - 1)) - 1;
        let min = -(1i32 << (bits - 1));
        samples.extend([max, max + 1, min, min - 1]);
    }
    samples.extend([i32::MAX, i32::MIN, 100_000_000, -100_000_000]);
    samples
}

#[apply(all_layouts)]
#[trace]
fn mono_round_trip_saturates(#[case] bit_depth: BitDepth, #[case] endianness: Endianness) {
    let codec = codec(Channels::Mono, bit_depth, endianness);
    let samples = edge_samples();

    let bytes = codec.encode_mono(&samples).unwrap();
    assert_eq!(bytes.len(), samples.len() * bit_depth.bytes());

    let expected: Vec<i32> = samples.iter().map(|&s| bit_depth.clamp(s)).collect();
    assert_eq!(codec.decode_mono(&bytes).unwrap(), expected);
}

#[apply(all_layouts)]
#[trace]
fn stereo_round_trip_saturates(#[case] bit_depth: BitDepth, #[case] endianness: Endianness) {
    let codec = codec(Channels::Stereo, bit_depth, endianness);
    let left = edge_samples();
    let right: Vec<i32> = left.iter().rev().map(|s| s.wrapping_neg()).collect();

    let bytes = codec.encode_stereo(&left, &right).unwrap();
    assert_eq!(bytes.len(), left.len() * 2 * bit_depth.bytes());

    let (decoded_left, decoded_right) = codec.decode_stereo(&bytes).unwrap();
    let clamp = |xs: &[i32]| xs.iter().map(|&s| bit_depth.clamp(s)).collect::<Vec<_>>();
    assert_eq!(decoded_left, clamp(&left));
    assert_eq!(decoded_right, clamp(&right));
}

#[apply(all_layouts)]
#[trace]
fn stereo_length_mismatch_is_rejected(
    #[case] bit_depth: BitDepth,
    #[case] endianness: Endianness,
) {
    let codec = codec(Channels::Stereo, bit_depth, endianness);
    assert_eq!(
        codec.encode_stereo(&[1, 2, 3], &[1, 2]),
        Err(LpcmError::LengthMismatch { left: 3, right: 2 })
    );
}

#[apply(all_layouts)]
#[trace]
fn trailing_bytes_are_ignored(#[case] bit_depth: BitDepth, #[case] endianness: Endianness) {
    let mono = codec(Channels::Mono, bit_depth, endianness);
    let mut bytes = mono.encode_mono(&[7, -7]).unwrap();
    bytes.extend(std::iter::repeat(0xaa).take(bit_depth.bytes() - 1));
    assert_eq!(mono.decode_mono(&bytes).unwrap(), [7, -7]);

    let stereo = codec(Channels::Stereo, bit_depth, endianness);
    let mut bytes = stereo.encode_stereo(&[7], &[-7]).unwrap();
    bytes.extend(std::iter::repeat(0xaa).take(2 * bit_depth.bytes() - 1));
    assert_eq!(stereo.decode_stereo(&bytes).unwrap(), (vec![7], vec![-7]));
}

#[rstest]
#[case(&[0, 1000, -1000, 32767, -32768, 0], 16, false)]
#[case(&[0, 50, -50, 127, -128], 8, false)]
#[case(&[0, 1_000_000, -1_000_000, 8_388_607, -8_388_608], 24, true)]
fn in_range_samples_survive_unchanged(
    #[case] samples: &[i32],
    #[case] bits: u32,
    #[case] big_endian: bool,
) {
    let codec = Lpcm::new(1, bits, big_endian).unwrap();
    let bytes = codec.encode_mono(samples).unwrap();
    assert_eq!(codec.decode_mono(&bytes).unwrap(), samples);
}

#[test]
fn thirty_two_bit_stereo_known_values() {
    let codec = Lpcm::new(2, 32, false).unwrap();
    let left = [0, 100_000_000, -100_000_000];
    let right = [50_000_000, -50_000_000, 0];

    let bytes = codec.encode_stereo(&left, &right).unwrap();
    assert_eq!(bytes.len(), 24);
    assert_eq!(bytes[4..8], 50_000_000i32.to_le_bytes());

    let (l, r) = codec.decode_stereo(&bytes).unwrap();
    assert_eq!(l, left);
    assert_eq!(r, right);
}

#[rstest]
#[case(0, 16, LpcmError::InvalidChannelCount(0))]
#[case(6, 16, LpcmError::InvalidChannelCount(6))]
#[case(1, 0, LpcmError::InvalidBitDepth(0))]
#[case(2, 64, LpcmError::InvalidBitDepth(64))]
fn invalid_configuration(#[case] channels: u16, #[case] bits: u32, #[case] error: LpcmError) {
    assert_eq!(Lpcm::new(channels, bits, false), Err(error));
}

#[test]
fn error_messages() {
    assert_eq!(
        LpcmError::InvalidChannelCount(3).to_string(),
        "Channels must be 1 (mono) or 2 (stereo), got 3"
    );
    assert_eq!(
        LpcmError::InvalidBitDepth(12).to_string(),
        "Bit depth must be 8, 16, 24, or 32, got 12"
    );
}
