use crate::constants::{CUTOFF_MARGIN, FILTER_LENGTH, FILTER_PHASES, KAISER_BETA};
use crate::math::{kaiser_window, sinc};

/// Table of Kaiser-windowed sinc interpolation filters, one per sub-sample phase.
///
/// Row `p` interpolates at a fractional offset of `p / phases` input samples.
/// Every row is normalized to unit DC gain. The table never changes after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterBank {
    /// `phases` rows of `filter_length` taps, row-major.
    taps: Vec<f64>,
    filter_length: usize,
    phases: usize,
}

impl FilterBank {
    /// Designs the bank for a conversion ratio `target / source`.
    ///
    /// When downsampling the cutoff follows the ratio down so the output
    /// does not alias.
    pub fn new(ratio: f64) -> Self {
        Self::with_shape(ratio, FILTER_LENGTH, FILTER_PHASES)
    }

    pub(crate) fn with_shape(ratio: f64, filter_length: usize, phases: usize) -> Self {
        let cutoff = ratio.min(1.0) * CUTOFF_MARGIN;
        let centre = (filter_length as f64 - 1.0) / 2.0;

        let window: Vec<f64> = (0..filter_length)
            .map(|i| kaiser_window(i, filter_length, KAISER_BETA))
            .collect();

        let mut taps = Vec::with_capacity(filter_length * phases);
        for phase in 0..phases {
            let phase_offset = phase as f64 / phases as f64;
            let row_start = taps.len();

            taps.extend(window.iter().enumerate().map(|(i, w)| {
                let t = i as f64 - centre + phase_offset;
                sinc(2.0 * cutoff * t) * 2.0 * cutoff * w
            }));

            let row = &mut taps[row_start..];
            let sum: f64 = row.iter().sum();
            // A non-positive sum only shows up for degenerate ratios; keep the raw taps.
            if sum > 0.0 {
                row.iter_mut().for_each(|h| *h /= sum);
            }
        }

        FilterBank {
            taps,
            filter_length,
            phases,
        }
    }

    /// Taps per filter.
    #[inline]
    pub fn filter_length(&self) -> usize {
        self.filter_length
    }

    /// Number of sub-sample phases.
    #[inline]
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Coefficients of one phase.
    ///
    /// # Panics
    ///
    /// Panics if `phase >= self.phases()`.
    #[inline]
    pub fn phase(&self, phase: usize) -> &[f64] {
        let start = phase * self.filter_length;
        &self.taps[start..start + self.filter_length]
    }

    /// Index of the row closest below a fractional position in `[0, 1)`.
    #[inline]
    pub(crate) fn phase_for(&self, frac: f64) -> usize {
        ((frac * self.phases as f64) as usize).min(self.phases - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn has_the_configured_shape() {
        let bank = FilterBank::new(2.0);
        assert_eq!(bank.phases(), FILTER_PHASES);
        assert_eq!(bank.filter_length(), FILTER_LENGTH);
        assert_eq!(bank.phase(FILTER_PHASES - 1).len(), FILTER_LENGTH);
    }

    #[test]
    fn every_phase_has_unit_gain() {
        for ratio in [0.18, 0.3628, 0.5, 1.0, 2.0, 5.5125] {
            let bank = FilterBank::new(ratio);
            for p in 0..bank.phases() {
                let sum: f64 = bank.phase(p).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn upsampling_banks_share_the_nyquist_cutoff() {
        assert_eq!(FilterBank::new(2.0), FilterBank::new(6.0));
        assert_ne!(FilterBank::new(0.5), FilterBank::new(2.0));
    }

    #[test]
    fn phase_zero_is_symmetric_around_the_half_sample() {
        let bank = FilterBank::new(1.0);
        let row = bank.phase(0);
        for i in 0..FILTER_LENGTH / 2 {
            assert_abs_diff_eq!(row[i], row[FILTER_LENGTH - 1 - i], epsilon = 1e-12);
        }
    }

    #[test]
    fn phase_lookup_clamps_to_the_last_row() {
        let bank = FilterBank::new(1.0);
        assert_eq!(bank.phase_for(0.0), 0);
        assert_eq!(bank.phase_for(0.5), FILTER_PHASES / 2);
        assert_eq!(bank.phase_for(0.999_999_9), FILTER_PHASES - 1);
        assert_eq!(bank.phase_for(1.0), FILTER_PHASES - 1);
    }
}
