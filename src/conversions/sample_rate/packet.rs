/// Answer of [`Resampler::return_empty`](super::Resampler::return_empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketStatus {
    /// The last `process` call produced a full packet. Its output is the
    /// deliverable; the pending count has been claimed.
    Ready,
    /// Still accumulating; the caller should send an empty packet.
    Empty,
}

impl PacketStatus {
    /// `true` for [`PacketStatus::Ready`].
    #[inline]
    pub fn is_ready(self) -> bool {
        self == PacketStatus::Ready
    }

    /// `true` for [`PacketStatus::Empty`].
    #[inline]
    pub fn is_empty(self) -> bool {
        self == PacketStatus::Empty
    }
}

/// Counts the output of the latest `process` call until a caller claims it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingOutput {
    pending: usize,
    min_output_samples: usize,
}

impl PendingOutput {
    pub(crate) fn new(min_output_samples: usize) -> Self {
        PendingOutput {
            pending: 0,
            min_output_samples,
        }
    }

    /// Replaces the pending count with the size of the newest output.
    #[inline]
    pub(crate) fn record(&mut self, produced: usize) {
        self.pending = produced;
    }

    pub(crate) fn claim(&mut self) -> PacketStatus {
        if self.pending >= self.min_output_samples {
            self.pending = 0;
            PacketStatus::Ready
        } else {
            PacketStatus::Empty
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.pending = 0;
    }

    #[inline]
    pub(crate) fn pending(&self) -> usize {
        self.pending
    }

    #[inline]
    pub(crate) fn min_output_samples(&self) -> usize {
        self.min_output_samples
    }

    #[inline]
    pub(crate) fn set_min_output_samples(&mut self, min_output_samples: usize) {
        self.min_output_samples = min_output_samples;
    }
}
