/// Stream sample rate (samples per second per channel).
pub type SampleRate = u32;

/// Number of channels in a stream.
pub type ChannelCount = u16;

/// Checks at compile time that an error type is usable across threads and
/// can be cloned and compared, like every error this crate returns.
macro_rules! assert_error_traits {
    ($to_test:path) => {
        const _: () = {
            const fn assert_traits<
                T: std::error::Error + std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
            >() {
            }
            assert_traits::<$to_test>();
        };
    };
}

pub(crate) use assert_error_traits;
