//! Wall clock abstraction for platform-agnostic expiry checks.

use core::time::Duration;

/// Trait for abstracting wall clock sources.
pub trait TimeSource {
    /// Returns the current time as a duration since the Unix epoch.
    fn now(&self) -> Duration;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Time source backed by the operating system's wall clock.
///
/// A system clock set before the Unix epoch reads as zero.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Duration {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}
