#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Cooldown`**: A keyed cooldown timer; holds only its key and a time source
//! - **`NamespacedKey`**: The `namespace:name` identifier a cooldown is stored under
//! - **`DataHolder`**: Trait to implement for the object whose attribute store carries cooldowns
//! - **`MemoryHolder`**: Fixed-capacity in-memory `DataHolder`
//! - **`TimeSource`**: Trait to implement for your wall clock (`SystemClock` with the `std` feature)
//! - **`CooldownStatus`**: Whether a cooldown is unset, active, or expired in a given holder
//!
//! Expiration records are whole seconds since the Unix epoch stored as `i64`.
//! Remaining time is computed against the full-precision current time.

pub mod time;
pub mod key;
pub mod holder;
pub mod cooldown;

pub use cooldown::{Cooldown, CooldownStatus};
pub use holder::{DataHolder, HolderFull, MemoryHolder};
pub use key::{KeyError, MAX_KEY_LEN, NamespacedKey};
pub use time::TimeSource;

#[cfg(feature = "std")]
pub use time::SystemClock;

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    struct FixedClock(u64);

    impl TimeSource for FixedClock {
        fn now(&self) -> Duration {
            Duration::from_secs(self.0)
        }
    }

    #[test]
    fn types_compile() {
        let key = NamespacedKey::new("test", "smoke").unwrap();
        let cooldown = Cooldown::with_time_source(key, FixedClock(100));
        let mut holder = MemoryHolder::<4>::new();

        cooldown.set(&mut holder, Duration::from_secs(5)).unwrap();
        assert_eq!(holder.get(cooldown.key()).unwrap(), Some(105));
        assert_eq!(cooldown.status(&holder).unwrap(), CooldownStatus::Active(Duration::from_secs(5)));
    }
}
