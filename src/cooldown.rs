//! Keyed cooldown timers persisted inside a data holder.
//!
//! Provides [`Cooldown`], a stateless accessor that reads and writes one
//! expiration record in any [`DataHolder`]. The record is the cooldown's end
//! time in whole seconds since the Unix epoch, stored under the cooldown's
//! [`NamespacedKey`]. Expiry is evaluated lazily on each query; nothing ticks
//! and nothing is evicted automatically.

use crate::holder::DataHolder;
use crate::key::NamespacedKey;
use crate::time::TimeSource;
use core::time::Duration;

#[cfg(feature = "std")]
use crate::time::SystemClock;

/// Observable state of a cooldown in one data holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CooldownStatus {
    /// No expiration record is stored.
    Unset,
    /// A record is stored and ends after the given remaining time.
    Active(Duration),
    /// A record is stored but its end time has passed.
    Expired,
}

impl CooldownStatus {
    /// Returns true for [`CooldownStatus::Active`].
    pub fn is_active(&self) -> bool {
        matches!(self, CooldownStatus::Active(_))
    }
}

/// A keyed cooldown that keeps its state inside the data holders it is applied to.
///
/// The cooldown itself holds only its key and a time source, so one instance
/// can be shared across any number of holders. Two cooldowns with equal keys
/// address the same record.
///
/// # Type Parameters
/// * `T` - Time source implementation type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cooldown<T: TimeSource> {
    key: NamespacedKey,
    time_source: T,
}

#[cfg(feature = "std")]
impl Cooldown<SystemClock> {
    /// Creates a cooldown driven by the system wall clock.
    pub fn new(key: NamespacedKey) -> Self {
        Self::with_time_source(key, SystemClock)
    }
}

impl<T: TimeSource> Cooldown<T> {
    /// Creates a cooldown driven by the given time source.
    pub fn with_time_source(key: NamespacedKey, time_source: T) -> Self {
        Self { key, time_source }
    }

    /// Returns the key this cooldown is stored under.
    pub fn key(&self) -> &NamespacedKey {
        &self.key
    }

    /// Starts the cooldown on `holder`, ending `duration` from now.
    ///
    /// Overwrites any previous record for this key. The end time is truncated
    /// to whole seconds; an end time beyond `i64::MAX` seconds saturates,
    /// producing a cooldown that never elapses.
    pub fn set<H: DataHolder + ?Sized>(
        &self,
        holder: &mut H,
        duration: Duration,
    ) -> Result<(), H::Error> {
        let expiration = self
            .time_source
            .now()
            .checked_add(duration)
            .and_then(|end| i64::try_from(end.as_secs()).ok())
            .unwrap_or(i64::MAX);

        holder.set(&self.key, expiration)
    }

    /// Returns true if a record exists on `holder`, expired or not.
    pub fn is_set<H: DataHolder + ?Sized>(&self, holder: &H) -> Result<bool, H::Error> {
        holder.has(&self.key)
    }

    /// Returns the stored end time as a duration since the Unix epoch.
    ///
    /// Returns `None` when no record exists. Records before the epoch read as zero.
    pub fn expires_at<H: DataHolder + ?Sized>(
        &self,
        holder: &H,
    ) -> Result<Option<Duration>, H::Error> {
        Ok(holder.get(&self.key)?.map(epoch_seconds))
    }

    /// Returns the time left before the cooldown ends.
    ///
    /// Returns `Duration::ZERO` when no record exists or the end time has passed.
    pub fn remaining_time<H: DataHolder + ?Sized>(&self, holder: &H) -> Result<Duration, H::Error> {
        Ok(match self.expires_at(holder)? {
            Some(expiration) => self.remaining_until(expiration),
            None => Duration::ZERO,
        })
    }

    /// Returns true if the cooldown is not running, either because it was
    /// never set or because its end time has passed.
    pub fn is_expired<H: DataHolder + ?Sized>(&self, holder: &H) -> Result<bool, H::Error> {
        Ok(self.remaining_time(holder)?.is_zero())
    }

    /// Returns the observable state of the cooldown on `holder`.
    pub fn status<H: DataHolder + ?Sized>(&self, holder: &H) -> Result<CooldownStatus, H::Error> {
        let Some(expiration) = self.expires_at(holder)? else {
            return Ok(CooldownStatus::Unset);
        };

        let remaining = self.remaining_until(expiration);
        if remaining.is_zero() {
            Ok(CooldownStatus::Expired)
        } else {
            Ok(CooldownStatus::Active(remaining))
        }
    }

    /// Removes the record from `holder`.
    ///
    /// Returns true if a record was removed, false if none existed.
    pub fn remove<H: DataHolder + ?Sized>(&self, holder: &mut H) -> Result<bool, H::Error> {
        if !holder.has(&self.key)? {
            return Ok(false);
        }
        holder.remove(&self.key)?;
        Ok(true)
    }

    /// Removes the record from `holder` if its end time has passed.
    ///
    /// Returns true only when an elapsed record was removed. Returns false
    /// both when no record exists and when the cooldown is still running;
    /// use [`Cooldown::status`] to tell those apart.
    pub fn remove_if_expired<H: DataHolder + ?Sized>(
        &self,
        holder: &mut H,
    ) -> Result<bool, H::Error> {
        if self.status(&*holder)? != CooldownStatus::Expired {
            return Ok(false);
        }
        holder.remove(&self.key)?;
        Ok(true)
    }

    fn remaining_until(&self, expiration: Duration) -> Duration {
        expiration.saturating_sub(self.time_source.now())
    }
}

fn epoch_seconds(stored: i64) -> Duration {
    Duration::from_secs(u64::try_from(stored).unwrap_or(0))
}
