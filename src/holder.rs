//! Data holder contract and a fixed-capacity in-memory implementation.
//!
//! A data holder owns a typed, keyed attribute store. Cooldowns read and write
//! their expiration records through [`DataHolder`] and never keep state of
//! their own, so any store that can persist a 64-bit integer per key works:
//! entity attributes, a database row, a flash-backed settings page, etc.

use crate::key::NamespacedKey;
use heapless::LinearMap;

/// Trait for abstracting keyed attribute stores.
///
/// Implement this for whatever object should carry cooldowns. Errors are
/// surfaced unchanged to the caller of every cooldown operation. Stores that
/// cannot fail should use [`core::convert::Infallible`].
///
/// Synchronization is the store's responsibility. Concurrent writers see
/// whatever ordering the store provides.
pub trait DataHolder {
    /// Error returned by the underlying store.
    type Error;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &NamespacedKey) -> Result<Option<i64>, Self::Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &NamespacedKey, value: i64) -> Result<(), Self::Error>;

    /// Returns whether a value is stored under `key`.
    fn has(&self, key: &NamespacedKey) -> Result<bool, Self::Error>;

    /// Removes the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &NamespacedKey) -> Result<(), Self::Error>;
}

impl<H: DataHolder + ?Sized> DataHolder for &mut H {
    type Error = H::Error;

    #[inline]
    fn get(&self, key: &NamespacedKey) -> Result<Option<i64>, Self::Error> {
        (**self).get(key)
    }

    #[inline]
    fn set(&mut self, key: &NamespacedKey, value: i64) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    #[inline]
    fn has(&self, key: &NamespacedKey) -> Result<bool, Self::Error> {
        (**self).has(key)
    }

    #[inline]
    fn remove(&mut self, key: &NamespacedKey) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// Error returned when a [`MemoryHolder`] has no room for a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HolderFull;

impl core::fmt::Display for HolderFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "data holder capacity exceeded")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HolderFull {}

/// In-memory data holder with room for `N` entries.
///
/// Overwriting an existing key always succeeds; inserting a new key into a
/// full holder fails with [`HolderFull`].
#[derive(Debug, Clone)]
pub struct MemoryHolder<const N: usize> {
    entries: LinearMap<NamespacedKey, i64, N>,
}

impl<const N: usize> MemoryHolder<N> {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self {
            entries: LinearMap::<NamespacedKey, i64, N>::new(),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<const N: usize> Default for MemoryHolder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DataHolder for MemoryHolder<N> {
    type Error = HolderFull;

    fn get(&self, key: &NamespacedKey) -> Result<Option<i64>, Self::Error> {
        Ok(self.entries.get(key).copied())
    }

    fn set(&mut self, key: &NamespacedKey, value: i64) -> Result<(), Self::Error> {
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = value;
            return Ok(());
        }
        self.entries
            .insert(key.clone(), value)
            .map(|_| ())
            .map_err(|_| HolderFull)
    }

    fn has(&self, key: &NamespacedKey) -> Result<bool, Self::Error> {
        Ok(self.entries.contains_key(key))
    }

    fn remove(&mut self, key: &NamespacedKey) -> Result<(), Self::Error> {
        self.entries.remove(key);
        Ok(())
    }
}
