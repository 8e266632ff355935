//! Shared test infrastructure for keyed-cooldown integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::time::Duration;
use keyed_cooldown::{Cooldown, DataHolder, NamespacedKey, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Arbitrary whole-second starting point, well after the epoch
pub const START: Duration = Duration::from_secs(1_700_000_000);

/// Mock wall clock with controllable time advancement
#[derive(Debug, PartialEq)]
pub struct ManualClock {
    current_time: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::at(START)
    }

    pub fn at(time: Duration) -> Self {
        Self {
            current_time: Cell::new(time),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: Duration) {
        self.current_time.set(self.current_time.get() + duration);
    }

    pub fn set_time(&self, time: Duration) {
        self.current_time.set(time);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Duration {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Data Holders
// ============================================================================

/// Store error reported by `FailingHolder`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    Read,
    Write,
}

/// Data holder whose every read or write fails
pub struct FailingHolder {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub value: Option<i64>,
}

impl FailingHolder {
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            fail_writes: false,
            value: None,
        }
    }

    pub fn writes(value: Option<i64>) -> Self {
        Self {
            fail_reads: false,
            fail_writes: true,
            value,
        }
    }
}

impl DataHolder for FailingHolder {
    type Error = StoreError;

    fn get(&self, _key: &NamespacedKey) -> Result<Option<i64>, Self::Error> {
        if self.fail_reads {
            return Err(StoreError::Read);
        }
        Ok(self.value)
    }

    fn set(&mut self, _key: &NamespacedKey, value: i64) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(StoreError::Write);
        }
        self.value = Some(value);
        Ok(())
    }

    fn has(&self, _key: &NamespacedKey) -> Result<bool, Self::Error> {
        if self.fail_reads {
            return Err(StoreError::Read);
        }
        Ok(self.value.is_some())
    }

    fn remove(&mut self, _key: &NamespacedKey) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(StoreError::Write);
        }
        self.value = None;
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn key(s: &str) -> NamespacedKey {
    NamespacedKey::parse(s).unwrap()
}

pub fn cooldown<'c>(s: &str, clock: &'c ManualClock) -> Cooldown<&'c ManualClock> {
    Cooldown::with_time_source(key(s), clock)
}

pub fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}
