// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fingerprints, the fixed-width item summaries stored in buckets.

use crate::filter::error::{CuckooFilterError, Result};
use crate::filter::hash::fnv1a_32;

/// A 32-bit FNV-1a summary of an item, or an empty slot.
///
/// Fingerprints double as bucket slots: an empty fingerprint is a free slot.
/// Once a value is set it stays until [`clear`](Fingerprint::clear) is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    value: Option<u32>,
}

impl Fingerprint {
    /// Computes the fingerprint value of an item.
    #[inline]
    pub fn make<T: AsRef<[u8]> + ?Sized>(item: &T) -> u32 {
        fnv1a_32(item.as_ref())
    }

    /// Creates a fingerprint for `item`, or an empty one when no item is given.
    pub fn new(item: Option<&[u8]>) -> Self {
        Self {
            value: item.map(Self::make),
        }
    }

    /// Creates the fingerprint of `item`.
    pub fn of<T: AsRef<[u8]> + ?Sized>(item: &T) -> Self {
        Self {
            value: Some(Self::make(item)),
        }
    }

    /// Creates an empty fingerprint.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// The fingerprint value, `None` when empty.
    #[inline]
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Adopts the value of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CuckooFilterError::AlreadySet`] if this fingerprint already holds
    /// a value; the fingerprint is left untouched.
    pub fn set(&mut self, other: &Fingerprint) -> Result<()> {
        if self.value.is_some() {
            return Err(CuckooFilterError::AlreadySet);
        }
        self.value = other.value;
        Ok(())
    }

    /// Empties this fingerprint and returns a snapshot of what it held.
    pub fn clear(&mut self) -> Fingerprint {
        std::mem::take(self)
    }

    /// Whether this fingerprint holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether both fingerprints hold the same non-empty value.
    #[inline]
    pub(crate) fn matches(&self, other: &Fingerprint) -> bool {
        self.value.is_some() && self.value == other.value
    }
}
