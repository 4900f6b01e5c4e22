// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Buckets, the fixed-capacity storage and relocation unit of the filter.

use rand::Rng;

use crate::filter::fingerprint::Fingerprint;

/// A fixed number of fingerprint slots.
///
/// Slots are scanned in index order and the first empty slot wins on insert.
/// Callers must not rely on a fingerprint keeping its slot position.
///
/// Invariant: `filled` equals the number of non-empty slots.
#[derive(Debug, Clone)]
pub struct Bucket {
    /// Owned slot storage, never resized after construction
    slots: Box<[Fingerprint]>,

    /// Number of occupied slots, clamped to `[0, size]`
    filled: usize,
}

impl Bucket {
    /// Creates a bucket with `size` empty slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![Fingerprint::empty(); size].into_boxed_slice(),
            filled: 0,
        }
    }

    /// Places `fingerprint` into the first empty slot.
    ///
    /// Returns `false` and leaves the bucket unmodified when every slot is taken.
    /// Empty fingerprints are never stored.
    pub fn insert(&mut self, fingerprint: &Fingerprint) -> bool {
        if fingerprint.is_empty() {
            return false;
        }

        match self.slots.iter_mut().find(|slot| slot.is_empty()) {
            Some(slot) => {
                *slot = *fingerprint;
                self.filled = (self.filled + 1).min(self.slots.len());
                true
            }
            None => false,
        }
    }

    /// Removes the first slot whose value equals `fingerprint`'s value.
    ///
    /// Returns the removed fingerprint, or `None` if nothing matched.
    pub fn remove(&mut self, fingerprint: &Fingerprint) -> Option<Fingerprint> {
        let slot = self.slots.iter_mut().find(|slot| slot.matches(fingerprint))?;
        let removed = slot.clear();
        self.filled = self.filled.saturating_sub(1);
        Some(removed)
    }

    /// Writes `fingerprint` into a slot chosen uniformly among all slots and
    /// returns the previous occupant, which may be empty.
    ///
    /// The occupancy count is left as is. The kick loop only swaps into full
    /// buckets, where the count cannot change.
    pub fn random_swap<R: Rng + ?Sized>(&mut self, fingerprint: Fingerprint, rng: &mut R) -> Fingerprint {
        let index = rng.gen_range(0..self.slots.len());
        std::mem::replace(&mut self.slots[index], fingerprint)
    }

    /// Whether any slot holds `fingerprint`'s value.
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.slots.iter().any(|slot| slot.matches(fingerprint))
    }

    /// Empties every slot.
    pub fn clear_all(&mut self) {
        self.slots.iter_mut().for_each(|slot| {
            slot.clear();
        });
        self.filled = 0;
    }

    /// Whether at least one slot is free.
    #[inline]
    pub fn has_space(&self) -> bool {
        self.filled < self.slots.len()
    }

    /// Whether no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Number of slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots as tracked by the counter.
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Number of non-empty slots, counted by scanning.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Read-only view of the slots.
    pub fn slots(&self) -> &[Fingerprint] {
        &self.slots
    }
}
