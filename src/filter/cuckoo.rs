// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the cuckoo filter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::filter::bucket::Bucket;
use crate::filter::config::{
    CuckooFilterConfig, DEFAULT_BUCKET_SIZE, DEFAULT_CAPACITY, DEFAULT_MAX_KICKS,
};
use crate::filter::error::Result;
use crate::filter::fingerprint::Fingerprint;
use crate::filter::hash::{fnv1a_32, hash_fingerprint, next_power_of_two};

/// A cuckoo filter for approximate set membership with deletion.
///
/// Every item maps to a fingerprint and two candidate buckets. The second
/// bucket is derived from the first by XOR with the hash of the fingerprint,
/// so a stored fingerprint can always find its partner bucket without the
/// original item. When both candidates are full, a random occupant is kicked
/// to its own partner bucket, up to `max_kicks` times.
///
/// Lookups may return false positives but never false negatives for items that
/// were inserted successfully and not deleted since.
///
/// The filter is not synchronised; wrap it in a lock to share it across threads.
///
/// # Type Parameters
///
/// * `R` - Random source used to pick kick victims.
///
/// # Examples
///
/// ```
/// use cuckoo_filter_lib::filter::CuckooFilter;
///
/// let mut filter = CuckooFilter::new(2000, 500, 8);
/// assert_eq!(filter.size(), 2048);
/// assert_eq!(filter.num_buckets(), 256);
///
/// assert!(filter.insert("hello world"));
/// assert!(filter.lookup("hello world"));
/// assert!(!filter.lookup("hello"));
///
/// assert!(filter.delete("hello world"));
/// assert!(!filter.delete("hello world"));
/// assert_eq!(filter.filled(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CuckooFilter<R: Rng = StdRng> {
    /// Total slot capacity, a power of two
    size: usize,

    /// Maximum number of evictions for a single insert
    max_kicks: usize,

    /// Slots per bucket, a power of two
    bucket_size: usize,

    /// Number of buckets, a power of two
    num_buckets: usize,

    /// Mask applied to hashes to produce bucket indices
    index_mask: usize,

    /// Number of stored fingerprints, clamped to `[0, size]`
    filled: usize,

    /// Bucket storage
    buckets: Vec<Bucket>,

    /// Random source for kick decisions
    rng: R,
}

impl CuckooFilter<StdRng> {
    /// Creates a filter from positional parameters.
    ///
    /// `capacity` and `bucket_width` are rounded up to powers of two, with zero
    /// coerced to 1. A bucket width larger than the capacity is clamped to the
    /// capacity, producing a single bucket.
    pub fn new(capacity: usize, max_kicks: usize, bucket_width: usize) -> Self {
        Self::build(capacity, max_kicks, bucket_width, StdRng::from_entropy())
    }

    /// Creates a filter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CuckooFilterError::InvalidConfiguration`](crate::filter::CuckooFilterError::InvalidConfiguration)
    /// if the configuration does not describe a usable filter.
    pub fn with_config(config: CuckooFilterConfig) -> Result<Self> {
        Self::with_config_and_rng(config, StdRng::from_entropy())
    }
}

impl Default for CuckooFilter<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_MAX_KICKS, DEFAULT_BUCKET_SIZE)
    }
}

impl<R: Rng> CuckooFilter<R> {
    /// Creates a filter from a validated configuration and a caller supplied
    /// random source.
    ///
    /// Useful for reproducible kick sequences in tests and benchmarks.
    pub fn with_config_and_rng(config: CuckooFilterConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(
            config.capacity,
            config.max_kicks,
            config.bucket_size,
            rng,
        ))
    }

    fn build(capacity: usize, max_kicks: usize, bucket_width: usize, rng: R) -> Self {
        let size = next_power_of_two(capacity);
        let bucket_size = next_power_of_two(bucket_width).min(size);

        // Both are powers of two and bucket_size <= size
        assert_eq!(
            size % bucket_size,
            0,
            "capacity {size} is not a multiple of bucket size {bucket_size}"
        );
        let num_buckets = size / bucket_size;

        debug!(
            size,
            bucket_size, num_buckets, max_kicks, "Creating cuckoo filter"
        );

        Self {
            size,
            max_kicks,
            bucket_size,
            num_buckets,
            index_mask: num_buckets - 1,
            filled: 0,
            buckets: (0..num_buckets).map(|_| Bucket::new(bucket_size)).collect(),
            rng,
        }
    }

    /// Inserts an item.
    ///
    /// Returns `false` when neither candidate bucket has room and `max_kicks`
    /// relocations did not free one. A failed insert is not rolled back: the
    /// kicks already performed stay in place and the fingerprint evicted by the
    /// last kick is dropped, which may belong to an earlier item. Occupancy is
    /// unchanged by a failed insert.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> bool {
        let (mut fingerprint, first_index, second_index) = self.locate(item);

        if self.buckets[first_index].insert(&fingerprint)
            || self.buckets[second_index].insert(&fingerprint)
        {
            self.increment_filled();
            return true;
        }

        // A lone bucket is its own partner, kicking would only shuffle it
        if self.num_buckets == 1 {
            return false;
        }

        let mut index = self.kick_start(first_index, second_index);

        for kick in 0..self.max_kicks {
            fingerprint = self.buckets[index].random_swap(fingerprint, &mut self.rng);
            index = self.alt_index(index, fingerprint_value(&fingerprint));

            if self.buckets[index].insert(&fingerprint) {
                trace!(kicks = kick + 1, "Relocated fingerprint after kicks");
                self.increment_filled();
                return true;
            }
        }

        debug!(
            max_kicks = self.max_kicks,
            filled = self.filled,
            "Insert failed, kick budget exhausted"
        );
        false
    }

    /// Returns `true` if the item may be in the filter.
    ///
    /// False positives are possible, false negatives are not.
    pub fn lookup<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        let (fingerprint, first_index, second_index) = self.locate(item);

        self.buckets[first_index].contains(&fingerprint)
            || self.buckets[second_index].contains(&fingerprint)
    }

    /// Deletes one copy of the item's fingerprint.
    ///
    /// Returns `false`, leaving the filter untouched, when neither candidate
    /// bucket holds it. Deleting an item that was never inserted can remove a
    /// colliding item's fingerprint instead.
    pub fn delete<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> bool {
        let (fingerprint, first_index, second_index) = self.locate(item);

        let removed = self.buckets[first_index]
            .remove(&fingerprint)
            .or_else(|| self.buckets[second_index].remove(&fingerprint));

        if removed.is_some() {
            self.decrement_filled();
            true
        } else {
            false
        }
    }

    /// Empties every bucket.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear_all();
        }
        self.filled = 0;
    }

    /// Total slot capacity after power-of-two rounding.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Slots per bucket after power-of-two rounding.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    /// Maximum number of kicks per insert.
    pub fn max_kicks(&self) -> usize {
        self.max_kicks
    }

    /// Number of stored fingerprints.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Whether no fingerprint is stored.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Whether every slot is taken.
    pub fn is_full(&self) -> bool {
        self.filled >= self.size
    }

    /// Fraction of slots in use, between 0.0 and 1.0.
    pub fn load_factor(&self) -> f64 {
        self.filled as f64 / self.size as f64
    }

    /// Number of non-empty slots across all buckets, counted by scanning.
    ///
    /// Always equal to [`filled`](Self::filled); exposed for consistency checks.
    pub fn occupied_slots(&self) -> usize {
        self.buckets.iter().map(Bucket::occupied).sum()
    }

    /// Read-only view of the buckets.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Fingerprint and both candidate bucket indices for an item.
    fn locate<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> (Fingerprint, usize, usize) {
        let fingerprint = Fingerprint::of(item);
        let first_index = self.primary_index(item.as_ref());
        let second_index = self.alt_index(first_index, fingerprint_value(&fingerprint));
        (fingerprint, first_index, second_index)
    }

    /// Primary bucket index of an item.
    pub(crate) fn primary_index(&self, item: &[u8]) -> usize {
        fnv1a_32(item) as usize & self.index_mask
    }

    /// Partner bucket of `index` for a fingerprint value.
    ///
    /// Self-inverse: `alt_index(alt_index(i, f), f) == i` for every in-range `i`.
    pub(crate) fn alt_index(&self, index: usize, fingerprint: u32) -> usize {
        (index ^ hash_fingerprint(fingerprint) as usize) & self.index_mask
    }

    /// Bucket the kick loop starts from, either candidate with equal odds.
    pub(crate) fn kick_start(&mut self, first_index: usize, second_index: usize) -> usize {
        if self.rng.gen::<bool>() {
            first_index
        } else {
            second_index
        }
    }

    fn increment_filled(&mut self) {
        self.filled = (self.filled + 1).min(self.size);
    }

    fn decrement_filled(&mut self) {
        self.filled = self.filled.saturating_sub(1);
    }
}

/// Value of a fingerprint taken from, or about to be placed in, a slot.
///
/// Kicks only touch full buckets, so evicted fingerprints are never empty.
fn fingerprint_value(fingerprint: &Fingerprint) -> u32 {
    fingerprint.value().unwrap_or_default()
}
