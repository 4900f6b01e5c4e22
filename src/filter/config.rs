// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the cuckoo filter.

use serde::{Deserialize, Serialize};

use crate::filter::error::{CuckooFilterError, Result};
use crate::filter::hash::next_power_of_two;

/// Default number of items the filter is sized for.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Default relocation budget for a single insert.
pub const DEFAULT_MAX_KICKS: usize = 500;

/// Default number of fingerprint slots per bucket.
pub const DEFAULT_BUCKET_SIZE: usize = 4;

/// Configuration for the cuckoo filter.
///
/// Capacity and bucket size are requested values; the filter rounds both up to
/// powers of two when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuckooFilterConfig {
    /// Number of fingerprints the filter should be able to hold
    pub capacity: usize,

    /// Maximum number of evictions during an insert before giving up
    pub max_kicks: usize,

    /// Number of fingerprint slots in each bucket
    pub bucket_size: usize,
}

impl CuckooFilterConfig {
    /// Creates a new configuration with default values.
    ///
    /// Default values:
    /// - capacity: 1024
    /// - max_kicks: 500
    /// - bucket_size: 4
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of kicks tolerated by a single insert.
    pub fn with_max_kicks(mut self, max_kicks: usize) -> Self {
        self.max_kicks = max_kicks;
        self
    }

    /// Sets the requested number of slots per bucket.
    pub fn with_bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Capacity after rounding up to a power of two.
    pub fn total_capacity(&self) -> usize {
        next_power_of_two(self.capacity)
    }

    /// Bucket size after rounding up to a power of two.
    pub fn rounded_bucket_size(&self) -> usize {
        next_power_of_two(self.bucket_size)
    }

    /// Checks that the configuration describes a usable filter.
    ///
    /// A `max_kicks` of zero is accepted: inserts then only ever try the two
    /// candidate buckets.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CuckooFilterError::InvalidConfiguration(
                "capacity must be greater than 0".to_string(),
            ));
        }

        if self.bucket_size == 0 {
            return Err(CuckooFilterError::InvalidConfiguration(
                "bucket_size must be greater than 0".to_string(),
            ));
        }

        if self.rounded_bucket_size() > self.total_capacity() {
            return Err(CuckooFilterError::InvalidConfiguration(format!(
                "bucket_size {} exceeds capacity {}",
                self.rounded_bucket_size(),
                self.total_capacity()
            )));
        }

        Ok(())
    }
}

impl Default for CuckooFilterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_kicks: DEFAULT_MAX_KICKS,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}
