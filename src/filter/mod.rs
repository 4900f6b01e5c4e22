// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Cuckoo filter for approximate set membership.
//!
//! A cuckoo filter answers "is this item possibly in the set?" with no false
//! negatives and a small false positive rate. Unlike a Bloom filter it also
//! supports deleting items.
//!
//! # Layout
//!
//! - [`Fingerprint`]: a 32-bit FNV-1a summary of an item, stored in place of the item.
//! - [`Bucket`]: a fixed number of fingerprint slots.
//! - [`CuckooFilter`]: a power-of-two array of buckets with two candidate
//!   buckets per item and a bounded eviction ("kick") loop.
//!
//! # Example
//!
//! ```
//! use cuckoo_filter_lib::filter::{CuckooFilter, CuckooFilterConfig};
//!
//! let config = CuckooFilterConfig::new()
//!     .with_capacity(4096)
//!     .with_bucket_size(4)
//!     .with_max_kicks(500);
//! let mut filter = CuckooFilter::with_config(config).unwrap();
//!
//! assert!(filter.insert("alpha"));
//! assert!(filter.lookup("alpha"));
//! assert!(filter.delete("alpha"));
//! assert!(!filter.lookup("alpha"));
//! ```
//!
//! # Concurrency
//!
//! Operations take `&mut self` or `&self` and never block. Sharing a filter
//! between threads requires an external lock around the whole filter.

// Module declarations
mod bucket;
mod config;
mod cuckoo;
mod error;
mod fingerprint;
mod hash;

#[cfg(test)]
mod tests;

// Re-exports
pub use bucket::Bucket;
pub use config::{CuckooFilterConfig, DEFAULT_BUCKET_SIZE, DEFAULT_CAPACITY, DEFAULT_MAX_KICKS};
pub use cuckoo::CuckooFilter;
pub use error::{CuckooFilterError, Result};
pub use fingerprint::Fingerprint;
pub use hash::{fnv1a_32, next_power_of_two};
