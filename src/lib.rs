//! Cuckoo Filter Library
//!
//! A cuckoo filter answers approximate set-membership queries with no false
//! negatives and a small, tunable false positive rate, and unlike a Bloom
//! filter it supports deleting items.
//!
//! The [`filter`] module is the algorithmic core. The remaining modules carry
//! the tooling around it used by the `cuckoo` binary: layered configuration,
//! error types, logging setup and a throughput benchmark.
//!
//! # Example
//!
//! ```
//! use cuckoo_filter_lib::filter::CuckooFilter;
//!
//! let mut filter = CuckooFilter::default();
//! assert!(filter.insert("hello world"));
//! assert!(filter.lookup("hello world"));
//! assert!(filter.delete("hello world"));
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
