// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the cuckoo filter.
//!
//! A failed insert is not an error: it is reported as `false` by
//! [`CuckooFilter::insert`](super::CuckooFilter::insert).

/// Errors that can occur in cuckoo filter operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CuckooFilterError {
    /// A value was assigned to a fingerprint that already holds one
    #[error("Fingerprint value cannot be changed once set")]
    AlreadySet,

    /// The filter has an invalid configuration
    #[error("Invalid filter configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for cuckoo filter operations
pub type Result<T> = std::result::Result<T, CuckooFilterError>;
