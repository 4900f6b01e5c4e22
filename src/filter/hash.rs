// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing utilities for the cuckoo filter.
//!
//! Everything placed in the table is derived from a single 32-bit FNV-1a hash:
//! item fingerprints, primary bucket indices and the XOR partner used to find a
//! fingerprint's alternate bucket. The function is fixed so that fingerprints are
//! reproducible across processes for the same byte representation.

/// FNV-1a 32-bit offset basis (2166136261).
const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime (16777619).
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1a hash of `bytes`.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Hashes a fingerprint value for alternate index computation.
///
/// The value is hashed through its little-endian byte representation.
#[inline]
pub fn hash_fingerprint(value: u32) -> u32 {
    fnv1a_32(&value.to_le_bytes())
}

/// Rounds `n` up to a power of two.
///
/// Powers of two are returned unchanged and zero is floored to 1, so the result
/// can always be turned into a bit mask with `n - 1`.
pub fn next_power_of_two(n: usize) -> usize {
    if n & n.wrapping_sub(1) == 0 {
        n.max(1)
    } else {
        n.next_power_of_two()
    }
}
