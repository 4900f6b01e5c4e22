// Copyright (c) 2025 Cuckoo Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the cuckoo filter public API.

use std::sync::{Arc, Mutex};
use std::thread;

use cuckoo_filter_lib::filter::{
    fnv1a_32, Bucket, CuckooFilter, CuckooFilterConfig, CuckooFilterError, Fingerprint,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn test_filter_basic() {
    let mut filter = CuckooFilter::default();

    assert!(filter.insert("test1"));
    assert!(filter.insert("test2"));

    assert!(filter.lookup("test1"));
    assert!(filter.lookup("test2"));
    assert!(!filter.lookup("test3"));
}

#[test]
fn test_geometry_from_config() {
    let config = CuckooFilterConfig::new()
        .with_capacity(1000)
        .with_bucket_size(3)
        .with_max_kicks(50);
    let filter = CuckooFilter::with_config(config).unwrap();

    assert_eq!(filter.size(), 1024);
    assert_eq!(filter.bucket_size(), 4);
    assert_eq!(filter.num_buckets(), 256);
    assert_eq!(filter.max_kicks(), 50);
    assert!(filter.is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = CuckooFilter::with_config(CuckooFilterConfig::new().with_capacity(0)).unwrap_err();
    assert!(matches!(err, CuckooFilterError::InvalidConfiguration(_)));

    let config = CuckooFilterConfig::new().with_capacity(4).with_bucket_size(16);
    assert!(CuckooFilter::with_config(config).is_err());
}

#[test]
fn test_positional_constructor_coerces_zero() {
    let filter = CuckooFilter::new(0, 0, 0);
    assert_eq!(filter.size(), 1);
    assert_eq!(filter.bucket_size(), 1);
    assert_eq!(filter.num_buckets(), 1);
}

#[test]
fn test_fingerprint_and_hash_agree() {
    let fp = Fingerprint::of("hello world");
    assert_eq!(fp.value(), Some(fnv1a_32(b"hello world")));
    assert_eq!(fp.value(), Some(3582672807));
    assert!(Fingerprint::new(None).is_empty());
}

#[test]
fn test_bucket_public_api() {
    let mut bucket = Bucket::new(2);
    let a = Fingerprint::of("a");
    let b = Fingerprint::of("b");

    assert!(bucket.insert(&a));
    assert!(bucket.insert(&b));
    assert!(!bucket.insert(&Fingerprint::of("c")));
    assert!(!bucket.has_space());

    assert_eq!(bucket.remove(&a), Some(a));
    assert_eq!(bucket.remove(&a), None);
    assert_eq!(bucket.filled(), 1);
}

#[test]
fn test_seeded_filters_behave_identically() {
    let config = CuckooFilterConfig::new().with_capacity(64).with_bucket_size(2);
    let mut first = CuckooFilter::with_config_and_rng(config.clone(), ChaChaRng::seed_from_u64(3)).unwrap();
    let mut second = CuckooFilter::with_config_and_rng(config, ChaChaRng::seed_from_u64(3)).unwrap();

    for i in 0..80 {
        let item = format!("item{i}");
        assert_eq!(first.insert(&item), second.insert(&item));
    }
    assert_eq!(first.filled(), second.filled());
    let first_slots: Vec<_> = first.buckets().iter().map(|b| b.slots().to_vec()).collect();
    let second_slots: Vec<_> = second.buckets().iter().map(|b| b.slots().to_vec()).collect();
    assert_eq!(first_slots, second_slots);
}

#[test]
fn test_clear_resets_filter() {
    let mut filter = CuckooFilter::new(128, 100, 4);
    for i in 0..50 {
        assert!(filter.insert(&format!("v{i}")));
    }

    filter.clear();
    assert_eq!(filter.filled(), 0);
    assert_eq!(filter.occupied_slots(), 0);
    assert!(!filter.lookup("v0"));
    assert!(filter.insert("v0"));
}

#[test]
fn test_shared_behind_mutex() {
    let filter = Arc::new(Mutex::new(CuckooFilter::new(8192, 500, 4)));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                for i in 0..500 {
                    let item = format!("t{t}-{i}");
                    assert!(filter.lock().unwrap().insert(&item));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let filter = filter.lock().unwrap();
    assert_eq!(filter.filled(), 2000);
    for t in 0..4 {
        for i in 0..500 {
            assert!(filter.lookup(&format!("t{t}-{i}")));
        }
    }
}
