//! Test modules for the cuckoo filter crate.
//!
//! This module contains crate-level test suites:
//! - Configuration loading and validation
//! - Error wrapping and reporting
//! - End-to-end filter scenarios
//! - Shared fixtures and proptest strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{item_strategy, items, TestFixture};
