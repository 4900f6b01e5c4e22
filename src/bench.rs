//! Throughput and accuracy measurement for the cuckoo filter.
//!
//! The workload pre-fills a filter with random integers, then times inserts,
//! lookups and deletes of further random integers. Items are hashed through
//! their decimal representation. An exact set of stored items is kept on the
//! side so absent items can be probed to estimate the false positive rate.

use std::time::{Duration, Instant};

use fnv::FnvHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::bench::BenchConfig;
use crate::error::CuckooResult;
use crate::filter::{CuckooFilter, CuckooFilterConfig};

/// Timing for one measured operation kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpStats {
    /// Number of operations performed
    pub operations: usize,

    /// Number of operations that returned `true`
    pub hits: usize,

    /// Wall clock time spent, in seconds
    pub elapsed_secs: f64,

    /// Operations per second
    pub ops_per_sec: f64,
}

impl OpStats {
    fn new(operations: usize, hits: usize, elapsed: Duration) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();
        let ops_per_sec = if elapsed_secs > 0.0 {
            operations as f64 / elapsed_secs
        } else {
            f64::INFINITY
        };
        Self {
            operations,
            hits,
            elapsed_secs,
            ops_per_sec,
        }
    }
}

/// Result of a benchmark run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchReport {
    /// Filter capacity after rounding
    pub size: usize,
    /// Slots per bucket after rounding
    pub bucket_size: usize,
    /// Number of buckets
    pub num_buckets: usize,
    /// Kick budget per insert
    pub max_kicks: usize,
    /// Items accepted during pre-fill
    pub prefill_inserted: usize,
    /// Items rejected during pre-fill
    pub prefill_failed: usize,
    /// Timed inserts
    pub insert: OpStats,
    /// Timed lookups
    pub lookup: OpStats,
    /// Timed deletes
    pub delete: OpStats,
    /// Absent items probed for the false positive estimate
    pub probes: usize,
    /// Probes that were reported present
    pub false_positives: usize,
    /// `false_positives / probes`, 0.0 when nothing was probed
    pub false_positive_rate: f64,
    /// Occupancy at the end of the run
    pub filled: usize,
    /// Load factor at the end of the run
    pub load_factor: f64,
}

/// Runs the benchmark workload against a freshly built filter.
///
/// # Errors
///
/// Fails if the filter configuration is invalid.
pub fn run_benchmark(filter_config: &CuckooFilterConfig, bench: &BenchConfig) -> CuckooResult<BenchReport> {
    let (mut rng, filter_rng) = match bench.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let mut filter = CuckooFilter::with_config_and_rng(filter_config.clone(), filter_rng)?;
    let mut stored: FnvHashSet<u64> = FnvHashSet::default();

    info!(
        size = filter.size(),
        num_buckets = filter.num_buckets(),
        prefill = bench.prefill,
        "Setting up for benchmarking"
    );

    let mut prefill_failed = 0;
    for _ in 0..bench.prefill {
        let value = rng.gen_range(0..bench.universe);
        if filter.insert(&value.to_string()) {
            stored.insert(value);
        } else {
            prefill_failed += 1;
        }
    }
    let prefill_inserted = bench.prefill - prefill_failed;
    debug!(prefill_inserted, prefill_failed, "Pre-fill complete");

    let insert = time_ops(&mut rng, bench, |value| {
        let inserted = filter.insert(&value.to_string());
        if inserted {
            stored.insert(value);
        }
        inserted
    });
    let lookup = time_ops(&mut rng, bench, |value| filter.lookup(&value.to_string()));
    let delete = time_ops(&mut rng, bench, |value| {
        let deleted = filter.delete(&value.to_string());
        if deleted {
            stored.remove(&value);
        }
        deleted
    });

    let mut probes = 0;
    let mut false_positives = 0;
    // Bounded so a tiny universe that is fully stored cannot spin forever
    for _ in 0..bench.probes.saturating_mul(4) {
        if probes == bench.probes {
            break;
        }
        let value = rng.gen_range(0..bench.universe);
        if stored.contains(&value) {
            continue;
        }
        probes += 1;
        if filter.lookup(&value.to_string()) {
            false_positives += 1;
        }
    }
    let false_positive_rate = if probes > 0 {
        false_positives as f64 / probes as f64
    } else {
        0.0
    };

    let report = BenchReport {
        size: filter.size(),
        bucket_size: filter.bucket_size(),
        num_buckets: filter.num_buckets(),
        max_kicks: filter.max_kicks(),
        prefill_inserted,
        prefill_failed,
        insert,
        lookup,
        delete,
        probes,
        false_positives,
        false_positive_rate,
        filled: filter.filled(),
        load_factor: filter.load_factor(),
    };

    info!(
        insert_ops = report.insert.ops_per_sec,
        lookup_ops = report.lookup.ops_per_sec,
        delete_ops = report.delete.ops_per_sec,
        false_positive_rate,
        "Benchmark complete"
    );

    Ok(report)
}

fn time_ops<F>(rng: &mut StdRng, bench: &BenchConfig, mut op: F) -> OpStats
where
    F: FnMut(u64) -> bool,
{
    let values: Vec<u64> = (0..bench.iterations)
        .map(|_| rng.gen_range(0..bench.universe))
        .collect();

    let start = Instant::now();
    let hits = values.into_iter().filter(|&value| op(value)).count();
    OpStats::new(bench.iterations, hits, start.elapsed())
}
