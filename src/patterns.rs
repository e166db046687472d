//! Provides a set of sorted inputs useful for testing and benchmarking searches.
//! Currently limited to i32 values.
//!
//! All random patterns are derived from one seed per process, printed by the test harness. Set
//! `OVERRIDE_SEED` to replay a run.

use std::env;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use tracing::warn;

// --- Public ---

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::
    let mut rng = new_rng();
    let dist = rand::distributions::Uniform::from(range);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize) -> Vec<i32> {
    //       .:
    //    .:::
    // .:::::
    // Strictly increasing steps are unlikely, duplicates are rare.

    let mut v = random(len);
    v.sort_unstable();
    v
}

pub fn random_sorted_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    //      ..::
    //   ..:::::
    // ::::::::::
    // Narrow ranges produce long runs of equal values.

    let mut v = random_uniform(len, range);
    v.sort_unstable();
    v
}

pub fn random_runs(len: usize, run_count: usize) -> Vec<i32> {
    //        ::::
    //    ::::::::
    // ::::::::::::
    // [--][--][--]
    // `run_count` runs of random length, each holding a single value.

    if len == 0 {
        return Vec::new();
    }

    let run_count = run_count.clamp(1, len);
    let mut rng = new_rng();

    let mut cuts = (0..run_count - 1)
        .map(|_| rng.gen_range(0..=len))
        .collect::<Vec<_>>();
    cuts.push(len);
    cuts.sort_unstable();

    let mut v = Vec::with_capacity(len);
    let mut val = rng.gen_range(-1_000..1_000);
    for cut in cuts {
        v.resize(cut, val);
        val += rng.gen_range(1..100);
    }

    v
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// Benchmarks should call this, tests should not.
pub fn use_random_seed_each_time() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *PER_PROCESS_SEED.get_or_init(|| override_seed().unwrap_or_else(|| thread_rng().gen()))
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);
static PER_PROCESS_SEED: OnceCell<u64> = OnceCell::new();

fn override_seed() -> Option<u64> {
    let val = env::var("OVERRIDE_SEED").ok()?;

    match val.parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!(%val, %err, "ignoring OVERRIDE_SEED");
            None
        }
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
