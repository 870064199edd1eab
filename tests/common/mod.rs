//! Shared test helpers.
//!
//! `RUST_LOG=swapsort=trace cargo test --features tracing` shows the sorter's
//! own events alongside the test output.

#![allow(dead_code)]

use std::sync::Once;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use swapsort::prelude::*;
use tracing_subscriber::EnvFilter;

/// Identity of the free element used throughout the tests.
pub const FREE: u32 = 0;

static INIT: Once = Once::new();

/// Installs a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Returns a seeded random permutation of `0..n`.
pub fn shuffled(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v: Vec<u32> = (0..n as u32).collect();
    v.shuffle(&mut rng);
    v
}

/// Replays `trace` on `initial`, asserting every exchange involves the free
/// element at the recorded position.
pub fn replay(initial: &[u32], trace: &[Exchange]) -> Vec<u32> {
    let mut arr = initial.to_vec();
    for (step, ex) in trace.iter().enumerate() {
        assert_eq!(
            arr[ex.free], FREE,
            "step {step}: exchange {ex} does not involve the free element"
        );
        ex.apply(&mut arr);
    }
    arr
}
