use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Set this to a previously printed seed to replay a failing run.
pub const SEED_ENV_VAR: &str = "OVERRIDE_SEED";

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var(SEED_ENV_VAR)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());

    // Always report the seed before anything else, so crashes can be reproduced.
    eprintln!("Seed: {seed}");

    seed
});

/// Returns the seed shared by all patterns for the lifetime of the process.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn ascending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let saw_len = saw_len.max(1);
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn descending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let saw_len = saw_len.max(1);
    (0..len)
        .map(|i| (saw_len - 1 - (i % saw_len)) as i32)
        .collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..len)
        .map(|i| (if i < half { i } else { len - 1 - i }) as i32)
        .collect()
}
