//! Input shapes for testing and benchmarking sorts, all as `i32` values.
//!
//! Random patterns draw from a seed that is fixed for the whole process, so a failing run can be
//! repeated with `OVERRIDE_SEED=<seed>`.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
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

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saws(len, saw_count, |i| directions.get(i).map_or(true, |d| *d == 0))
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Makes every random pattern call draw a fresh seed.
///
/// By default `patterns::random(4)` yields the same values for the whole process, which is what
/// tests want. Benchmarks should call this so repeated runs see different inputs.
pub fn use_random_seed_each_time() {
    let mut state = SEED_STATE.lock().unwrap();
    if state.0 == SeedMode::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    state.0 = SeedMode::RandomEachTime;
}

pub fn random_init_seed() -> u64 {
    let (mode, seed) = *SEED_STATE.lock().unwrap();

    match mode {
        SeedMode::RandomEachTime => thread_rng().gen(),
        SeedMode::OncePerProcess | SeedMode::ExternalOverride => seed,
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedMode {
    RandomEachTime,
    OncePerProcess,
    ExternalOverride,
}

static SEED_STATE: Lazy<Mutex<(SeedMode, u64)>> = Lazy::new(|| {
    let override_seed = env::var("OVERRIDE_SEED")
        .ok()
        .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"));

    Mutex::new(match override_seed {
        Some(seed) => (SeedMode::ExternalOverride, seed),
        None => (SeedMode::OncePerProcess, thread_rng().gen()),
    })
});

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn saws(len: usize, saw_count: usize, mut ascending_at: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if ascending_at(i) {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}
