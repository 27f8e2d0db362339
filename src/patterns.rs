//! Deterministic input generators for the tests and benches, i32 only.
//!
//! Every generator draws from one process-wide seed, so a failing test run
//! can be replayed exactly. Benches call [`disable_fixed_seed`] to get a
//! fresh draw per call instead of replaying the same data.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Standard, Uniform};
use rand::prelude::*;

pub fn random(size: usize) -> Vec<i32> {
    rng().sample_iter(Standard).take(size).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    rng().sample_iter(dist).take(size).collect()
}

pub fn random_random_size(max_size: usize) -> Vec<i32> {
    // The length itself is drawn from the seeded rng, anywhere in
    // 0..=max_size.
    let len = random_uniform(1, 0..=max_size as i32)[0] as usize;
    random(len)
}

pub fn all_equal(size: usize) -> Vec<i32> {
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    sawtooth(size, saw_count, |_| Run::Up)
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    sawtooth(size, saw_count, |_| Run::Down)
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    let mut rng = rng();
    sawtooth(size, saw_count, move |_| {
        if rng.gen() {
            Run::Up
        } else {
            Run::Down
        }
    })
}

pub fn saw_mixed_range(size: usize, run_len: std::ops::Range<usize>) -> Vec<i32> {
    // Runs of random direction whose lengths are drawn from `run_len`.
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let mut rng = rng();
    let len_dist = Uniform::from(run_len.start.max(1) as i32..run_len.end as i32);

    let mut start = 0;
    while start < size {
        let end = (start + rng.sample(len_dist) as usize).min(size);
        let dir = if rng.gen() { Run::Up } else { Run::Down };
        sort_run(&mut vals[start..end], dir);
        start = end;
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);

    let (front, back) = vals.split_at_mut(size / 2);
    sort_run(front, Run::Up);
    sort_run(back, Run::Down);

    vals
}

static FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Switches the generators from the replayable process-wide seed to a fresh
/// seed per call. Meant for benches, where replaying the identical "random"
/// input every batch would be measuring one fixed permutation.
pub fn disable_fixed_seed() {
    FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    if FIXED_SEED.load(Ordering::Acquire) {
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

#[derive(Clone, Copy)]
enum Run {
    Up,
    Down,
}

fn sort_run(chunk: &mut [i32], dir: Run) {
    match dir {
        Run::Up => chunk.sort_unstable(),
        Run::Down => chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e)),
    }
}

fn sawtooth(size: usize, saw_count: usize, mut dir: impl FnMut(usize) -> Run) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunk_len = (size / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        sort_run(chunk, dir(i));
    }

    vals
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
