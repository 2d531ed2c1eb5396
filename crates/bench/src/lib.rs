use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const MEASURE_MS_SMALL: u64 = 120;
const MEASURE_MS_LARGE: u64 = 300;
const MEASURE_MS_XL: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Reversed,
    FewUnique,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Reversed,
    Distribution::FewUnique,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Reversed => "reversed",
            Self::FewUnique => "few_unique",
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 1024 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if size <= 16384 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);

    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Reversed => (0..size as u64).rev().collect(),
        Distribution::FewUnique => (0..size).map(|_| rng.random_range(0..16_u64)).collect(),
    }
}

pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    let d = match dist {
        Distribution::RandomUniform => 11_u64,
        Distribution::NearlySorted1pctSwaps => 12_u64,
        Distribution::Reversed => 13_u64,
        Distribution::FewUnique => 14_u64,
    };

    mix_seed(RNG_SEED ^ (d << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
