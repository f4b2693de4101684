use {
    crate::{container::Key, dataset::Dataset},
    rand::{rngs::StdRng, Rng, SeedableRng},
    std::ops::Range,
};

//  Payload values of generated load sets
pub const VALUES: Range<i64> = 0..1_000_000_000;

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn randint<R: Rng>(rng: &mut R, range: Range<i64>) -> i64 {
    rng.gen_range(range)
}

//  `n` random payloads at indices `1..=n`
pub fn random_load_set<R: Rng>(rng: &mut R, n: usize) -> Dataset {
    Dataset::from_values((0..n).map(|_| randint(rng, VALUES.clone())).collect())
}

//  `m` probe keys. Hits come from `1..=max_key`; a `miss_ratio` share of the
//  probes is drawn from past `max_key` instead, so keyed backends miss them.
pub fn random_query_set<R: Rng>(rng: &mut R, m: usize, max_key: Key, miss_ratio: f64) -> Dataset {
    let miss_ratio = miss_ratio.max(0.0).min(1.0);
    let max_key = max_key.max(0);
    let misses = (max_key + 1)..(2 * max_key + 2);

    Dataset::from_values(
        (0..m)
            .map(|_| {
                if max_key == 0 || rng.gen_bool(miss_ratio) {
                    randint(rng, misses.clone())
                } else {
                    randint(rng, 1..max_key + 1)
                }
            })
            .collect(),
    )
}
