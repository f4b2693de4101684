use crate::{
    container::{Backend, Key, Value},
    error::ProbeError,
};

//  Bucket count of a fresh table. Prime, so key strides rarely line up with it.
const INITIAL_BUCKETS: usize = 1_031;

//  Entries per bucket on average before the table grows
const MAX_LOAD: usize = 4;

//  2^64 / golden ratio, for multiplicative hashing
const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

//  Spreads an integer key across the full `u64` range
trait Hashable {
    fn hash(&self) -> u64;
}
impl Hashable for Key {
    fn hash(&self) -> u64 {
        (*self as u64).wrapping_mul(GOLDEN).rotate_left(29)
    }
}

//  Separate chaining: a vector of buckets, each a short vector of entries.
//  Collisions are resolved by a linear scan of the bucket.
#[derive(Debug)]
pub struct ChainedMap {
    buckets: Vec<Vec<(Key, Value)>>,
    len: usize,
}

impl Default for ChainedMap {
    fn default() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }
}

impl ChainedMap {
    //  Build a table with preinitialized buckets
    pub fn with_buckets(count: usize) -> Self {
        ChainedMap {
            buckets: (0..count.max(1)).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn slot(&self, key: Key) -> usize {
        (key.hash() % self.buckets.len() as u64) as usize
    }

    //  Double the bucket count (kept odd) and redistribute every entry
    fn grow(&mut self) {
        let count = self.buckets.len() * 2 + 1;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..count).map(|_| Vec::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let slot = self.slot(key);
            self.buckets[slot].push((key, value));
        }
    }
}

impl Backend for ChainedMap {
    const NAME: &'static str = "chained HashMap";

    fn store(&mut self, key: Key, value: Value) {
        let slot = self.slot(key);
        if let Some(entry) = self.buckets[slot].iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }
        self.buckets[slot].push((key, value));
        self.len += 1;
        if self.len > self.buckets.len() * MAX_LOAD {
            self.grow();
        }
    }

    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.buckets[self.slot(key)]
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or(ProbeError::KeyNotFound(key))
    }

    fn len(&self) -> usize {
        self.len
    }
}
