//! The timed container contract shared by every backend.
//!
//! A [`Backend`] only knows how to store and fetch. [`TimedContainer`] is
//! what the driver talks to; the blanket implementation below brackets
//! exactly one backend call with the clock, so nothing the driver does
//! (parsing, bookkeeping, verification) is charged to the container.

use {
    crate::{
        benchmark::{Benchmark, Duration},
        error::ProbeError,
    },
    std::fmt,
};

pub type Key = i64;
pub type Value = i64;

//  Untimed storage operations of one container implementation
pub trait Backend {
    const NAME: &'static str;

    //  Insert or overwrite for map-like backends, append for multi-valued
    //  and sequence backends. Never fails.
    fn store(&mut self, key: Key, value: Value);

    //  Map-like backends look the key up. Sequence backends ignore it and
    //  hand back their oldest element.
    fn fetch(&self, key: Key) -> Result<Value, ProbeError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//  Object-safe, timed view of a backend
pub trait TimedContainer {
    fn identifier(&self) -> &'static str;

    //  Wall-clock time of the single underlying store
    fn insert(&mut self, key: Key, value: Value) -> Duration;

    //  The retrieved value together with the time of the single fetch
    fn lookup(&self, key: Key) -> Result<Benchmark<Value>, ProbeError>;

    fn len(&self) -> usize;
}

impl<B: Backend> TimedContainer for B {
    fn identifier(&self) -> &'static str {
        B::NAME
    }

    #[inline]
    fn insert(&mut self, key: Key, value: Value) -> Duration {
        Benchmark::measure(|| self.store(key, value)).elapsed
    }

    #[inline]
    fn lookup(&self, key: Key) -> Result<Benchmark<Value>, ProbeError> {
        Benchmark::measure(|| self.fetch(key)).transpose()
    }

    fn len(&self) -> usize {
        Backend::len(self)
    }
}

impl fmt::Debug for dyn TimedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedContainer")
            .field("identifier", &self.identifier())
            .field("len", &self.len())
            .finish()
    }
}
