//! Container implementations under test.
//!
//! Map-like backends overwrite on duplicate keys and report
//! [`ProbeError::KeyNotFound`](crate::error::ProbeError::KeyNotFound) for
//! absent ones. Multi-valued backends append and answer with the first
//! value stored under a key. Sequence backends ignore keys entirely and
//! always answer with their front element; they exist only as a baseline.

mod chained;
mod map;
mod multi;
mod sequence;

pub use {
    chained::ChainedMap,
    map::{StdHashMap, SwissMap, TreeMap},
    multi::{HashMultiMap, MultiMap},
    sequence::{ListStore, QueueStore, VectorStore},
};

use {
    crate::container::{Backend, TimedContainer},
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BackendKind {
    HashMap,
    TreeMap,
    SwissMap,
    ChainedMap,
    MultiMap,
    HashMultiMap,
    Queue,
    List,
    Vector,
}

impl BackendKind {
    //  Default run order
    pub const ALL: [BackendKind; 9] = [
        BackendKind::SwissMap,
        BackendKind::TreeMap,
        BackendKind::HashMap,
        BackendKind::ChainedMap,
        BackendKind::MultiMap,
        BackendKind::HashMultiMap,
        BackendKind::Queue,
        BackendKind::List,
        BackendKind::Vector,
    ];

    //  A fresh, empty instance
    pub fn build(self) -> Box<dyn TimedContainer> {
        match self {
            BackendKind::HashMap => Box::new(StdHashMap::default()),
            BackendKind::TreeMap => Box::new(TreeMap::default()),
            BackendKind::SwissMap => Box::new(SwissMap::default()),
            BackendKind::ChainedMap => Box::new(ChainedMap::default()),
            BackendKind::MultiMap => Box::new(MultiMap::default()),
            BackendKind::HashMultiMap => Box::new(HashMultiMap::default()),
            BackendKind::Queue => Box::new(QueueStore::default()),
            BackendKind::List => Box::new(ListStore::default()),
            BackendKind::Vector => Box::new(VectorStore::default()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackendKind::HashMap => StdHashMap::NAME,
            BackendKind::TreeMap => TreeMap::NAME,
            BackendKind::SwissMap => SwissMap::NAME,
            BackendKind::ChainedMap => ChainedMap::NAME,
            BackendKind::MultiMap => MultiMap::NAME,
            BackendKind::HashMultiMap => HashMultiMap::NAME,
            BackendKind::Queue => QueueStore::NAME,
            BackendKind::List => ListStore::NAME,
            BackendKind::Vector => VectorStore::NAME,
        }
    }

    //  Keyed lookup with overwrite or first-match semantics
    pub fn is_keyed(self) -> bool {
        !self.is_sequence()
    }

    pub fn is_sequence(self) -> bool {
        matches!(
            self,
            BackendKind::Queue | BackendKind::List | BackendKind::Vector
        )
    }

    pub fn is_multi_valued(self) -> bool {
        matches!(self, BackendKind::MultiMap | BackendKind::HashMultiMap)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
