//  Baseline stores that ignore the key. `fetch` returns the oldest element
//  whatever key is asked for; the report for these backends is only
//  meaningful as a lower bound on container overhead.

use {
    crate::{
        container::{Backend, Key, Value},
        error::ProbeError,
    },
    std::collections::{LinkedList, VecDeque},
};

#[derive(Debug, Default)]
pub struct QueueStore(VecDeque<Value>);

impl Backend for QueueStore {
    const NAME: &'static str = "VecDeque queue";

    fn store(&mut self, _key: Key, value: Value) {
        self.0.push_back(value);
    }
    fn fetch(&self, _key: Key) -> Result<Value, ProbeError> {
        self.0
            .front()
            .copied()
            .ok_or(ProbeError::EmptyContainer(Self::NAME))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Default)]
pub struct ListStore(LinkedList<Value>);

impl Backend for ListStore {
    const NAME: &'static str = "LinkedList";

    fn store(&mut self, _key: Key, value: Value) {
        self.0.push_back(value);
    }
    fn fetch(&self, _key: Key) -> Result<Value, ProbeError> {
        self.0
            .front()
            .copied()
            .ok_or(ProbeError::EmptyContainer(Self::NAME))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Default)]
pub struct VectorStore(Vec<Value>);

impl Backend for VectorStore {
    const NAME: &'static str = "Vec";

    fn store(&mut self, _key: Key, value: Value) {
        self.0.push(value);
    }
    fn fetch(&self, _key: Key) -> Result<Value, ProbeError> {
        self.0
            .first()
            .copied()
            .ok_or(ProbeError::EmptyContainer(Self::NAME))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}
