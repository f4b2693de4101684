use {
    crate::{
        container::{Backend, Key, Value},
        error::ProbeError,
    },
    std::collections::{BTreeMap, HashMap},
};

//  Ordered multimap. Values under one key keep insertion order.
#[derive(Debug, Default)]
pub struct MultiMap {
    entries: BTreeMap<Key, Vec<Value>>,
    len: usize,
}

impl Backend for MultiMap {
    const NAME: &'static str = "BTreeMap multimap";

    fn store(&mut self, key: Key, value: Value) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }
    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.entries
            .get(&key)
            .and_then(|values| values.first())
            .copied()
            .ok_or(ProbeError::KeyNotFound(key))
    }
    fn len(&self) -> usize {
        self.len
    }
}

//  Unordered multimap
#[derive(Debug, Default)]
pub struct HashMultiMap {
    entries: HashMap<Key, Vec<Value>>,
    len: usize,
}

impl Backend for HashMultiMap {
    const NAME: &'static str = "HashMap multimap";

    fn store(&mut self, key: Key, value: Value) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }
    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.entries
            .get(&key)
            .and_then(|values| values.first())
            .copied()
            .ok_or(ProbeError::KeyNotFound(key))
    }
    fn len(&self) -> usize {
        self.len
    }
}
