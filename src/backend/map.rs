use {
    crate::{
        container::{Backend, Key, Value},
        error::ProbeError,
    },
    std::collections::{BTreeMap, HashMap},
};

//  std::collections::HashMap, SipHash
#[derive(Debug, Default)]
pub struct StdHashMap(HashMap<Key, Value>);

impl Backend for StdHashMap {
    const NAME: &'static str = "std HashMap";

    fn store(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }
    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.0.get(&key).copied().ok_or(ProbeError::KeyNotFound(key))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

//  std::collections::BTreeMap
#[derive(Debug, Default)]
pub struct TreeMap(BTreeMap<Key, Value>);

impl Backend for TreeMap {
    const NAME: &'static str = "std BTreeMap";

    fn store(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }
    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.0.get(&key).copied().ok_or(ProbeError::KeyNotFound(key))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

//  hashbrown::HashMap, SwissTable with aHash
#[derive(Debug, Default)]
pub struct SwissMap(hashbrown::HashMap<Key, Value>);

impl Backend for SwissMap {
    const NAME: &'static str = "hashbrown HashMap";

    fn store(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }
    fn fetch(&self, key: Key) -> Result<Value, ProbeError> {
        self.0.get(&key).copied().ok_or(ProbeError::KeyNotFound(key))
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}
