//! Integer datasets stored as a single JSON object of decimal-string
//! indices to integers: `{"0": 0, "1": 10, "2": 20}`.
//!
//! An object with `N` entries yields the values at `"1"`..`"N-1"`. Index
//! `"0"` is a placeholder and is never read.

use {
    crate::{
        benchmark::Benchmark,
        container::{Key, Value},
        error::{Error, Result},
    },
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        fs::File,
        io::{BufReader, BufWriter, Read, Write},
        path::{Path, PathBuf},
    },
    tracing::{debug, info},
};

//  On-disk shape
#[derive(Deserialize)]
#[serde(transparent)]
struct RawDataset(BTreeMap<String, i64>);

//  A dataset file that has been opened but not parsed yet. Opening every
//  input before parsing any of them surfaces a missing file right away.
#[derive(Debug)]
pub struct DatasetFile {
    path: PathBuf,
    file: File,
}

impl DatasetFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DatasetFile {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(self) -> Result<Dataset> {
        let DatasetFile { path, file } = self;
        let parsed = Benchmark::measure(|| Dataset::from_reader(BufReader::new(file)));
        let dataset = parsed.content?;
        info!(
            path = %path.display(),
            entries = dataset.len(),
            seconds = parsed.elapsed.as_secs_f64(),
            "read JSON dataset"
        );
        Ok(dataset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    //  `values[i]` holds index `i + 1`
    values: Vec<i64>,
}

impl Dataset {
    pub fn from_values(values: Vec<i64>) -> Self {
        Dataset { values }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        DatasetFile::open(path)?.parse()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)
            .map_err(|e| Error::MalformedInput(format!("invalid dataset JSON: {}", e)))?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }

    fn from_raw(raw: RawDataset) -> Result<Self> {
        let RawDataset(mut entries) = raw;
        let size = entries.len();
        if !entries.contains_key("0") {
            debug!(size, "dataset has no \"0\" placeholder; index {} is not read", size);
        }

        let values = (1..size)
            .map(|index| {
                entries.remove(&index.to_string()).ok_or_else(|| {
                    Error::MalformedInput(format!("expected key \"{}\" is absent", index))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Dataset { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    //  Value stored at a 1-based index
    pub fn get(&self, index: Key) -> Option<Value> {
        if index < 1 {
            return None;
        }
        self.values.get((index - 1) as usize).copied()
    }

    //  `(index, value)` in ascending index order
    pub fn entries(&self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| (i as Key + 1, *value))
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    //  The on-disk object, `"0": 0` placeholder included
    pub fn to_json_object(&self) -> serde_json::Value {
        let mut object = serde_json::Map::with_capacity(self.values.len() + 1);
        object.insert("0".to_owned(), 0.into());
        for (index, value) in self.entries() {
            object.insert(index.to_string(), value.into());
        }
        serde_json::Value::Object(object)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.to_json_object())?;
        writer.flush()?;
        Ok(())
    }
}
