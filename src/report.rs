use {
    crate::{
        benchmark::Duration,
        container::Key,
        error::ProbeError,
    },
    std::fmt,
};

//  Failures listed one by one before the report falls back to a count
const LISTED_FAILURES: usize = 5;

//  A lookup that came back with an error instead of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    //  1-based position in the query set
    pub index: Key,
    pub key: Key,
    pub error: ProbeError,
}

//  Aggregate timing of one backend over one load set and one query set
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub identifier: &'static str,
    pub inserts: usize,
    pub lookups: usize,
    //  Wall-to-wall, covering the whole loop
    pub load_wall: Duration,
    pub query_wall: Duration,
    //  Sum of the per-operation durations
    pub insert_total: Duration,
    pub lookup_total: Duration,
    //  `None` when verification was off
    pub mismatches: Option<usize>,
    pub failures: Vec<ProbeFailure>,
}

fn mean(total: Duration, count: usize) -> Duration {
    if count == 0 {
        Duration::ZERO
    } else {
        Duration::from_nanos((total.as_nanos() / count as u128) as u64)
    }
}

impl BenchmarkResult {
    pub fn mean_insert(&self) -> Duration {
        mean(self.insert_total, self.inserts)
    }

    //  Averaged over successful probes only
    pub fn mean_lookup(&self) -> Duration {
        mean(self.lookup_total, self.lookups.saturating_sub(self.failures.len()))
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.mismatches.unwrap_or(0) == 0
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "container <<<<<{}>>>>>>>>>>>>", self.identifier)?;
        writeln!(
            f,
            "Time taken to load the container: {:.6} seconds ({} inserts)",
            self.load_wall.as_secs_f64(),
            self.inserts
        )?;
        writeln!(
            f,
            "Total insert time: {} nanoseconds, {:.9} seconds (mean {} ns)",
            self.insert_total.as_nanos(),
            self.insert_total.as_secs_f64(),
            self.mean_insert().as_nanos()
        )?;
        writeln!(
            f,
            "Time taken to lookup the container: {:.6} seconds ({} lookups)",
            self.query_wall.as_secs_f64(),
            self.lookups
        )?;
        writeln!(
            f,
            "Total lookup time: {} nanoseconds, {:.9} seconds (mean {} ns)",
            self.lookup_total.as_nanos(),
            self.lookup_total.as_secs_f64(),
            self.mean_lookup().as_nanos()
        )?;
        match self.mismatches {
            Some(count) => writeln!(f, "Mismatched values: {}", count)?,
            None => writeln!(f, "Mismatched values: not verified")?,
        }
        writeln!(f, "Failed lookups: {}", self.failures.len())?;
        for failure in self.failures.iter().take(LISTED_FAILURES) {
            writeln!(
                f,
                "  query {} (key {}): {}",
                failure.index, failure.key, failure.error
            )?;
        }
        if self.failures.len() > LISTED_FAILURES {
            writeln!(f, "  ... and {} more", self.failures.len() - LISTED_FAILURES)?;
        }
        Ok(())
    }
}
