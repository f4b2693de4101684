//! Runs one backend, or a list of backends, through a load set and a
//! query set.
//!
//! Backends run one at a time: each is built fresh, loaded once in
//! ascending key order, probed once per query, and dropped before the next
//! one is built.

use {
    crate::{
        backend::BackendKind,
        benchmark::{Duration, Stopwatch},
        container::TimedContainer,
        dataset::Dataset,
        report::{BenchmarkResult, ProbeFailure},
    },
    tracing::{debug, info, info_span, warn},
};

pub fn run_backend(
    container: &mut dyn TimedContainer,
    load: &Dataset,
    queries: &Dataset,
    verify: bool,
) -> BenchmarkResult {
    let identifier = container.identifier();

    //  Load phase
    let mut insert_total = Duration::ZERO;
    let watch = Stopwatch::start();
    for (key, value) in load.entries() {
        insert_total += container.insert(key, value);
    }
    let load_wall = watch.elapsed();
    debug!(identifier, stored = container.len(), "load phase finished");

    //  Query phase
    let mut lookup_total = Duration::ZERO;
    let mut mismatches = 0;
    let mut failures = Vec::new();
    let watch = Stopwatch::start();
    for (index, key) in queries.entries() {
        match container.lookup(key) {
            Ok(probe) => {
                lookup_total += probe.elapsed;
                if verify {
                    match load.get(key) {
                        Some(expected) if expected == probe.content => (),
                        Some(expected) => {
                            warn!(
                                identifier,
                                key,
                                "the value is incorrect: {} != {}",
                                probe.content,
                                expected
                            );
                            mismatches += 1;
                        }
                        None => {
                            warn!(
                                identifier,
                                key,
                                value = probe.content,
                                "value returned for a key the load set does not contain"
                            );
                            mismatches += 1;
                        }
                    }
                }
            }
            Err(error) => {
                debug!(identifier, index, key, %error, "lookup failed");
                failures.push(ProbeFailure { index, key, error });
            }
        }
    }
    let query_wall = watch.elapsed();

    BenchmarkResult {
        identifier,
        inserts: load.len(),
        lookups: queries.len(),
        load_wall,
        query_wall,
        insert_total,
        lookup_total,
        mismatches: if verify { Some(mismatches) } else { None },
        failures,
    }
}

//  Build a fresh backend, run it to completion, drop it
pub fn run_kind(
    kind: BackendKind,
    load: &Dataset,
    queries: &Dataset,
    verify: bool,
) -> BenchmarkResult {
    let _span = info_span!("backend", name = kind.name()).entered();
    let mut container = kind.build();
    let result = run_backend(&mut *container, load, queries, verify);
    info!(
        inserts = result.inserts,
        lookups = result.lookups,
        failures = result.failures.len(),
        "backend finished"
    );
    result
}

pub fn run_all(
    kinds: &[BackendKind],
    load: &Dataset,
    queries: &Dataset,
    verify: bool,
) -> Vec<BenchmarkResult> {
    kinds
        .iter()
        .map(|kind| run_kind(*kind, load, queries, verify))
        .collect()
}
