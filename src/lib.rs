//! Micro-benchmark of insert and lookup latency across container backends.
//!
//! Every backend sits behind [`TimedContainer`], which times exactly one
//! store or fetch per call. The [`driver`] feeds each backend the same load
//! set and query set and collects a [`BenchmarkResult`] per backend.

pub mod backend;
pub mod benchmark;
pub mod config;
pub mod container;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod generate;
pub mod report;

pub use {
    backend::BackendKind,
    benchmark::{Benchmark, Stopwatch},
    container::{Backend, Key, TimedContainer, Value},
    dataset::{Dataset, DatasetFile},
    error::{Error, ProbeError},
    report::{BenchmarkResult, ProbeFailure},
};
