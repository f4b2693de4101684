//! Command-line surface of both binaries, plus log setup.
//!
//! Logging goes to stderr and honours `RUST_LOG`; without it everything
//! at `info` and above is shown.

use {
    crate::backend::BackendKind,
    clap::Parser,
    std::path::PathBuf,
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Parser)]
#[command(name = "mapbench")]
#[command(about = "Time inserts and lookups of several containers against the same workload")]
#[command(version)]
pub struct BenchArgs {
    /// JSON object of index -> value, inserted in ascending index order
    pub load: PathBuf,

    /// JSON object of index -> key, probed in ascending index order
    pub query: PathBuf,

    /// Backends to run, in order (repeatable; defaults to all of them)
    #[arg(short, long = "backend", value_enum)]
    pub backends: Vec<BackendKind>,

    /// Skip comparing looked-up values against the load set
    #[arg(long)]
    pub no_verify: bool,
}

impl BenchArgs {
    pub fn backends(&self) -> Vec<BackendKind> {
        if self.backends.is_empty() {
            BackendKind::ALL.to_vec()
        } else {
            self.backends.clone()
        }
    }

    pub fn verify(&self) -> bool {
        !self.no_verify
    }
}

#[derive(Debug, Parser)]
#[command(name = "gen-dataset")]
#[command(about = "Write a random load set and query set for mapbench")]
#[command(version)]
pub struct GenArgs {
    /// Number of records in the load set
    #[arg(short, long, default_value = "1000000")]
    pub records: usize,

    /// Number of probes in the query set
    #[arg(short, long, default_value = "1000000")]
    pub queries: usize,

    /// Share of probes aimed at keys outside the load set
    #[arg(long, default_value = "0.0")]
    pub miss_ratio: f64,

    /// Seed for deterministic generation
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Where to write the load set
    #[arg(long, default_value = "input.json")]
    pub load_out: PathBuf,

    /// Where to write the query set
    #[arg(long, default_value = "query.json")]
    pub query_out: PathBuf,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
