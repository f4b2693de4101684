use {
    anyhow::{Context, Result},
    clap::Parser,
    mapbench::{config::BenchArgs, driver, DatasetFile},
    std::io::{stdout, Write},
    tracing::info,
};

fn main() -> Result<()> {
    mapbench::config::init_tracing();
    let args = BenchArgs::parse();

    //  Both files must open before either is parsed
    let load = DatasetFile::open(&args.load)
        .with_context(|| format!("Failed to open load set {}", args.load.display()))?;
    let queries = DatasetFile::open(&args.query)
        .with_context(|| format!("Failed to open query set {}", args.query.display()))?;

    let load = load
        .parse()
        .with_context(|| format!("Failed to read load set {}", args.load.display()))?;
    let queries = queries
        .parse()
        .with_context(|| format!("Failed to read query set {}", args.query.display()))?;

    let backends = args.backends();
    info!(
        backends = backends.len(),
        records = load.len(),
        queries = queries.len(),
        verify = args.verify(),
        "starting benchmark"
    );

    //  Print each report as soon as its backend finishes
    let out = stdout();
    for kind in backends {
        let result = driver::run_kind(kind, &load, &queries, args.verify());
        let mut out = out.lock();
        write!(out, "{}", result)?;
        out.flush()?;
    }
    Ok(())
}
