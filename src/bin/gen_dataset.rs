use {
    anyhow::{Context, Result},
    clap::Parser,
    mapbench::{
        config::{init_tracing, GenArgs},
        generate::{random_load_set, random_query_set, seeded},
    },
    tracing::info,
};

fn main() -> Result<()> {
    init_tracing();
    let args = GenArgs::parse();
    let mut rng = seeded(args.seed);

    let load = random_load_set(&mut rng, args.records);
    let queries = random_query_set(&mut rng, args.queries, load.len() as i64, args.miss_ratio);

    load.write_to(&args.load_out)
        .with_context(|| format!("Failed to write load set {}", args.load_out.display()))?;
    queries
        .write_to(&args.query_out)
        .with_context(|| format!("Failed to write query set {}", args.query_out.display()))?;

    info!(
        records = load.len(),
        queries = queries.len(),
        seed = args.seed,
        load_out = %args.load_out.display(),
        query_out = %args.query_out.display(),
        "wrote datasets"
    );
    Ok(())
}
