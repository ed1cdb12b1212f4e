use clap::Parser;
use kmeans_engine::generator::{generate_centroids, generate_points};
use kmeans_engine::output::{write_centroids, write_points};
use kmeans_engine::partition::resolve_workers;
use kmeans_engine::{
    ClusteringContext, ClusteringEngine, ExecutionMode, Point, RunConfig, CLUSTER_COUNT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// K-means over a synthetic 2-D integer dataset.
#[derive(Parser)]
#[command(name = "kmeans-engine", version)]
struct Cli {
    /// YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Execution mode
    #[arg(short, long, value_enum)]
    mode: Option<ExecutionMode>,

    /// Number of generated points
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Number of clustering passes
    #[arg(short, long)]
    passes: Option<usize>,

    /// Worker threads (default: hardware parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Run seed (default: time based)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for points.txt and centroids.txt
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "kmeans_engine=debug"
    } else {
        "kmeans_engine=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> kmeans_engine::Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            RunConfig::from_file(path)?
        }
        None => RunConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config = config.with_mode(mode);
    }
    if let Some(points) = cli.points {
        config = config.with_points(points);
    }
    if let Some(passes) = cli.passes {
        config = config.with_passes(passes);
    }
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> kmeans_engine::Result<()> {
    let config = load_config(&cli)?;
    let workers = resolve_workers(config.workers);
    let seed = config.resolved_seed();

    let engine = ClusteringEngine::new(config.mode, workers)?;

    info!(
        points = config.points,
        clusters = CLUSTER_COUNT,
        seed,
        workers,
        "generating dataset"
    );
    // Generation runs on the engine's pool; serial engines have none and use
    // rayon's default one.
    let (points, centroids) = engine.install(|| {
        let centroids: [Point; CLUSTER_COUNT] =
            generate_centroids(config.coordinate_limit, seed, workers);
        let points = generate_points(config.points, config.coordinate_limit, seed, workers);
        (points, centroids)
    });

    let mut ctx = ClusteringContext::new(points, centroids);
    engine.run(&mut ctx, config.passes);

    for (cluster, (centroid, size)) in ctx
        .centroids()
        .iter()
        .zip(ctx.table().sizes())
        .enumerate()
    {
        info!(cluster, centroid = %centroid, size, "final centroid");
    }

    // Attempt both writes even if the first one fails.
    let points_written = write_points(&config.output_dir, ctx.points());
    let centroids_written = write_centroids(&config.output_dir, ctx.centroids());
    points_written?;
    centroids_written?;
    Ok(())
}
