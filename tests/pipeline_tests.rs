mod test_utils;

use kmeans_engine::generator::{generate_centroids, generate_points};
use kmeans_engine::output::{
    read_point_file, write_centroids, write_points, CENTROIDS_FILE, POINTS_FILE,
};
use kmeans_engine::{ClusteringContext, ClusteringEngine, Point, RunConfig};
use std::path::Path;
use test_utils::*;

// These tests share the working directory and must run serially.
use serial_test::serial;

const OUTPUT_DIR: &str = "test_output";

fn run_config(config: &RunConfig) -> ClusteringContext<5> {
    config.validate().expect("invalid config");
    let seed = config.resolved_seed();
    let workers = config.workers.unwrap_or(1);

    let centroids: [Point; 5] = generate_centroids(config.coordinate_limit, seed, workers);
    let points = generate_points(config.points, config.coordinate_limit, seed, workers);
    let mut ctx = ClusteringContext::new(points, centroids);

    let engine = ClusteringEngine::new(config.mode, workers).expect("failed to build engine");
    engine.run(&mut ctx, config.passes);
    ctx
}

#[test]
#[serial]
fn test_full_run_writes_readable_files() {
    let dir = Path::new(OUTPUT_DIR);
    cleanup_test_dir(dir);

    let config = RunConfig::default()
        .with_points(500)
        .with_passes(10)
        .with_workers(4)
        .with_seed(99)
        .with_output_dir(OUTPUT_DIR);
    let ctx = run_config(&config);

    let points_path = write_points(&config.output_dir, ctx.points()).expect("write points");
    let centroids_path =
        write_centroids(&config.output_dir, ctx.centroids()).expect("write centroids");
    assert_eq!(points_path, dir.join(POINTS_FILE));
    assert_eq!(centroids_path, dir.join(CENTROIDS_FILE));

    let content = std::fs::read_to_string(&centroids_path).unwrap();
    assert!(content.starts_with("Centroids:\n"));
    assert_eq!(content.lines().count(), 6);

    assert_eq!(read_point_file(&points_path).unwrap(), ctx.points());
    assert_eq!(read_point_file(&centroids_path).unwrap(), ctx.centroids());

    cleanup_test_dir(dir);
}

#[test]
#[serial]
fn test_failed_write_keeps_result() {
    let dir = Path::new(OUTPUT_DIR);
    cleanup_test_dir(dir);

    // A plain file where the output directory should be.
    std::fs::write(dir, b"not a directory").unwrap();

    let config = RunConfig::default()
        .with_points(200)
        .with_passes(3)
        .with_workers(2)
        .with_seed(1)
        .with_output_dir(OUTPUT_DIR);
    let ctx = run_config(&config);
    let before = *ctx.centroids();

    assert!(write_centroids(&config.output_dir, ctx.centroids()).is_err());
    assert_eq!(ctx.centroids(), &before);
    assert_eq!(ctx.points().len(), 200);

    let _ = std::fs::remove_file(dir);
}

#[test]
#[serial]
fn test_config_file_round_trip() {
    let dir = Path::new(OUTPUT_DIR);
    cleanup_test_dir(dir);
    std::fs::create_dir_all(dir).unwrap();

    let path = dir.join("run.yaml");
    std::fs::write(
        &path,
        "points: 300\npasses: 4\nmode: parallel\nworkers: 3\nseed: 12\n",
    )
    .unwrap();

    let config = RunConfig::from_file(&path).expect("config should parse");
    assert_eq!(config.points, 300);
    assert_eq!(config.workers, Some(3));

    // Same seed and worker count generate the same data and result.
    let a = run_config(&config);
    let b = run_config(&config);
    assert_eq!(a.points(), b.points());
    assert_eq!(a.centroids(), b.centroids());

    cleanup_test_dir(dir);
}
