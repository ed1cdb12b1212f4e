use crate::partition::partition;
use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

// Keeps the centroid stream apart from the point stream for the same run seed.
const CENTROID_STREAM: u64 = 0xC3A5_C85C_97CB_3127;

/// Seed for one generation worker, derived from the run seed.
pub fn worker_seed(run_seed: u64, worker: usize) -> u64 {
    run_seed ^ (worker as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Generates `count` points with coordinates in `[0, coordinate_limit)`.
///
/// The index range is split across `workers`; each worker fills its chunk from
/// its own seeded generator. Output is deterministic for a given
/// `(seed, workers)`.
pub fn generate_points(
    count: usize,
    coordinate_limit: i32,
    seed: u64,
    workers: usize,
) -> Vec<Point> {
    generate(count, coordinate_limit, seed, workers)
}

/// Generates `K` centroids from independent random draws (not sampled from
/// the points).
pub fn generate_centroids<const K: usize>(
    coordinate_limit: i32,
    seed: u64,
    workers: usize,
) -> [Point; K] {
    let drawn = generate(K, coordinate_limit, seed ^ CENTROID_STREAM, workers);
    std::array::from_fn(|k| drawn[k])
}

fn generate(count: usize, coordinate_limit: i32, seed: u64, workers: usize) -> Vec<Point> {
    assert!(coordinate_limit > 0, "coordinate limit must be positive");
    let chunks: Vec<Vec<Point>> = partition(count, workers)
        .into_par_iter()
        .enumerate()
        .map(|(worker, range)| {
            let mut rng = StdRng::seed_from_u64(worker_seed(seed, worker));
            range
                .map(|_| {
                    Point::new(
                        rng.gen_range(0..coordinate_limit),
                        rng.gen_range(0..coordinate_limit),
                    )
                })
                .collect()
        })
        .collect();

    let points = chunks.concat();
    debug!(count = points.len(), workers, "generated points");
    points
}
