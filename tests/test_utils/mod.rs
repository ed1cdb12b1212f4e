use kmeans_engine::distance::squared_distance;
use kmeans_engine::{AssignmentTable, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Points scattered uniformly within `spread` of each center, in center order.
#[allow(dead_code)]
pub fn create_blobs(centers: &[Point], per_center: usize, spread: i32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(centers.len() * per_center);
    for center in centers {
        for _ in 0..per_center {
            points.push(Point::new(
                center.x + rng.gen_range(-spread..=spread),
                center.y + rng.gen_range(-spread..=spread),
            ));
        }
    }
    points
}

/// Deterministic random points with coordinates in `[lo, hi)`.
#[allow(dead_code)]
pub fn create_random_points(n: usize, lo: i32, hi: i32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect()
}

/// Bucket contents sorted, so buckets can be compared as multisets.
#[allow(dead_code)]
pub fn sorted_buckets<const K: usize>(table: &AssignmentTable<K>) -> Vec<Vec<Point>> {
    table
        .snapshot()
        .into_iter()
        .map(|mut bucket| {
            bucket.sort();
            bucket
        })
        .collect()
}

/// Verify that every bucketed point is at least as close to its own centroid
/// as to any other.
#[allow(dead_code)]
pub fn verify_optimal_assignment<const K: usize>(
    table: &AssignmentTable<K>,
    centroids: &[Point; K],
) -> bool {
    for (cluster, bucket) in table.snapshot().iter().enumerate() {
        for &point in bucket {
            let own = squared_distance(point, centroids[cluster]);
            if centroids.iter().any(|&c| squared_distance(point, c) < own) {
                return false;
            }
        }
    }
    true
}

/// Remove a test output directory (or a stray file with its name).
#[allow(dead_code)]
pub fn cleanup_test_dir(dir: &Path) {
    if dir.is_dir() {
        let _ = fs::remove_dir_all(dir);
    } else {
        let _ = fs::remove_file(dir);
    }
}
