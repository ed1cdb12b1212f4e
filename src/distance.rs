use crate::point::Point;
use wide::i64x4;

/// Number of centroids evaluated per vector step.
pub const LANES: usize = 4;

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> i64 {
    debug_assert!(a.in_range() && b.in_range());
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// Squared distances from `point` to every centroid, index-aligned.
pub fn squared_distances<const K: usize>(point: Point, centroids: &[Point; K]) -> [i64; K] {
    let mut distances = [0i64; K];
    for (dist, &centroid) in distances.iter_mut().zip(centroids.iter()) {
        *dist = squared_distance(point, centroid);
    }
    distances
}

/// SIMD version of [`squared_distances`], `LANES` centroids at a time.
///
/// The last block is zero-padded when `K` is not a multiple of `LANES`; only
/// the valid prefix of each block is copied out, so padding never reaches the
/// result.
pub fn squared_distances_simd<const K: usize>(point: Point, centroids: &[Point; K]) -> [i64; K] {
    debug_assert!(point.in_range());
    let mut distances = [0i64; K];
    let px = i64x4::splat(point.x as i64);
    let py = i64x4::splat(point.y as i64);

    for (block, out) in centroids.chunks(LANES).zip(distances.chunks_mut(LANES)) {
        let mut xs = [0i64; LANES];
        let mut ys = [0i64; LANES];
        for (lane, centroid) in block.iter().enumerate() {
            xs[lane] = centroid.x as i64;
            ys[lane] = centroid.y as i64;
        }

        let dx = i64x4::new(xs) - px;
        let dy = i64x4::new(ys) - py;
        let lanes = (dx * dx + dy * dy).to_array();

        out.copy_from_slice(&lanes[..block.len()]);
    }

    distances
}

/// Index of the smallest distance. Ties go to the lowest index.
///
/// Panics on an empty slice.
#[inline]
pub fn nearest(distances: &[i64]) -> usize {
    assert!(!distances.is_empty(), "no centroids to choose from");
    let mut best = 0;
    let mut best_dist = distances[0];
    for (i, &dist) in distances.iter().enumerate().skip(1) {
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::MAX_COORDINATE;

    #[test]
    fn scalar_distances() {
        let centroids = [Point::new(0, 0), Point::new(3, 4), Point::new(-1, 1)];
        assert_eq!(squared_distances(Point::new(0, 0), &centroids), [0, 25, 2]);
    }

    #[test]
    fn simd_matches_scalar_on_partial_block() {
        let centroids = [
            Point::new(10, 20),
            Point::new(-5, 7),
            Point::new(1000, -1000),
            Point::new(0, 0),
            Point::new(42, 42),
        ];
        let p = Point::new(3, -9);
        assert_eq!(
            squared_distances_simd(p, &centroids),
            squared_distances(p, &centroids)
        );
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let centroids = [Point::new(-MAX_COORDINATE, -MAX_COORDINATE)];
        let p = Point::new(MAX_COORDINATE, MAX_COORDINATE);
        let expected = 2 * (2 * MAX_COORDINATE as i64).pow(2);
        assert_eq!(squared_distances(p, &centroids), [expected]);
        assert_eq!(squared_distances_simd(p, &centroids), [expected]);
    }

    #[test]
    fn nearest_prefers_first_minimum() {
        assert_eq!(nearest(&[5, 2, 2, 9]), 1);
        assert_eq!(nearest(&[0, 0]), 0);
        assert_eq!(nearest(&[7]), 0);
    }
}
