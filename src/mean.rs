use crate::distance::LANES;
use crate::point::Point;
use wide::i64x4;

/// Coordinate-wise mean with truncating integer division.
///
/// Panics on an empty slice.
pub fn mean(points: &[Point]) -> Point {
    assert!(!points.is_empty(), "mean of an empty bucket");
    let (sum_x, sum_y) = points.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + p.x as i64, sy + p.y as i64)
    });
    divide(sum_x, sum_y, points.len())
}

/// SIMD version of [`mean`].
///
/// Sums `LANES` points per step, reduces the lane accumulators, then adds the
/// tail scalar before dividing.
pub fn mean_simd(points: &[Point]) -> Point {
    assert!(!points.is_empty(), "mean of an empty bucket");
    let mut acc_x = i64x4::splat(0);
    let mut acc_y = i64x4::splat(0);

    let blocks = points.chunks_exact(LANES);
    let tail = blocks.remainder();
    for block in blocks {
        let mut xs = [0i64; LANES];
        let mut ys = [0i64; LANES];
        for (lane, p) in block.iter().enumerate() {
            xs[lane] = p.x as i64;
            ys[lane] = p.y as i64;
        }
        acc_x = acc_x + i64x4::new(xs);
        acc_y = acc_y + i64x4::new(ys);
    }

    let mut sum_x: i64 = acc_x.to_array().iter().sum();
    let mut sum_y: i64 = acc_y.to_array().iter().sum();
    for p in tail {
        sum_x += p.x as i64;
        sum_y += p.y as i64;
    }

    divide(sum_x, sum_y, points.len())
}

#[inline]
fn divide(sum_x: i64, sum_y: i64, count: usize) -> Point {
    let count = count as i64;
    // Mean of i32 values always fits back into i32.
    Point::new((sum_x / count) as i32, (sum_y / count) as i32)
}
