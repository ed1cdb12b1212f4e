use crate::distance::{squared_distances, squared_distances_simd};
use crate::mean::{mean, mean_simd};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Selects the scalar or the SIMD implementation of the inner loops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    #[default]
    Scalar,
    Simd,
}

impl Kernel {
    #[inline]
    pub fn distances<const K: usize>(self, point: Point, centroids: &[Point; K]) -> [i64; K] {
        match self {
            Kernel::Scalar => squared_distances(point, centroids),
            Kernel::Simd => squared_distances_simd(point, centroids),
        }
    }

    #[inline]
    pub fn mean(self, points: &[Point]) -> Point {
        match self {
            Kernel::Scalar => mean(points),
            Kernel::Simd => mean_simd(points),
        }
    }
}
