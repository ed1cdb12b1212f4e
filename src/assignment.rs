use crate::distance::nearest;
use crate::kernel::Kernel;
use crate::point::Point;
use parking_lot::{Mutex, MutexGuard};

/// `K` buckets of points, one per centroid, each behind its own lock.
///
/// Workers append concurrently through [`AssignmentTable::assign`]; appends to
/// different buckets never contend. Readers through `&self` take the bucket's
/// lock; `reset` and the `_mut` accessors take `&mut self` and skip it.
#[derive(Debug)]
pub struct AssignmentTable<const K: usize> {
    buckets: [Mutex<Vec<Point>>; K],
}

impl<const K: usize> AssignmentTable<K> {
    pub fn new() -> Self {
        AssignmentTable {
            buckets: std::array::from_fn(|_| Mutex::new(Vec::new())),
        }
    }

    /// Appends `point` to the bucket of its nearest centroid and returns that
    /// bucket's index. Distances are computed before taking the lock.
    pub fn assign(&self, point: Point, centroids: &[Point; K], kernel: Kernel) -> usize {
        let distances = kernel.distances(point, centroids);
        let cluster = nearest(&distances);
        self.buckets[cluster].lock().push(point);
        cluster
    }

    /// Empties every bucket, keeping allocations.
    pub fn reset(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.get_mut().clear();
        }
    }

    /// Locks and returns one bucket for reading.
    pub fn bucket(&self, cluster: usize) -> MutexGuard<'_, Vec<Point>> {
        self.buckets[cluster].lock()
    }

    /// Copies of every bucket, in cluster order.
    pub fn snapshot(&self) -> [Vec<Point>; K] {
        std::array::from_fn(|k| self.buckets[k].lock().clone())
    }

    pub fn bucket_mut(&mut self, cluster: usize) -> &[Point] {
        self.buckets[cluster].get_mut()
    }

    pub fn buckets_mut(&mut self) -> impl Iterator<Item = &[Point]> + '_ {
        self.buckets.iter_mut().map(|b| b.get_mut().as_slice())
    }

    /// Number of points in each bucket.
    pub fn sizes(&self) -> [usize; K] {
        std::array::from_fn(|k| self.buckets[k].lock().len())
    }

    /// Total number of assigned points.
    pub fn len(&self) -> usize {
        self.sizes().iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_buckets(self) -> [Vec<Point>; K] {
        self.buckets.map(|bucket| bucket.into_inner())
    }
}

impl<const K: usize> Default for AssignmentTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
