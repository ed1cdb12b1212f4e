use crate::assignment::AssignmentTable;
use crate::distance::squared_distance;
use crate::point::Point;

/// State of one clustering run: the points, the current centroids and the
/// assignment table of the latest pass.
///
/// Points never change after construction. Centroids are only written by the
/// update phase of a pass.
#[derive(Debug)]
pub struct ClusteringContext<const K: usize> {
    pub(crate) points: Vec<Point>,
    pub(crate) centroids: [Point; K],
    pub(crate) table: AssignmentTable<K>,
}

impl<const K: usize> ClusteringContext<K> {
    pub fn new(points: Vec<Point>, centroids: [Point; K]) -> Self {
        assert!(K > 0, "at least one centroid is required");
        assert!(
            points.iter().chain(centroids.iter()).all(Point::in_range),
            "coordinate outside ±MAX_COORDINATE"
        );
        ClusteringContext {
            points,
            centroids,
            table: AssignmentTable::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroids(&self) -> &[Point; K] {
        &self.centroids
    }

    /// Assignment table left by the most recent pass.
    pub fn table(&self) -> &AssignmentTable<K> {
        &self.table
    }

    /// Sum of squared distances from every point to its nearest centroid.
    pub fn inertia(&self) -> i128 {
        self.points
            .iter()
            .map(|&p| {
                self.centroids
                    .iter()
                    .map(|&c| squared_distance(p, c))
                    .min()
                    .unwrap_or(0) as i128
            })
            .sum()
    }
}
