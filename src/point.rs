use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest coordinate magnitude for which a squared distance fits in `i64`.
///
/// With `|x| < 2^30` the per-axis difference is below `2^31`, its square below
/// `2^62`, and the sum of both axes below `2^63`.
pub const MAX_COORDINATE: i32 = (1 << 30) - 1;

/// A 2-D integer point. Also used for centroids.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Whether both coordinates are inside `[-MAX_COORDINATE, MAX_COORDINATE]`.
    pub fn in_range(&self) -> bool {
        (-MAX_COORDINATE..=MAX_COORDINATE).contains(&self.x)
            && (-MAX_COORDINATE..=MAX_COORDINATE).contains(&self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Formats as `"<x> <y>"`, the line format of the persisted point files.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_file_format() {
        assert_eq!(Point::new(12, -7).to_string(), "12 -7");
    }

    #[test]
    fn range_check_is_inclusive() {
        assert!(Point::new(MAX_COORDINATE, -MAX_COORDINATE).in_range());
        assert!(!Point::new(MAX_COORDINATE + 1, 0).in_range());
        assert!(!Point::new(0, i32::MIN).in_range());
    }
}
