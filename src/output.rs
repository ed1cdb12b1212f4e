use crate::error::Result;
use crate::point::Point;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const POINTS_FILE: &str = "points.txt";
pub const CENTROIDS_FILE: &str = "centroids.txt";

const POINTS_HEADER: &str = "Dataset:";
const CENTROIDS_HEADER: &str = "Centroids:";

/// Writes `points` as one `"<x> <y>"` line each, after a header line.
pub fn write_point_file(path: &Path, header: &str, points: &[Point]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{header}")?;
    for point in points {
        writeln!(writer, "{point}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `points.txt` into `dir`, creating the directory if needed.
pub fn write_points(dir: &Path, points: &[Point]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(POINTS_FILE);
    write_point_file(&path, POINTS_HEADER, points)?;
    info!(path = %path.display(), count = points.len(), "dataset points written");
    Ok(path)
}

/// Writes `centroids.txt` into `dir`, creating the directory if needed.
pub fn write_centroids(dir: &Path, centroids: &[Point]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(CENTROIDS_FILE);
    write_point_file(&path, CENTROIDS_HEADER, centroids)?;
    info!(path = %path.display(), count = centroids.len(), "centroids written");
    Ok(path)
}

/// Reads a point file. Blank lines, header lines and lines that are not two
/// integers are skipped.
///
/// A pair outside `±MAX_COORDINATE` is an `InvalidData` error, since it could
/// not be clustered without overflowing the distance arithmetic.
pub fn read_point_file(path: &Path) -> Result<Vec<Point>> {
    let reader = BufReader::new(File::open(path)?);
    let mut points = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if let [x, y] = parts.as_slice() {
            if let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) {
                let point = Point::new(x, y);
                if !point.in_range() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line {}: coordinate out of range: {point}", number + 1),
                    )
                    .into());
                }
                points.push(point);
            }
        }
    }
    Ok(points)
}
