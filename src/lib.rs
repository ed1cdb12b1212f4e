//! Fixed-K k-means over 2-D integer points.
//!
//! A run owns a [`ClusteringContext`] (points, centroids, assignment table) and
//! drives it through a fixed number of passes with a [`ClusteringEngine`] in
//! one of three modes: serial, parallel (scalar kernels on a worker pool) or
//! vectorized (SIMD kernels on a worker pool). All modes produce the same
//! centroids for the same input.
//!
//! ```rust
//! use kmeans_engine::{ClusteringContext, ClusteringEngine, ExecutionMode, Point};
//!
//! let points = vec![
//!     Point::new(0, 0),
//!     Point::new(1, 1),
//!     Point::new(100, 100),
//!     Point::new(101, 101),
//! ];
//! let mut ctx = ClusteringContext::new(points, [Point::new(0, 0), Point::new(90, 90)]);
//!
//! let engine = ClusteringEngine::new(ExecutionMode::Vectorized, 2).unwrap();
//! engine.run(&mut ctx, 3);
//! assert_eq!(ctx.centroids(), &[Point::new(0, 0), Point::new(100, 100)]);
//! ```

pub mod assignment;
pub mod config;
pub mod context;
pub mod distance;
pub mod engine;
pub mod error;
pub mod generator;
pub mod kernel;
pub mod mean;
pub mod output;
pub mod partition;
pub mod point;

pub use assignment::AssignmentTable;
pub use config::RunConfig;
pub use context::ClusteringContext;
pub use engine::{ClusteringEngine, ExecutionMode};
pub use error::{Error, Result};
pub use kernel::Kernel;
pub use point::Point;

/// Cluster count of the command-line run.
pub const CLUSTER_COUNT: usize = 5;
