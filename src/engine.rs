use crate::context::ClusteringContext;
use crate::error::Result;
use crate::kernel::Kernel;
use crate::partition::partition;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::{debug, info};

/// How the assignment phase is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One thread, scalar kernels.
    Serial,
    /// Worker pool, scalar kernels.
    Parallel,
    /// Worker pool, SIMD kernels.
    #[default]
    Vectorized,
}

impl ExecutionMode {
    pub fn kernel(self) -> Kernel {
        match self {
            ExecutionMode::Serial | ExecutionMode::Parallel => Kernel::Scalar,
            ExecutionMode::Vectorized => Kernel::Simd,
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Serial => "serial",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Vectorized => "vectorized",
        };
        f.write_str(name)
    }
}

/// Runs clustering passes over a [`ClusteringContext`].
///
/// Each pass is an assignment phase, where workers append every point to the
/// bucket of its nearest centroid, followed by a sequential update phase that
/// moves each centroid to the mean of its bucket. The parallel modes own a
/// thread pool that is reused across passes.
pub struct ClusteringEngine {
    mode: ExecutionMode,
    workers: usize,
    pool: Option<ThreadPool>,
}

impl ClusteringEngine {
    /// Creates an engine. `workers` is clamped to at least one and ignored in
    /// serial mode.
    pub fn new(mode: ExecutionMode, workers: usize) -> Result<Self> {
        let (workers, pool) = match mode {
            ExecutionMode::Serial => (1, None),
            ExecutionMode::Parallel | ExecutionMode::Vectorized => {
                let workers = workers.max(1);
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("kmeans-worker-{i}"))
                    .build()?;
                (workers, Some(pool))
            }
        };
        Ok(ClusteringEngine {
            mode,
            workers,
            pool,
        })
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `op` on the engine's pool, so rayon work inside it uses the same
    /// threads as the passes. Serial engines run it on the calling thread.
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            None => op(),
            Some(pool) => pool.install(op),
        }
    }

    /// Runs `passes` passes. The result is left in `ctx`.
    pub fn run<const K: usize>(&self, ctx: &mut ClusteringContext<K>, passes: usize) {
        info!(
            mode = %self.mode,
            workers = self.workers,
            points = ctx.points.len(),
            clusters = K,
            passes,
            "starting clustering run"
        );
        for pass in 0..passes {
            let updated = self.run_pass(ctx);
            debug!(
                pass,
                updated,
                sizes = ?ctx.table.sizes(),
                inertia = %ctx.inertia(),
                "pass complete"
            );
        }
        info!(inertia = %ctx.inertia(), "clustering run finished");
    }

    /// One assignment-then-update pass. Returns how many centroids moved to a
    /// new bucket mean.
    pub fn run_pass<const K: usize>(&self, ctx: &mut ClusteringContext<K>) -> usize {
        self.assign_phase(ctx);
        self.update_phase(ctx)
    }

    /// Resets the table and assigns every point to its nearest centroid.
    ///
    /// Returns only after every worker has finished, so the update phase never
    /// races a late reader of the centroids.
    pub fn assign_phase<const K: usize>(&self, ctx: &mut ClusteringContext<K>) {
        ctx.table.reset();

        let ranges = partition(ctx.points.len(), self.workers);
        let kernel = self.mode.kernel();
        let points = &ctx.points;
        let centroids = &ctx.centroids;
        let table = &ctx.table;

        let work = |range: Range<usize>| {
            for &point in &points[range] {
                table.assign(point, centroids, kernel);
            }
        };

        match &self.pool {
            None => ranges.into_iter().for_each(work),
            Some(pool) => pool.install(|| ranges.into_par_iter().for_each(work)),
        }

        debug_assert_eq!(table.len(), points.len(), "points lost during assignment");
    }

    /// Moves each centroid with a non-empty bucket to that bucket's mean.
    /// Centroids of empty buckets stay where they are.
    pub fn update_phase<const K: usize>(&self, ctx: &mut ClusteringContext<K>) -> usize {
        let kernel = self.mode.kernel();
        let ClusteringContext {
            centroids, table, ..
        } = ctx;

        let mut updated = 0;
        let slots = centroids.iter_mut().zip(table.buckets_mut());
        for (cluster, (centroid, bucket)) in slots.enumerate() {
            if bucket.is_empty() {
                debug!(cluster, "empty bucket, centroid left unchanged");
                continue;
            }
            *centroid = kernel.mean(bucket);
            updated += 1;
        }
        updated
    }
}
