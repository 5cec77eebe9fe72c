//! Batch driver: scan the input directory and fan conversions out.

use std::path::Path;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::core::{ConversionOutcome, ThumbnailTask};
use crate::utils::{ThumbResult, ensure_output_dir, list_entries};
use crate::worker::WorkerPool;

/// Drives one full run over an input directory.
pub struct BatchProcessor {
    pool: WorkerPool,
}

impl BatchProcessor {
    pub fn new(pool: WorkerPool) -> Self {
        Self { pool }
    }

    /// Convert every supported file under `input_dir` into `output_dir`.
    ///
    /// Per-file failures are logged and never abort the run; the returned
    /// error covers only the directory-level steps (creating the output
    /// directory, listing the input). Returns once every dispatched
    /// conversion has settled.
    pub async fn run(
        &self,
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> ThumbResult<()> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        ensure_output_dir(output_dir).await?;
        let names = list_entries(input_dir).await?;

        if names.is_empty() {
            info!("No files found in {}", input_dir.display());
            return Ok(());
        }

        debug!(
            "Dispatching {} entries across {} workers",
            names.len(),
            self.pool.worker_count()
        );

        let mut conversions = JoinSet::new();
        for name in names {
            let task = ThumbnailTask::new(input_dir, output_dir, &name);
            let pool = self.pool.clone();
            conversions.spawn(async move {
                let outcome = pool.process(&task).await;
                (task, outcome)
            });
        }

        // Log lines interleave in completion order, not input order.
        while let Some(joined) = conversions.join_next().await {
            match joined {
                Ok((task, Ok(ConversionOutcome::Converted { elapsed_ms }))) => {
                    info!(
                        "Processed {} [{}]: {:.2} ms",
                        task.kind.label(),
                        task.file_name,
                        elapsed_ms
                    );
                }
                Ok((task, Ok(ConversionOutcome::Skipped))) => {
                    info!("Skipping unsupported file: {}", task.file_name);
                }
                Ok((task, Err(e))) => {
                    warn!("Error processing [{}]: {}", task.file_name, e);
                }
                Err(e) => {
                    warn!("Conversion task did not complete: {e}");
                }
            }
        }

        Ok(())
    }
}
