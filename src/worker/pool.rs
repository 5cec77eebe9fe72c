use std::sync::Arc;
use std::thread;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::core::{ConversionOutcome, ThumbnailTask};
use crate::processing::Converter;
use crate::timing::Timer;
use crate::utils::{FileKind, ThumbError, ThumbResult};

const DEFAULT_WORKERS: usize = 4;

/// Bounds the number of in-flight conversions.
///
/// Every file in the batch is dispatched at once, but a conversion only
/// starts once a permit is free, so an arbitrarily large directory never
/// runs more than `worker_count` conversions at the same time.
#[derive(Clone)]
pub struct WorkerPool {
    converter: Converter,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
}

impl WorkerPool {
    /// Create a pool sized to the host's available parallelism, unless an
    /// explicit worker count is given.
    pub fn new(worker_count: Option<usize>) -> Self {
        let worker_count = worker_count.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(usize::from)
                .unwrap_or(DEFAULT_WORKERS)
        });
        Self {
            converter: Converter::new(),
            semaphore: Arc::new(Semaphore::new(worker_count)),
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run one task under a permit.
    ///
    /// Unsupported files are skipped without taking a permit; successful
    /// conversions report their elapsed wall time. The timer only yields a
    /// measurement on success: a failed conversion propagates its error
    /// before any timing is recorded.
    pub async fn process(&self, task: &ThumbnailTask) -> ThumbResult<ConversionOutcome> {
        if task.kind == FileKind::Unsupported {
            return Ok(ConversionOutcome::Skipped);
        }

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ThumbError::worker(format!("Failed to acquire worker: {e}")))?;
        debug!(
            "Worker acquired - available permits: {}/{}, task: {}",
            self.semaphore.available_permits(),
            self.worker_count,
            task.file_name
        );

        let timer = Timer::start();
        self.converter.convert(task).await?;
        Ok(ConversionOutcome::Converted {
            elapsed_ms: timer.elapsed_ms(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[tokio::test]
    async fn unsupported_tasks_are_skipped_without_output() {
        let pool = WorkerPool::new(Some(1));
        let task = ThumbnailTask::new(Path::new("/in"), Path::new("/out"), "notes.txt");
        let outcome = pool.process(&task).await.unwrap();
        assert!(matches!(outcome, ConversionOutcome::Skipped));
    }

    #[tokio::test]
    async fn missing_source_files_fail_per_task() {
        let dir = tempfile::tempdir().unwrap();
        let pool = WorkerPool::new(Some(1));
        let task = ThumbnailTask::new(dir.path(), dir.path(), "ghost.png");
        assert!(pool.process(&task).await.is_err());
        assert!(!dir.path().join("ghost-thumbnail.png").exists());
    }

    #[test]
    fn explicit_worker_count_wins() {
        assert_eq!(WorkerPool::new(Some(2)).worker_count(), 2);
        assert!(WorkerPool::new(None).worker_count() >= 1);
    }
}
