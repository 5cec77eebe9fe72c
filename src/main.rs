// Batch thumbnail generation over a fixed pair of directories. The run
// itself lives in the library; this entry point wires up logging, the
// total-duration report and the swallow-everything exit behavior.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use thumbgen::processing::BatchProcessor;
use thumbgen::timing::Timer;
use thumbgen::worker::WorkerPool;

/// Fixed source directory; read-only to this program.
const INPUT_DIR: &str = "/app/images";
/// Fixed thumbnail directory; created if missing.
const OUTPUT_DIR: &str = "/app/thumbnails";

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("--- Starting thumbnail generation ---");
    let total = Timer::start();

    let processor = BatchProcessor::new(WorkerPool::new(None));
    if let Err(e) = processor.run(INPUT_DIR, OUTPUT_DIR).await {
        // A failed listing ends the run but not the process: the timing
        // report below still prints and the exit code stays 0.
        error!("An unexpected error occurred: {e}");
    }

    info!("--- Finished in {:.2}s ---", total.elapsed_secs());
}
