//! High-resolution timing for per-file and whole-run reporting.

use std::time::Instant;

/// Wall-clock timer started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds; logged to two decimal places.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1_000.0
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_never_goes_backwards() {
        let timer = Timer::start();
        let first = timer.elapsed_ms();
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn units_are_consistent() {
        let timer = Timer::start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let ms = timer.elapsed_ms();
        let secs = timer.elapsed_secs();
        assert!(ms >= 5.0);
        assert!((ms - secs * 1_000.0).abs() < 10.0);
    }
}
