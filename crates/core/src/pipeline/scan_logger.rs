use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for scan orchestration events.
///
/// Decouples the scan use case from specific output mechanisms so callers can
/// observe progress without changing the orchestration code.
pub trait ScanLogger: Send {
    /// Report file-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one file.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests.
pub struct NullScanLogger;

impl ScanLogger for NullScanLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage timing and reports a summary
/// when the run completes.
pub struct StdoutScanLogger {
    timings: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_files: usize,
    files_done: usize,
}

impl StdoutScanLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_files: 0,
            files_done: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = Vec::new();
        lines.push(format!(
            "Scan summary ({}/{} files, {:.1}s total):",
            self.files_done,
            self.total_files,
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:8.1}ms  total {total_ms:9.0}ms  ({pct:4.1}%)"
            ));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for StdoutScanLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanLogger for StdoutScanLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_files = total;
        self.files_done = current;
        if total > 0 {
            log::info!("Progress: {current}/{total} files");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
