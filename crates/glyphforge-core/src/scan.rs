//! Clipping detection.
//!
//! A scan walks every glyph of a font in batches, yielding to the runtime
//! between batches so a newer scan can cancel it. Only a scan that runs to
//! completion publishes its result.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tracing::{debug, info};

use crate::blocks::FilterMode;
use crate::font::{GlyphRecord, OutlineSource};
use crate::layout::GlyphLayout;
use crate::settings::{GlyphSettings, SettingsModel};

/// Pixels a glyph may exceed the canvas by before it counts as clipped.
pub const DEFAULT_TOLERANCE: f64 = 0.1;
/// Glyphs checked between cancellation points.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
/// Quiet period before a scheduled scan starts.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Whether a glyph's rendered outline leaves its canvas.
///
/// Unencoded glyphs are never reported in [`FilterMode::Unicode`], and
/// glyphs without an outline never clip.
pub fn is_clipped(
    record: &GlyphRecord,
    source: &dyn OutlineSource,
    settings: &GlyphSettings,
    mode: FilterMode,
    tolerance: f64,
) -> bool {
    if !mode.includes(record) {
        return false;
    }
    let Some(outline) = source.outline(record.index) else {
        return false;
    };
    GlyphLayout::compute(&outline, source.metrics(), settings)
        .is_some_and(|layout| layout.is_clipped(settings, tolerance))
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Indices of every clipped glyph
    Completed(BTreeSet<u16>),
    Cancelled,
}

/// Progress, cancellation and result of one background scan.
#[derive(Debug, Default)]
pub struct ScanJob {
    progress: AtomicUsize,
    cancelled: AtomicBool,
    done: AtomicBool,
    result: RwLock<Option<BTreeSet<u16>>>,
    finished: Notify,
}

impl ScanJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion percentage, 0 to 100.
    pub fn progress(&self) -> usize {
        self.progress.load(Ordering::SeqCst)
    }

    pub fn set_progress(&self, percent: usize) {
        self.progress.store(percent.min(100), Ordering::SeqCst);
    }

    /// Ask the scan to stop at its next batch boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether the scan has stopped, either completed or cancelled.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    /// Record the outcome and wake waiters.
    pub async fn finish(&self, outcome: ScanOutcome) {
        if let ScanOutcome::Completed(errors) = outcome {
            *self.result.write().await = Some(errors);
        }
        self.done.store(true, Ordering::SeqCst);
        self.finished.notify_waiters();
    }

    /// Clipped glyphs of a completed scan; `None` while running or when cancelled.
    pub async fn result(&self) -> Option<BTreeSet<u16>> {
        self.result.read().await.clone()
    }

    /// Wait until the scan stops.
    pub async fn wait(&self) {
        loop {
            let notified = self.finished.notified();
            if self.is_done() {
                return;
            }
            notified.await;
        }
    }
}

/// Batched, cancellable clipping scanner.
#[derive(Debug, Clone, Copy)]
pub struct ClipScanner {
    pub batch_size: usize,
    pub tolerance: f64,
}

impl Default for ClipScanner {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ClipScanner {
    pub fn new(batch_size: usize, tolerance: f64) -> Self {
        Self {
            batch_size: batch_size.max(1),
            tolerance,
        }
    }

    /// Check every glyph against its effective settings.
    ///
    /// Cancellation is checked before each batch and progress is reported
    /// to `job` after each one.
    pub async fn scan(
        &self,
        source: &dyn OutlineSource,
        glyphs: &[GlyphRecord],
        settings: &SettingsModel,
        mode: FilterMode,
        job: &ScanJob,
    ) -> ScanOutcome {
        let total = glyphs.len();
        let mut errors = BTreeSet::new();
        job.set_progress(0);

        for (batch_num, batch) in glyphs.chunks(self.batch_size.max(1)).enumerate() {
            if job.is_cancelled() {
                debug!("Scan cancelled after {} batches", batch_num);
                return ScanOutcome::Cancelled;
            }

            for record in batch {
                let s = settings.effective(record.index);
                if is_clipped(record, source, s, mode, self.tolerance) {
                    errors.insert(record.index);
                }
            }

            let checked = (batch_num * self.batch_size + batch.len()).min(total);
            job.set_progress(percent(checked, total));
            tokio::task::yield_now().await;
        }

        job.set_progress(100);
        info!("Scan finished: {} of {} glyphs clipped", errors.len(), total);
        ScanOutcome::Completed(errors)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    (done as f64 / total as f64 * 100.0).round() as usize
}

/// Everything a background scan needs, owned.
pub struct ScanRequest {
    pub source: Arc<dyn OutlineSource>,
    pub glyphs: Vec<GlyphRecord>,
    pub settings: SettingsModel,
    pub mode: FilterMode,
}

/// Runs debounced background scans, at most one live at a time.
///
/// Scheduling a scan cancels the previous one, whether it is still
/// waiting out its debounce or already running.
#[derive(Debug)]
pub struct ScanScheduler {
    scanner: ClipScanner,
    debounce: Duration,
    current: Mutex<Option<Arc<ScanJob>>>,
}

impl ScanScheduler {
    pub fn new(scanner: ClipScanner, debounce: Duration) -> Self {
        Self {
            scanner,
            debounce,
            current: Mutex::new(None),
        }
    }

    /// Start a scan after the debounce delay. Must be called inside a tokio runtime.
    pub fn schedule(&self, request: ScanRequest) -> Arc<ScanJob> {
        let job = Arc::new(ScanJob::new());
        {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = current.replace(Arc::clone(&job)) {
                previous.cancel();
            }
        }

        let scanner = self.scanner;
        let debounce = self.debounce;
        let task_job = Arc::clone(&job);
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let outcome = if task_job.is_cancelled() {
                ScanOutcome::Cancelled
            } else {
                scanner
                    .scan(
                        request.source.as_ref(),
                        &request.glyphs,
                        &request.settings,
                        request.mode,
                        &task_job,
                    )
                    .await
            };
            task_job.finish(outcome).await;
        });

        job
    }

    /// Cancel the live scan, if any.
    pub fn cancel(&self) {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(job) = current.as_ref() {
            job.cancel();
        }
    }

    /// The most recently scheduled job.
    pub fn current(&self) -> Option<Arc<ScanJob>> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ScanScheduler {
    fn default() -> Self {
        Self::new(ClipScanner::default(), DEFAULT_DEBOUNCE)
    }
}
