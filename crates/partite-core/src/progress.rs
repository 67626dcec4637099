//! Progress reporting for long scans.
//!
//! [`Progress`] wraps an iterator and emits `tracing` events every `every`
//! items. It forwards items untouched, so wrapping a scan never changes its
//! order or values.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default number of items between two progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Progress reporting knobs shared by every long-running scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Number of items between progress events; `0` disables reporting.
    #[serde(default = "default_every")]
    pub every: u64,
}

fn default_every() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            every: default_every(),
        }
    }
}

impl ProgressConfig {
    /// Configuration that never emits progress events.
    pub const fn silent() -> Self {
        Self { every: 0 }
    }
}

/// Iterator adapter reporting how far a scan has progressed.
#[derive(Debug, Clone)]
pub struct Progress<I> {
    inner: I,
    label: &'static str,
    every: u64,
    total: Option<u64>,
    seen: u64,
    finished: bool,
}

impl<I: Iterator> Iterator for Progress<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(item) => {
                self.seen += 1;
                if self.every > 0 && self.seen % self.every == 0 {
                    debug!(
                        target: "partite::progress",
                        label = self.label,
                        seen = self.seen,
                        total = ?self.total,
                        "scan progress"
                    );
                }
                Some(item)
            }
            None => {
                if !self.finished {
                    self.finished = true;
                    trace!(
                        target: "partite::progress",
                        label = self.label,
                        seen = self.seen,
                        "scan finished"
                    );
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait attaching progress reporting to any iterator.
pub trait ProgressExt: Iterator + Sized {
    /// Wraps the iterator with progress events labelled `label`.
    fn progress(self, label: &'static str, config: ProgressConfig) -> Progress<Self> {
        let total = match self.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper as u64),
            _ => None,
        };
        Progress {
            inner: self,
            label,
            every: config.every,
            total,
            seen: 0,
            finished: false,
        }
    }
}

impl<I: Iterator> ProgressExt for I {}
