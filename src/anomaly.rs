//! Repetition-burst detection over event-code sequences
//!
//! Scans an ordered log of integer event codes (e.g., syscall identifiers)
//! with a fixed-size sliding window and flags the first window in which at
//! least `threshold` distinct codes each occur more than once. The window
//! frequency map is maintained incrementally: the entering code is counted
//! before the code falling out of the window is discounted, and a window is
//! only evaluated once it has reached full size.

use std::collections::HashMap;
use thiserror::Error;

/// Errors from burst-detector construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnomalyError {
    #[error("window size must be at least 1 (got {0})")]
    InvalidWindow(usize),
}

/// Result type for burst-detector operations
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// A detected repetition burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    /// 0-based index of the last event of the triggering window
    pub position: usize,
    /// Distinct codes repeated within that window
    pub repeated_codes: usize,
}

/// Fixed-window repetition-burst detector.
///
/// Holds validated scan parameters; each call to [`scan`](Self::scan) owns
/// its working state, so one detector may serve any number of independent
/// scans.
///
/// # Example
/// ```
/// use escudo::anomaly::BurstDetector;
///
/// let detector = BurstDetector::new(2, 1).unwrap();
/// assert!(detector.detect(&[5, 5, 5]));
/// assert!(!detector.detect(&[1, 2, 3]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BurstDetector {
    window: usize,
    threshold: usize,
}

impl BurstDetector {
    /// Create a detector for windows of `window` events flagging `threshold`
    /// repeated codes.
    ///
    /// A zero window is a precondition violation and is rejected here rather
    /// than producing a scan that can never be meaningful.
    pub fn new(window: usize, threshold: usize) -> Result<Self> {
        if window == 0 {
            return Err(AnomalyError::InvalidWindow(window));
        }
        Ok(Self { window, threshold })
    }

    /// Window size this detector was built with.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Repetition threshold this detector was built with.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Scan `events` and return the first repetition burst, if any.
    ///
    /// For each position the entering code is counted; once the window is
    /// overfull the code at `position - window` is discounted; once the
    /// window has filled (`position >= window - 1`) the number of codes with
    /// count > 1 is compared against the threshold. The scan short-circuits
    /// at the first hit.
    ///
    /// Sequences shorter than the window never fill it, so no position is
    /// evaluated and the scan reports nothing. A threshold of 0 degenerates
    /// to triggering at the first evaluated position, index `window - 1`,
    /// whenever the sequence reaches it.
    pub fn scan(&self, events: &[i64]) -> Option<Burst> {
        let k = self.window;
        let mut freq: HashMap<i64, usize> = HashMap::new();

        for (i, &code) in events.iter().enumerate() {
            *freq.entry(code).or_insert(0) += 1;

            // The evicted code entered the window k steps ago, so its count
            // is at least 1 here. Entries may drop to zero but are kept; a
            // zero count never reads as repeated.
            if i >= k {
                if let Some(count) = freq.get_mut(&events[i - k]) {
                    *count -= 1;
                }
            }

            if i + 1 >= k {
                let repeated = freq.values().filter(|&&count| count > 1).count();
                if repeated >= self.threshold {
                    tracing::debug!(position = i, repeated, "repetition burst");
                    return Some(Burst {
                        position: i,
                        repeated_codes: repeated,
                    });
                }
            }
        }

        None
    }

    /// Boolean view of [`scan`](Self::scan).
    pub fn detect(&self, events: &[i64]) -> bool {
        self.scan(events).is_some()
    }
}
