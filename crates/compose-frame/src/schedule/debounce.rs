//! Trailing-edge debouncer

use super::DebounceTier;

/// Fires once after events stop arriving for `delay_ms`.
///
/// Every [`poke`](Debouncer::poke) pushes the deadline out; a superseded
/// request simply never fires.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer {
    tier: DebounceTier,
    delay_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debouncer {
    /// Create an idle debouncer
    pub fn new(tier: DebounceTier, delay_ms: f64) -> Self {
        Self {
            tier,
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Tier this debouncer implements
    pub fn tier(&self) -> DebounceTier {
        self.tier
    }

    /// Record an event at `now_ms`
    pub fn poke(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    /// Pending deadline, if any
    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Whether work is pending
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Consume the pending work if its deadline has passed
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Drop pending work
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}
