//! Resize trigger policy for one compose frame

use tracing::debug;

use super::{DebounceTier, Debouncer};
use crate::config::FrameConfig;
use crate::window::WindowKind;

/// Layout work that became due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledJob {
    /// Typing settled: recompute the compose box
    ResizeComposeBox,
    /// Window resizing settled: recompute box, manual height, preview
    WindowResized,
}

/// Decides when automatic layout work runs.
///
/// Nothing automatic runs until the grace period after first render has
/// elapsed. Keystrokes typed before that are held and run once armed;
/// window resize and cursor events before that are dropped, matching
/// listeners that are not attached yet.
#[derive(Clone, Debug)]
pub struct ResizeScheduler {
    grace_ms: f64,
    armed_at_ms: Option<f64>,
    keystroke: Debouncer,
    window_resize: Debouncer,
}

impl ResizeScheduler {
    /// Scheduler for a window of the given kind
    pub fn new(kind: WindowKind, config: &FrameConfig) -> Self {
        let keystroke_tier = DebounceTier::KEYSTROKE;
        let resize_tier = DebounceTier::for_window_resize(kind);
        Self {
            grace_ms: config.render_grace_ms,
            armed_at_ms: None,
            keystroke: Debouncer::new(keystroke_tier, config.tier_delay_ms(keystroke_tier)),
            window_resize: Debouncer::new(resize_tier, config.tier_delay_ms(resize_tier)),
        }
    }

    /// The compose UI rendered; only the first call starts the grace period
    pub fn on_render(&mut self, now_ms: f64) {
        if self.armed_at_ms.is_none() {
            self.armed_at_ms = Some(now_ms + self.grace_ms);
        }
    }

    /// Whether automatic resizing is active
    pub fn is_armed(&self, now_ms: f64) -> bool {
        self.armed_at_ms.is_some_and(|at| now_ms >= at)
    }

    /// A key was released in the text input
    pub fn on_keystroke(&mut self, now_ms: f64) {
        self.keystroke.poke(now_ms);
    }

    /// The frame's window was resized
    pub fn on_window_resize(&mut self, now_ms: f64) {
        if !self.is_armed(now_ms) {
            debug!(now_ms, "window resize before grace period ended");
            return;
        }
        self.window_resize.poke(now_ms);
    }

    /// Whether cursor movement should trigger a resize right away
    pub fn accepts_cursor_events(&self, now_ms: f64) -> bool {
        self.is_armed(now_ms)
    }

    /// Collect the jobs due at `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> Vec<ScheduledJob> {
        let mut jobs = Vec::new();
        if !self.is_armed(now_ms) {
            return jobs;
        }
        if self.keystroke.take_due(now_ms) {
            jobs.push(ScheduledJob::ResizeComposeBox);
        }
        if self.window_resize.take_due(now_ms) {
            jobs.push(ScheduledJob::WindowResized);
        }
        jobs
    }

    /// Earliest time at which [`tick`](Self::tick) has work to return
    pub fn next_wakeup(&self) -> Option<f64> {
        let armed_at = self.armed_at_ms?;
        [self.keystroke.deadline(), self.window_resize.deadline()]
            .into_iter()
            .flatten()
            .map(|deadline| deadline.max(armed_at))
            .reduce(f64::min)
    }

    /// Drop pending work and forget the render time
    pub fn reset(&mut self) {
        self.armed_at_ms = None;
        self.keystroke.cancel();
        self.window_resize.cancel();
    }
}
