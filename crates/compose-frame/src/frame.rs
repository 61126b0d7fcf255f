//! Frame driver
//!
//! [`ComposeFrame`] wires one [`ComposeWindow`] to its document, its message
//! bus and its [`ResizeScheduler`]. UI handlers call into it with the current
//! time; it runs chrome and layout operations and sends the resulting
//! commands to the parent tab.

use compose_ipc::{FrameCommand, MessageBus};
use tracing::{debug, warn};

use crate::dom::{FrameDom, FrameElement};
use crate::error::ChromeResult;
use crate::schedule::{ResizeScheduler, ScheduledJob};
use crate::window::{ComposeWindow, FrameEffects};

/// Callback that recomputes the collapsed recipient preview
pub type PreviewRefresh = Box<dyn FnMut()>;

/// One compose frame: window state plus its adapters
pub struct ComposeFrame<D: FrameDom, B: MessageBus> {
    window: ComposeWindow,
    dom: D,
    bus: B,
    scheduler: ResizeScheduler,
    preview_refresh: Option<PreviewRefresh>,
}

impl<D: FrameDom, B: MessageBus> ComposeFrame<D, B> {
    /// Create a driver; the scheduler follows the window's kind and config
    pub fn new(window: ComposeWindow, dom: D, bus: B) -> Self {
        let scheduler = ResizeScheduler::new(window.kind(), window.config());
        Self {
            window,
            dom,
            bus,
            scheduler,
            preview_refresh: None,
        }
    }

    /// Install the recipient preview refresh callback
    pub fn with_preview_refresh(mut self, refresh: impl FnMut() + 'static) -> Self {
        self.set_preview_refresh(refresh);
        self
    }

    /// Replace the recipient preview refresh callback
    pub fn set_preview_refresh(&mut self, refresh: impl FnMut() + 'static) {
        self.preview_refresh = Some(Box::new(refresh));
    }

    /// Window state
    pub fn window(&self) -> &ComposeWindow {
        &self.window
    }

    /// Frame document
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable frame document
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Outbound bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Resize trigger state
    pub fn scheduler(&self) -> &ResizeScheduler {
        &self.scheduler
    }

    /// The compose UI finished rendering
    pub fn on_render(&mut self, now_ms: f64) -> Option<f64> {
        self.scheduler.on_render(now_ms);
        self.scheduler.next_wakeup()
    }

    /// Key released in the text input; returns the next wakeup
    pub fn on_keyup(&mut self, now_ms: f64) -> Option<f64> {
        self.scheduler.on_keystroke(now_ms);
        self.scheduler.next_wakeup()
    }

    /// Frame window resized; returns the next wakeup
    pub fn on_window_resize(&mut self, now_ms: f64) -> Option<f64> {
        self.scheduler.on_window_resize(now_ms);
        self.scheduler.next_wakeup()
    }

    /// Editor caret moved to `offset_top` inside a reply box
    pub fn on_cursor_moved(&mut self, now_ms: f64, offset_top: f64) {
        if !self.window.is_reply_box() {
            return;
        }
        if !self.scheduler.accepts_cursor_events(now_ms) {
            debug!(frame_id = %self.window.frame_id(), "cursor move before grace period ended");
            return;
        }
        let effects = self
            .window
            .resize_compose_box(&mut self.dom, 0.0, Some(offset_top));
        self.apply(effects);
    }

    /// Run whatever became due; returns the next wakeup
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        for job in self.scheduler.tick(now_ms) {
            self.run(job);
        }
        self.scheduler.next_wakeup()
    }

    /// Resize the compose box right away
    pub fn resize_compose_box(&mut self, add_extra: f64, cursor_offset_top: Option<f64>) {
        let effects = self
            .window
            .resize_compose_box(&mut self.dom, add_extra, cursor_offset_top);
        self.apply(effects);
    }

    /// Minimize control clicked
    pub fn minimize_clicked(&mut self) -> ChromeResult<()> {
        let effects = self.window.toggle_minimize(&mut self.dom)?;
        self.apply(effects);
        Ok(())
    }

    /// Popout (full screen) control clicked
    pub fn popout_clicked(&mut self) -> ChromeResult<()> {
        let effects = self.window.toggle_full_screen(&mut self.dom)?;
        self.apply(effects);
        Ok(())
    }

    /// Click anywhere in the frame
    pub fn body_clicked(&mut self, target_is_body: bool) {
        let effects = self.window.on_body_click(&mut self.dom, target_is_body);
        self.apply(effects);
    }

    /// The frame received focus
    pub fn input_focused(&mut self) {
        let command = self.window.activation();
        self.dispatch(command);
    }

    /// Close control clicked
    pub fn close_clicked(&mut self) {
        let command = self.window.close_request();
        self.dispatch(command);
    }

    /// A recipient was added or removed
    pub fn recipients_changed(&mut self) {
        self.window.resize_input(&mut self.dom, None);
    }

    /// Forget measurements, chrome state and pending work
    pub fn reset(&mut self) {
        self.window.reset();
        self.scheduler.reset();
    }

    fn run(&mut self, job: ScheduledJob) {
        debug!(frame_id = %self.window.frame_id(), ?job, "running scheduled job");
        match job {
            ScheduledJob::ResizeComposeBox => self.resize_compose_box(0.0, None),
            ScheduledJob::WindowResized => {
                let mut effects = self.window.resize_compose_box(&mut self.dom, 0.0, None);
                self.window
                    .set_input_text_height_manually_if_needed(&mut self.dom, true);
                effects.refresh_recipient_preview |=
                    self.dom.is_visible(FrameElement::RecipientsPlaceholder);
                self.apply(effects);
            }
        }
    }

    fn apply(&mut self, effects: FrameEffects) {
        if effects.refresh_recipient_preview {
            if let Some(refresh) = self.preview_refresh.as_mut() {
                refresh();
            }
        }
        for command in effects.commands {
            self.dispatch(command);
        }
    }

    fn dispatch(&self, command: FrameCommand) {
        let name = command.name();
        if let Err(e) = self.bus.send(self.window.envelope(command)) {
            warn!(frame_id = %self.window.frame_id(), command = name, error = %e, "dropped frame command");
        }
    }
}
