//! Host page: registry plus container DOM
//!
//! [`HostPage`] receives window lifecycle events and frame commands for one
//! tab, keeps the [`ComposeRegistry`] up to date and mirrors it onto the
//! window containers (`data-order` plus the active classes).

use compose_ipc::{Envelope, FrameCommand, FrameId, HostEvent, Selector, TabId};
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::dom::ContainerDom;
use crate::error::{HostError, HostResult};
use crate::registry::{ComposeRegistry, OpenOutcome};

/// Compose window management for one host tab
#[derive(Clone, Debug)]
pub struct HostPage<D: ContainerDom> {
    tab_id: TabId,
    registry: ComposeRegistry,
    dom: D,
    config: HostConfig,
}

impl<D: ContainerDom> HostPage<D> {
    /// Page with default configuration
    pub fn new(tab_id: TabId, dom: D) -> Self {
        let config = HostConfig::default();
        Self {
            tab_id,
            registry: ComposeRegistry::new(config.max_windows),
            dom,
            config,
        }
    }

    /// Page with explicit configuration
    pub fn with_config(tab_id: TabId, dom: D, config: HostConfig) -> HostResult<Self> {
        config.validate()?;
        Ok(Self {
            tab_id,
            registry: ComposeRegistry::new(config.max_windows),
            dom,
            config,
        })
    }

    /// Tab served by this page
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    /// Window registry
    pub fn registry(&self) -> &ComposeRegistry {
        &self.registry
    }

    /// Container DOM
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable container DOM
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Active configuration
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Open a standalone compose window, or show the capacity notice
    pub fn open_compose(&mut self, frame_id: FrameId) -> HostResult<OpenOutcome> {
        let outcome = self.registry.open(frame_id.clone())?;
        match outcome {
            OpenOutcome::Opened { .. } => {
                self.dom.insert_window(&frame_id);
                self.sync();
            }
            OpenOutcome::Rejected => self.dom.show_notice(&self.config.capacity_notice),
        }
        Ok(outcome)
    }

    /// Close a window and re-number the rest
    pub fn close_compose(&mut self, frame_id: &FrameId) -> HostResult<()> {
        self.registry.close(frame_id)?;
        self.dom.remove_window(frame_id);
        self.sync();
        Ok(())
    }

    /// Make a window active
    pub fn focus_compose(&mut self, frame_id: &FrameId) -> HostResult<()> {
        if self.registry.focus(frame_id)? {
            self.sync();
        }
        Ok(())
    }

    /// Apply a lifecycle event
    pub fn handle_event(&mut self, event: HostEvent) -> HostResult<()> {
        match event {
            HostEvent::OpenCompose { frame_id } => self.open_compose(frame_id).map(|_| ()),
            HostEvent::CloseCompose { frame_id } => self.close_compose(&frame_id),
            HostEvent::FocusCompose { frame_id } => self.focus_compose(&frame_id),
        }
    }

    /// Apply a command sent by a compose frame.
    ///
    /// Envelopes for other tabs change nothing and yield
    /// [`HostError::WrongTab`].
    pub fn apply(&mut self, envelope: Envelope) -> HostResult<()> {
        if envelope.parent_tab_id != self.tab_id {
            debug!(
                expected = %self.tab_id,
                got = %envelope.parent_tab_id,
                command = envelope.command.name(),
                "ignoring command for another tab"
            );
            return Err(HostError::WrongTab {
                expected: self.tab_id.clone(),
                got: envelope.parent_tab_id,
            });
        }

        if let Some(event) = envelope.command.as_host_event() {
            return self.handle_event(event);
        }

        match envelope.command {
            FrameCommand::SetCss { selector, css } => self.dom.set_css(&selector, &css),
            FrameCommand::AddClass { class, selector } => self.dom.add_class(&selector, &class),
            FrameCommand::RemoveClass { class, selector } => {
                self.dom.remove_class(&selector, &class)
            }
            FrameCommand::ScrollToCursorInReplyBox {
                reply_msg_id,
                cursor_offset_top,
            } => self.dom.scroll_to_cursor(&reply_msg_id, cursor_offset_top),
            FrameCommand::SetActiveWindow { .. } | FrameCommand::CloseComposeWindow { .. } => {}
        }
        Ok(())
    }

    /// Replace the registry with a snapshot and redraw.
    ///
    /// The snapshot must carry this page's window cap; anything else is
    /// rejected and leaves the page untouched.
    pub fn restore(&mut self, json: &str) -> HostResult<()> {
        let registry = ComposeRegistry::restore(json)?;
        let cap = self.config.max_windows;
        if registry.max_windows() != cap || registry.len() > cap {
            return Err(HostError::InvalidSnapshot(format!(
                "snapshot holds {} of {} windows, page allows {}",
                registry.len(),
                registry.max_windows(),
                cap
            )));
        }
        for entry in self.registry.entries() {
            if !registry.contains(&entry.frame_id) {
                self.dom.remove_window(&entry.frame_id);
            }
        }
        for entry in registry.entries() {
            if !self.registry.contains(&entry.frame_id) {
                self.dom.insert_window(&entry.frame_id);
            }
        }
        info!(windows = registry.len(), "registry restored");
        self.registry = registry;
        self.sync();
        Ok(())
    }

    /// Close every window
    pub fn reset(&mut self) {
        for entry in self.registry.entries() {
            self.dom.remove_window(&entry.frame_id);
        }
        self.registry.reset();
    }

    fn sync(&mut self) {
        for entry in self.registry.entries() {
            let chrome = Selector::window_chrome(&entry.frame_id);
            self.dom.set_attribute(
                &chrome,
                &self.config.order_attribute,
                &entry.order.to_string(),
            );
            toggle(&mut self.dom, &chrome, &self.config.active_class, entry.active);
            toggle(
                &mut self.dom,
                &chrome,
                &self.config.previous_active_class,
                entry.previous_active,
            );
        }
    }
}

fn toggle<D: ContainerDom>(dom: &mut D, selector: &Selector, class: &str, on: bool) {
    if on {
        dom.add_class(selector, class);
    } else {
        dom.remove_class(selector, class);
    }
}
