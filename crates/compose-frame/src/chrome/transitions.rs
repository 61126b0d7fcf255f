//! Minimize / full screen transitions

use compose_ipc::{CssDeclarations, FrameCommand, Selector};
use tracing::debug;

use super::ChromeState;
use crate::dom::{FrameDom, FrameElement};
use crate::error::{ChromeError, ChromeResult};
use crate::window::{ComposeWindow, FrameEffects};

impl ComposeWindow {
    /// Minimize, or restore a minimized window.
    ///
    /// A maximized window leaves full screen first. Minimizing collapses the
    /// iframe and its window chrome to the header height; restoring clears
    /// the height override.
    pub fn toggle_minimize(&mut self, dom: &mut impl FrameDom) -> ChromeResult<FrameEffects> {
        self.require_standalone("toggle_minimize")?;
        let mut effects = FrameEffects::none();
        if self.is_maximized() {
            effects.extend(self.flip_full_screen(dom));
        }
        effects.extend(self.flip_minimized(dom));
        Ok(effects)
    }

    /// Enter or leave full screen (the popout control).
    ///
    /// A minimized window is restored first.
    pub fn toggle_full_screen(&mut self, dom: &mut impl FrameDom) -> ChromeResult<FrameEffects> {
        self.require_standalone("toggle_full_screen")?;
        Ok(self.flip_full_screen(dom))
    }

    /// Handle a click in the frame; a click on the body itself while
    /// maximized drops back to `Normal`.
    pub fn on_body_click(&mut self, dom: &mut impl FrameDom, target_is_body: bool) -> FrameEffects {
        if target_is_body && self.is_maximized() {
            return self.flip_full_screen(dom);
        }
        FrameEffects::none()
    }

    fn require_standalone(&self, op: &'static str) -> ChromeResult<()> {
        if self.is_reply_box() {
            return Err(ChromeError::UnsupportedForReplyBox(op));
        }
        Ok(())
    }

    fn chrome_and_iframe(&self) -> Selector {
        Selector::union(&[
            Selector::iframe(&self.frame_id),
            Selector::window_chrome(&self.frame_id),
        ])
    }

    fn flip_minimized(&mut self, dom: &mut impl FrameDom) -> FrameEffects {
        let mut effects = FrameEffects::none();
        let restoring = self.is_minimized();

        let height = if restoring {
            dom.remove_class(FrameElement::Body, &self.config.minimized_class);
            None
        } else {
            dom.add_class(FrameElement::Body, &self.config.minimized_class);
            Some(dom.height(FrameElement::Header).unwrap_or(0.0))
        };

        effects.push(FrameCommand::SetCss {
            selector: self.chrome_and_iframe(),
            css: CssDeclarations::height(height),
        });

        self.set_state(if restoring {
            ChromeState::Normal
        } else {
            ChromeState::Minimized
        });
        effects
    }

    fn flip_full_screen(&mut self, dom: &mut impl FrameDom) -> FrameEffects {
        let mut effects = FrameEffects::none();

        // Hidden while restyling to avoid a visible jump
        dom.set_style(FrameElement::Body, "display", "none");

        if self.is_minimized() {
            effects.extend(self.flip_minimized(dom));
        }

        let entering = !self.is_maximized();
        let class = self.config.full_screen_class.clone();
        let chrome = Selector::window_chrome(&self.frame_id);

        if entering {
            dom.add_class(FrameElement::Body, &class);
            effects.push(FrameCommand::AddClass {
                class,
                selector: chrome,
            });
        } else {
            dom.remove_class(FrameElement::Body, &class);
            effects.push(FrameCommand::RemoveClass {
                class,
                selector: chrome,
            });
        }

        let (icon, title) = if entering {
            (
                &self.config.exit_full_screen_icon,
                &self.config.exit_full_screen_title,
            )
        } else {
            (&self.config.full_screen_icon, &self.config.full_screen_title)
        };
        dom.set_attribute(FrameElement::IconPopout, "src", icon);
        dom.set_attribute(FrameElement::IconPopout, "title", title);

        dom.set_style(FrameElement::Body, "display", "");

        self.set_state(if entering {
            ChromeState::Maximized
        } else {
            ChromeState::Normal
        });

        // Available width changed under the collapsed recipient list
        effects.refresh_recipient_preview = dom.is_visible(FrameElement::RecipientsPlaceholder);
        effects
    }

    fn set_state(&mut self, next: ChromeState) {
        debug!(
            frame_id = %self.frame_id,
            from = self.state.name(),
            to = next.name(),
            "chrome state change"
        );
        self.state = next;
    }
}
