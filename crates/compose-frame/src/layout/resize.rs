//! Compose box resizing

use compose_ipc::command::px;
use compose_ipc::{CssDeclarations, FrameCommand, Selector};
use tracing::debug;

use super::should_emit_resize_with_tolerance;
use crate::dom::{FrameDom, FrameElement};
use crate::window::{ComposeWindow, FrameEffects};

impl ComposeWindow {
    /// Recompute the compose surface size.
    ///
    /// Reply boxes measure the visible block (compose table, then success
    /// panel, then prompt) and ask the parent to resize the iframe when the
    /// height moved by more than the tolerance. The 260px floor only applies
    /// while the compose table is showing. `add_extra` is added on top of the
    /// reported height. A `cursor_offset_top` additionally asks the parent to
    /// keep the caret in view.
    ///
    /// Standalone windows resize the recipient inputs and cap the text input
    /// at the text container width.
    pub fn resize_compose_box(
        &mut self,
        dom: &mut impl FrameDom,
        add_extra: f64,
        cursor_offset_top: Option<f64>,
    ) -> FrameEffects {
        let mut effects = FrameEffects::none();
        dom.set_style(FrameElement::InputText, "max-width", "");

        if !self.is_reply_box() {
            self.resize_input(dom, None);
            let container = dom.width(FrameElement::TextContainer).unwrap_or(0.0);
            let max_width = (container - self.config.text_container_margin).max(0.0);
            dom.set_style(FrameElement::InputText, "max-width", &px(max_width));
            return effects;
        }

        let (current_height, min_height) = if dom.is_visible(FrameElement::ComposeTable) {
            (
                dom.outer_height(FrameElement::ComposeTable).unwrap_or(0.0),
                self.config.min_reply_box_height,
            )
        } else if dom.is_visible(FrameElement::ReplyMsgSuccessful) {
            (
                dom.outer_height(FrameElement::ReplyMsgSuccessful)
                    .unwrap_or(0.0),
                0.0,
            )
        } else {
            (dom.outer_height(FrameElement::Prompt).unwrap_or(0.0), 0.0)
        };

        if should_emit_resize_with_tolerance(
            self.last_reply_box_table_height,
            current_height,
            self.config.resize_tolerance_px,
        ) {
            self.last_reply_box_table_height = current_height;
            let height = current_height.max(min_height) + add_extra;
            effects.push(FrameCommand::SetCss {
                selector: Selector::iframe(&self.frame_id),
                css: CssDeclarations::height(Some(height)),
            });
        } else {
            debug!(
                frame_id = %self.frame_id,
                last = self.last_reply_box_table_height,
                current = current_height,
                "reply box height within tolerance"
            );
        }

        if let Some(cursor_offset_top) = cursor_offset_top {
            effects.push(FrameCommand::ScrollToCursorInReplyBox {
                reply_msg_id: Selector::reply_msg(&self.frame_id),
                cursor_offset_top,
            });
        }

        effects
    }
}
