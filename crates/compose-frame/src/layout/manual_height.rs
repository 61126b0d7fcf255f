//! Manual text input height for engines that overflow the frame

use compose_ipc::command::px;
use tracing::debug;

use crate::dom::{FrameDom, FrameElement};
use crate::window::ComposeWindow;

/// Measurements feeding the manual input height
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualHeightInputs {
    /// Baseline body height
    pub ref_body_height: f64,
    /// Sum of visible non-text rows, including a 1px border per row
    pub other_rows_height: f64,
    /// Attachment list height
    pub attachment_list_height: f64,
    /// Top plus bottom padding of the text input
    pub input_vertical_padding: f64,
    /// Height of the "show previous message" toggle, margins included
    pub toggle_icon_height: f64,
}

/// Height left for the text input once everything else is laid out
pub fn manual_input_height(inputs: &ManualHeightInputs) -> f64 {
    (inputs.ref_body_height
        - inputs.other_rows_height
        - inputs.attachment_list_height
        - inputs.input_vertical_padding
        - inputs.toggle_icon_height)
        .max(0.0)
}

impl ComposeWindow {
    /// Set the text input height by hand when the engine needs it.
    ///
    /// Only runs on standalone windows with the manual-height quirk. The body
    /// baseline is captured on first use or when `update_ref_body_height` is
    /// set. Returns the height applied, if any. Nothing is sent to the parent.
    pub fn set_input_text_height_manually_if_needed(
        &mut self,
        dom: &mut impl FrameDom,
        update_ref_body_height: bool,
    ) -> Option<f64> {
        if self.is_reply_box() || !self.quirks.requires_manual_height_workaround {
            return None;
        }

        // Collapse first so the rows are measured without the input's height
        dom.set_style(FrameElement::InputText, "height", "0");

        let other_rows_height: f64 = dom
            .visible_row_heights_except_text()
            .iter()
            .map(|h| h + 1.0)
            .sum();

        if update_ref_body_height || self.ref_body_height.is_none() {
            let measured = dom
                .height(FrameElement::Body)
                .filter(|h| *h > 0.0)
                .unwrap_or(self.config.fallback_body_height);
            self.ref_body_height = Some(measured);
        }

        let inputs = ManualHeightInputs {
            ref_body_height: self
                .ref_body_height
                .unwrap_or(self.config.fallback_body_height),
            other_rows_height,
            attachment_list_height: dom.height(FrameElement::AttachmentList).unwrap_or(0.0),
            input_vertical_padding: dom.vertical_padding(FrameElement::InputText),
            toggle_icon_height: dom.outer_height(FrameElement::TripleDot).unwrap_or(0.0),
        };
        let height = manual_input_height(&inputs);
        debug!(frame_id = %self.frame_id, ?inputs, height, "manual input height");
        dom.set_style(FrameElement::InputText, "height", &px(height));
        Some(height)
    }
}

#[cfg(test)]
mod tests {
    use compose_ipc::{FrameId, TabId};

    use super::*;
    use crate::config::{EngineQuirks, FrameConfig};
    use crate::dom::{MemoryElement, MemoryFrameDom};
    use crate::window::WindowKind;

    const QUIRKY: EngineQuirks = EngineQuirks {
        requires_manual_height_workaround: true,
    };

    fn window(kind: WindowKind, quirks: EngineQuirks) -> ComposeWindow {
        ComposeWindow::with_config(
            FrameId::new("f"),
            TabId::new("t"),
            kind,
            quirks,
            FrameConfig::default(),
        )
    }

    fn dom(body_height: f64) -> MemoryFrameDom {
        let mut dom = MemoryFrameDom::new()
            .with_element(FrameElement::Body, MemoryElement::sized(600.0, body_height))
            .with_element(
                FrameElement::InputText,
                MemoryElement::sized(500.0, 300.0).with_vertical_padding(10.0),
            )
            .with_element(FrameElement::AttachmentList, MemoryElement::sized(500.0, 40.0))
            .with_element(FrameElement::TripleDot, MemoryElement::sized(20.0, 16.0));
        dom.push_row(30.0, true);
        dom.push_row(30.0, true);
        dom.push_row(50.0, false);
        dom
    }

    #[test]
    fn test_formula() {
        let inputs = ManualHeightInputs {
            ref_body_height: 605.0,
            other_rows_height: 62.0,
            attachment_list_height: 40.0,
            input_vertical_padding: 10.0,
            toggle_icon_height: 16.0,
        };
        assert_eq!(manual_input_height(&inputs), 477.0);
    }

    #[test]
    fn test_formula_floors_at_zero() {
        let inputs = ManualHeightInputs {
            ref_body_height: 50.0,
            other_rows_height: 62.0,
            ..Default::default()
        };
        assert_eq!(manual_input_height(&inputs), 0.0);
    }

    #[test]
    fn test_inactive_without_quirk() {
        let mut w = window(WindowKind::Standalone, EngineQuirks::NONE);
        let mut d = dom(605.0);
        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, false), None);
        assert_eq!(d.style(FrameElement::InputText, "height"), None);
    }

    #[test]
    fn test_inactive_for_reply_box() {
        let mut w = window(WindowKind::ReplyBox, QUIRKY);
        let mut d = dom(605.0);
        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, true), None);
    }

    #[test]
    fn test_applies_height_and_captures_baseline_once() {
        let mut w = window(WindowKind::Standalone, QUIRKY);
        let mut d = dom(605.0);

        // 605 - (31 + 31) - 40 - 10 - 16
        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, false), Some(477.0));
        assert_eq!(d.style(FrameElement::InputText, "height"), Some("477px"));
        assert_eq!(w.ref_body_height(), Some(605.0));

        // Baseline is kept unless a refresh is asked for
        d.set_height(FrameElement::Body, 700.0);
        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, false), Some(477.0));
        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, true), Some(572.0));
        assert_eq!(w.ref_body_height(), Some(700.0));
    }

    #[test]
    fn test_missing_body_uses_fallback() {
        let mut w = window(WindowKind::Standalone, QUIRKY);
        let mut d = MemoryFrameDom::new()
            .with_element(FrameElement::InputText, MemoryElement::sized(500.0, 300.0));

        assert_eq!(w.set_input_text_height_manually_if_needed(&mut d, false), Some(605.0));
        assert_eq!(w.ref_body_height(), Some(605.0));
    }
}
