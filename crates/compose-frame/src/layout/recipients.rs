//! Recipient input sizing

use compose_ipc::command::px;

use crate::dom::{FrameDom, RecipientInputMetrics};
use crate::window::ComposeWindow;

/// Width a recipient input should take.
///
/// The input fills what is left of its container after padding, the element
/// next to it and a fixed margin. When the last recipient chip leaves enough
/// room on its line (`min_input_width`), the input starts after the chip;
/// otherwise it wraps and takes the full line.
pub fn recipient_input_width(
    metrics: &RecipientInputMetrics,
    min_input_width: f64,
    margin: f64,
) -> f64 {
    let container_width = metrics.container_width.floor();
    let mut additional_width = metrics.horizontal_padding.ceil();
    if let Some(next) = metrics.next_sibling_width {
        additional_width += next.ceil();
    }

    let offset = match metrics.last_chip {
        Some(chip) if chip.right() + min_input_width + additional_width < container_width => {
            chip.right().ceil()
        }
        _ => 0.0,
    };

    (container_width - offset - additional_width - margin).max(0.0)
}

impl ComposeWindow {
    /// Resize recipient inputs; `None` resizes all of them.
    ///
    /// Must run after every recipient add/remove and whenever the container
    /// width changes.
    pub fn resize_input(&self, dom: &mut impl FrameDom, inputs: Option<&[usize]>) {
        let indices: Vec<usize> = match inputs {
            Some(selected) => selected.to_vec(),
            None => (0..dom.recipient_input_count()).collect(),
        };

        // Reset first so the parent measures without the old width
        for &index in &indices {
            dom.set_recipient_input_width(index, "100%");
        }

        for index in indices {
            let Some(metrics) = dom.recipient_input(index) else {
                continue;
            };
            let width = recipient_input_width(
                &metrics,
                self.config.min_recipient_input_width,
                self.config.recipient_input_margin,
            );
            dom.set_recipient_input_width(index, &px(width));
        }
    }
}

#[cfg(test)]
mod tests {
    use compose_ipc::{FrameId, TabId};

    use super::*;
    use crate::dom::{ChipBounds, MemoryFrameDom};
    use crate::window::WindowKind;

    #[test]
    fn test_empty_input_takes_full_line() {
        let metrics = RecipientInputMetrics {
            container_width: 500.0,
            horizontal_padding: 4.0,
            ..Default::default()
        };
        assert_eq!(recipient_input_width(&metrics, 150.0, 11.0), 485.0);
    }

    #[test]
    fn test_input_follows_last_chip_when_room() {
        let metrics = RecipientInputMetrics {
            container_width: 500.0,
            horizontal_padding: 4.0,
            next_sibling_width: Some(20.0),
            last_chip: Some(ChipBounds {
                left: 100.0,
                width: 120.0,
            }),
        };
        // 500 - 220 - (4 + 20) - 11
        assert_eq!(recipient_input_width(&metrics, 150.0, 11.0), 245.0);
    }

    #[test]
    fn test_input_wraps_when_chip_leaves_no_room() {
        let metrics = RecipientInputMetrics {
            container_width: 500.0,
            horizontal_padding: 4.0,
            next_sibling_width: None,
            last_chip: Some(ChipBounds {
                left: 200.0,
                width: 150.0,
            }),
        };
        // 350 + 150 + 4 is not < 500, so the input wraps
        assert_eq!(recipient_input_width(&metrics, 150.0, 11.0), 485.0);
    }

    #[test]
    fn test_fractional_measurements_round_like_layout() {
        let metrics = RecipientInputMetrics {
            container_width: 500.9,
            horizontal_padding: 3.2,
            next_sibling_width: Some(19.1),
            last_chip: None,
        };
        // floor(500.9) - (ceil(3.2) + ceil(19.1)) - 11
        assert_eq!(recipient_input_width(&metrics, 150.0, 11.0), 465.0);
    }

    #[test]
    fn test_never_negative() {
        let metrics = RecipientInputMetrics {
            container_width: 5.0,
            ..Default::default()
        };
        assert_eq!(recipient_input_width(&metrics, 150.0, 11.0), 0.0);
    }

    #[test]
    fn test_resize_selected_inputs_only() {
        let window = ComposeWindow::new(FrameId::new("f"), TabId::new("t"), WindowKind::Standalone);
        let mut dom = MemoryFrameDom::new();
        for _ in 0..3 {
            dom.push_recipient_input(RecipientInputMetrics {
                container_width: 300.0,
                ..Default::default()
            });
        }

        window.resize_input(&mut dom, Some(&[1]));
        assert_eq!(dom.recipient_input_width(0), Some(""));
        assert_eq!(dom.recipient_input_width(1), Some("289px"));
        assert_eq!(dom.recipient_input_width(2), Some(""));

        window.resize_input(&mut dom, None);
        assert_eq!(dom.recipient_input_width(0), Some("289px"));
        assert_eq!(dom.recipient_input_width(2), Some("289px"));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let window = ComposeWindow::new(FrameId::new("f"), TabId::new("t"), WindowKind::Standalone);
        let mut dom = MemoryFrameDom::new();
        window.resize_input(&mut dom, Some(&[4]));
        assert_eq!(dom.recipient_input_count(), 0);
    }
}
