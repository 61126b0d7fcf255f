//! Resize/Layout Engine
//!
//! Computes the size the compose surface wants and tells the parent page to
//! apply it to the iframe container.
//!
//! - Reply boxes are sized by the height of whichever content block is
//!   visible, and only report changes larger than [`RESIZE_TOLERANCE_PX`].
//! - Standalone windows recompute the text input's max-width and the widths
//!   of the recipient inputs.
//! - One engine needs the text input height set by hand on standalone
//!   windows; see [`manual_input_height`].

mod manual_height;
mod recipients;
mod resize;

pub use manual_height::{manual_input_height, ManualHeightInputs};
pub use recipients::recipient_input_width;

/// Height changes of this many pixels or fewer are not reported
pub const RESIZE_TOLERANCE_PX: f64 = 2.0;

/// Whether a reply box height change is worth a message to the parent
#[inline]
pub fn should_emit_resize(last_height: f64, new_height: f64) -> bool {
    should_emit_resize_with_tolerance(last_height, new_height, RESIZE_TOLERANCE_PX)
}

/// [`should_emit_resize`] with a configurable tolerance
#[inline]
pub fn should_emit_resize_with_tolerance(last_height: f64, new_height: f64, tolerance: f64) -> bool {
    (new_height - last_height).abs() > tolerance
}
