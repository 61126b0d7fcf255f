//! Cross-Frame Messaging Protocol for Secure Compose
//!
//! A compose frame runs inside a cross-origin iframe and cannot touch its own
//! container in the host page. Everything it needs done out there travels as
//! a [`FrameCommand`] wrapped in an [`Envelope`] addressed to the parent tab.
//!
//! This crate is the single source of truth for:
//! - Outbound frame commands (`set_css`, `add_class`, `remove_class`,
//!   `scroll_to_cursor_in_reply_box`, `set_active_window`,
//!   `close_compose_window`)
//! - Inbound host events (open/close/focus of a compose window)
//! - Selector builders for the containers a frame may address
//! - The [`MessageBus`] seam plus an in-memory [`RecordingBus`]
//!
//! ## Delivery contract
//!
//! Messages are fire-and-forget. The host applies them synchronously on
//! receipt; order is preserved per sender, never across windows.

pub mod bus;
pub mod command;
pub mod error;
pub mod selector;
mod types;

pub use bus::{MessageBus, RecordingBus};
pub use command::{CssDeclarations, Envelope, FrameCommand, HostEvent};
pub use error::{IpcError, IpcResult};
pub use selector::Selector;
pub use types::{FrameId, TabId};
