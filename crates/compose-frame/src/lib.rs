//! Compose window chrome, running inside the compose iframe
//!
//! This crate provides everything a single secure compose frame does to its
//! own window:
//! - Sizing the compose surface and reporting it to the host page
//! - Minimize / full screen transitions of standalone windows
//! - Debounced triggering of layout work after keystrokes and resizes
//! - Focus and close requests to the host's window registry
//!
//! ## Architecture
//!
//! - [`window`]: Per-frame state (`ComposeWindow`) and operation effects
//! - [`layout`]: Resize/Layout Engine
//! - [`chrome`]: Chrome State Machine
//! - [`schedule`]: Debounce tiers and the render grace period
//! - [`dom`]: The `FrameDom` seam plus an in-memory document
//! - [`frame`]: Driver that ties a window to its document and bus
//!
//! ## Example
//!
//! ```rust
//! use compose_frame::{ComposeFrame, ComposeWindow, FrameElement, MemoryElement, MemoryFrameDom, WindowKind};
//! use compose_ipc::{FrameId, RecordingBus, TabId};
//!
//! let window = ComposeWindow::new(FrameId::new("reply_1"), TabId::new("7"), WindowKind::ReplyBox);
//! let dom = MemoryFrameDom::new()
//!     .with_element(FrameElement::ComposeTable, MemoryElement::sized(600.0, 420.0));
//! let bus = RecordingBus::new();
//! let mut frame = ComposeFrame::new(window, dom, bus.clone());
//!
//! frame.on_render(0.0);
//! frame.on_keyup(1500.0);
//! frame.tick(1700.0);
//! assert_eq!(bus.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: all state is plain Rust, testable without a browser
//! 2. **Injected Time**: every time-dependent call takes `now_ms`
//! 3. **Effects, not calls**: operations return the commands they want sent

pub mod chrome;
pub mod config;
pub mod dom;
pub mod error;
pub mod frame;
pub mod layout;
pub mod schedule;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use chrome::ChromeState;
pub use config::{EngineQuirks, FrameConfig};
pub use dom::{
    ChipBounds, FrameDom, FrameElement, MemoryElement, MemoryFrameDom, RecipientInputMetrics,
};
pub use error::{ChromeError, ChromeResult};
pub use frame::{ComposeFrame, PreviewRefresh};
pub use layout::{should_emit_resize, RESIZE_TOLERANCE_PX};
pub use schedule::{DebounceTier, Debouncer, ResizeScheduler, ScheduledJob};
pub use window::{ComposeWindow, FrameEffects, WindowKind};
