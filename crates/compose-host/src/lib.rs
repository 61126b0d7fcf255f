//! Host page side of secure compose windows
//!
//! The webmail page that embeds compose frames owns their containers. This
//! crate provides:
//! - The [`ComposeRegistry`]: open order, activation and the window cap
//! - [`HostPage`]: applies frame commands and registry changes to the DOM
//! - The [`ContainerDom`] seam plus an in-memory page for tests
//!
//! ## Example
//!
//! ```rust
//! use compose_host::{HostPage, MemoryContainerDom, OpenOutcome};
//! use compose_ipc::{FrameId, TabId};
//!
//! let mut page = HostPage::new(TabId::new("1"), MemoryContainerDom::new());
//! for id in ["a", "b", "c"] {
//!     page.open_compose(FrameId::new(id)).unwrap();
//! }
//! assert_eq!(page.open_compose(FrameId::new("d")).unwrap(), OpenOutcome::Rejected);
//! assert_eq!(page.registry().active().unwrap().frame_id, FrameId::new("c"));
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod registry;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{HostConfig, MAX_COMPOSE_WINDOWS};
pub use dom::{ContainerDom, MemoryContainerDom, MemoryNode, MemoryWindow};
pub use error::{HostError, HostResult};
pub use page::HostPage;
pub use registry::{ComposeRegistry, OpenOutcome, RegistryEntry};
