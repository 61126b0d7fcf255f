//! Message bus seam
//!
//! Frames hand envelopes to a [`MessageBus`] and move on; nothing is awaited.
//! The browser implementation lives behind the `wasm` feature of the frame
//! crate. [`RecordingBus`] keeps everything in memory for tests and for
//! wiring a frame straight into a host page without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::command::Envelope;
use crate::error::{IpcError, IpcResult};

/// Ordered, fire-and-forget channel from a frame to its parent tab
pub trait MessageBus {
    /// Hand a message to the transport.
    ///
    /// An `Err` means the message was dropped; callers log and carry on.
    fn send(&self, envelope: Envelope) -> IpcResult<()>;
}

impl<B: MessageBus + ?Sized> MessageBus for &B {
    fn send(&self, envelope: Envelope) -> IpcResult<()> {
        (**self).send(envelope)
    }
}

impl<B: MessageBus + ?Sized> MessageBus for Rc<B> {
    fn send(&self, envelope: Envelope) -> IpcResult<()> {
        (**self).send(envelope)
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    queue: VecDeque<Envelope>,
    closed: bool,
}

/// In-memory bus that queues every envelope in send order.
///
/// Clones share the same queue, so a test can keep one handle while the
/// frame owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingBus {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingBus {
    /// Create an empty, open bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the parent tab going away; later sends fail
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }

    /// Remove and return everything queued so far
    pub fn drain(&self) -> Vec<Envelope> {
        self.state.borrow_mut().queue.drain(..).collect()
    }

    /// Copy of the queue without draining it
    pub fn pending(&self) -> Vec<Envelope> {
        self.state.borrow().queue.iter().cloned().collect()
    }

    /// Number of queued envelopes
    pub fn len(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.state.borrow().queue.is_empty()
    }
}

impl MessageBus for RecordingBus {
    fn send(&self, envelope: Envelope) -> IpcResult<()> {
        let mut state = self.state.borrow_mut();
        if state.closed {
            return Err(IpcError::ChannelClosed(envelope.parent_tab_id.to_string()));
        }
        state.queue.push_back(envelope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CssDeclarations, FrameCommand};
    use crate::selector::Selector;
    use crate::types::TabId;

    fn envelope(selector: &str) -> Envelope {
        Envelope::new(
            TabId::new("1"),
            FrameCommand::SetCss {
                selector: Selector::new(selector),
                css: CssDeclarations::height(Some(10.0)),
            },
        )
    }

    #[test]
    fn test_recording_bus_preserves_order() {
        let bus = RecordingBus::new();
        bus.send(envelope("a")).unwrap();
        bus.send(envelope("b")).unwrap();
        bus.send(envelope("c")).unwrap();

        let drained = bus.drain();
        let selectors: Vec<String> = drained
            .iter()
            .map(|e| match &e.command {
                FrameCommand::SetCss { selector, .. } => selector.to_string(),
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(selectors, vec!["a", "b", "c"]);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let bus = RecordingBus::new();
        let handle = bus.clone();
        bus.send(envelope("a")).unwrap();
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.pending().len(), 1);
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_closed_bus_rejects() {
        let bus = RecordingBus::new();
        bus.close();
        let err = bus.send(envelope("a")).unwrap_err();
        assert_eq!(err, IpcError::ChannelClosed("1".to_string()));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_bus_through_reference() {
        let bus = RecordingBus::new();
        let by_ref: &RecordingBus = &bus;
        MessageBus::send(&by_ref, envelope("a")).unwrap();
        assert_eq!(bus.len(), 1);
    }
}
