//! Message types for the host runtime.
//!
//! These define the protocol between the bus handle and the dispatcher
//! thread, and the event shape delivered to handlers.

use crossbeam_channel::Sender;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier assigned to a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// An event delivered on a named stream.
///
/// The payload is an opaque structured value; no schema is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Name of the stream this event arrived on.
    pub name: String,
    /// The opaque payload.
    pub payload: Value,
}

impl Event {
    /// Create a new event.
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Handler invoked per delivered event.
///
/// Handlers run on the dispatcher thread, one invocation at a time, in
/// arrival order. They never overlap.
pub type EventHandler = Box<dyn FnMut(&Event) + Send>;

/// Messages from bus handles to the dispatcher thread.
pub(crate) enum BusMsg {
    /// Deliver an event to all handlers of its stream.
    Emit(Event),

    /// Register a handler on a stream.
    ///
    /// The dispatcher sends the assigned id on `ack` once the handler is in
    /// the table, which is what makes registration a suspension point for
    /// the caller.
    Listen {
        stream: String,
        handler: EventHandler,
        ack: Sender<ListenerId>,
    },

    /// Shut down the dispatcher thread.
    Shutdown,
}

impl fmt::Debug for BusMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emit(event) => f.debug_tuple("Emit").field(event).finish(),
            Self::Listen { stream, .. } => {
                f.debug_struct("Listen").field("stream", stream).finish_non_exhaustive()
            }
            Self::Shutdown => write!(f, "Shutdown"),
        }
    }
}
