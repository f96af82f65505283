//! Event Bus: Public handle over the dispatch actor.
//!
//! The bus is the entry point for both producers (emit) and consumers
//! (listen). It spawns the dispatcher on creation and shuts it down on drop.

use super::dispatch::DispatchActor;
use super::messages::{BusMsg, Event, ListenerId};
use crossbeam_channel::{bounded, unbounded, Sender};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced at the bus API seam.
#[derive(Debug, Error)]
pub enum HostError {
    /// The dispatcher thread is gone, so the bus can no longer carry
    /// messages.
    #[error("event bus is closed")]
    BusClosed,
}

/// A named-stream event bus with strictly serialized delivery.
///
/// Cloning is not supported on the bus itself; producers on other threads
/// use [`EventBus::sender`] instead. Dropping the bus shuts the dispatcher
/// down and joins it.
pub struct EventBus {
    /// Message channel into the dispatcher.
    tx: Sender<BusMsg>,
    /// Dispatcher actor handle.
    dispatch: Option<DispatchActor>,
}

impl EventBus {
    /// Create a new bus and spawn its dispatcher thread.
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<BusMsg>();
        let dispatch = DispatchActor::spawn(rx);

        Self {
            tx,
            dispatch: Some(dispatch),
        }
    }

    /// Emit a payload on a named stream.
    ///
    /// Delivery is asynchronous: this queues the event and returns. Streams
    /// with no listeners silently drop the event.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::BusClosed`] if the dispatcher has exited.
    pub fn emit(&self, stream: impl Into<String>, payload: Value) -> Result<(), HostError> {
        self.tx
            .send(BusMsg::Emit(Event::new(stream, payload)))
            .map_err(|_| HostError::BusClosed)
    }

    /// Register a handler on a named stream.
    ///
    /// Blocks until the registration has completed on the dispatcher thread;
    /// every event emitted after this returns is guaranteed to reach the
    /// handler. The subscription lasts for the lifetime of the bus; there is
    /// no cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::BusClosed`] if the dispatcher has exited.
    pub fn listen(
        &self,
        stream: impl Into<String>,
        handler: impl FnMut(&Event) + Send + 'static,
    ) -> Result<ListenerId, HostError> {
        let (ack_tx, ack_rx) = bounded(1);
        self.tx
            .send(BusMsg::Listen {
                stream: stream.into(),
                handler: Box::new(handler),
                ack: ack_tx,
            })
            .map_err(|_| HostError::BusClosed)?;

        ack_rx.recv().map_err(|_| HostError::BusClosed)
    }

    /// Get a cheap cloneable emit-only handle for producer threads.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        let _ = self.tx.send(BusMsg::Shutdown);
        if let Some(dispatch) = self.dispatch.take() {
            dispatch.join();
        }
    }
}

/// Emit-only handle to an [`EventBus`], safe to clone across threads.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<BusMsg>,
}

impl EventSender {
    /// Emit a payload on a named stream.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::BusClosed`] if the dispatcher has exited.
    pub fn emit(&self, stream: impl Into<String>, payload: Value) -> Result<(), HostError> {
        self.tx
            .send(BusMsg::Emit(Event::new(stream, payload)))
            .map_err(|_| HostError::BusClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::thread;

    /// Emit then immediately drop the bus; drop joins the dispatcher, so
    /// everything queued before the shutdown message has been delivered.
    fn emit_all_and_drop(bus: EventBus, stream: &str, payloads: &[Value]) {
        for payload in payloads {
            bus.emit(stream, payload.clone()).unwrap();
        }
        drop(bus);
    }

    #[test]
    fn test_listen_then_emit_delivers() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        bus.listen("event", move |e| {
            seen_clone.lock().unwrap().push(e.payload.clone());
        })
        .unwrap();

        emit_all_and_drop(bus, "event", &[json!(1), json!(2)]);
        assert_eq!(*seen.lock().unwrap(), vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_events_on_other_streams_are_not_delivered() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        bus.listen("event", move |e| {
            seen_clone.lock().unwrap().push(e.payload.clone());
        })
        .unwrap();

        bus.emit("other", json!("skip")).unwrap();
        emit_all_and_drop(bus, "event", &[json!("keep")]);
        assert_eq!(*seen.lock().unwrap(), vec![json!("keep")]);
    }

    #[test]
    fn test_sender_emits_from_another_thread() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(0usize));
        let seen_clone = seen.clone();

        bus.listen("event", move |_| {
            *seen_clone.lock().unwrap() += 1;
        })
        .unwrap();

        let sender = bus.sender();
        let producer = thread::spawn(move || {
            for i in 0..10 {
                sender.emit("event", json!(i)).unwrap();
            }
        });
        producer.join().unwrap();
        drop(bus);

        assert_eq!(*seen.lock().unwrap(), 10);
    }

    #[test]
    fn test_sender_fails_after_bus_drop() {
        let bus = EventBus::new();
        let sender = bus.sender();
        // drop() joins the dispatcher, so its receiver is gone afterwards.
        drop(bus);

        assert!(matches!(
            sender.emit("event", json!(0)),
            Err(HostError::BusClosed)
        ));
    }

    #[test]
    fn test_multiple_listeners_each_see_every_event() {
        let bus = EventBus::new();
        let a = Arc::new(Mutex::new(0usize));
        let b = Arc::new(Mutex::new(0usize));

        let a_clone = a.clone();
        bus.listen("event", move |_| *a_clone.lock().unwrap() += 1).unwrap();
        let b_clone = b.clone();
        bus.listen("event", move |_| *b_clone.lock().unwrap() += 1).unwrap();

        emit_all_and_drop(bus, "event", &[json!(1), json!(2), json!(3)]);
        assert_eq!(*a.lock().unwrap(), 3);
        assert_eq!(*b.lock().unwrap(), 3);
    }
}
