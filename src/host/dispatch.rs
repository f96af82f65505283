//! Dispatch Actor: Dedicated thread for delivering events to handlers.
//!
//! This actor owns the per-stream handler tables. Because it is the only
//! thread that ever calls handlers, delivery is strictly serialized: no two
//! handler invocations interleave, and events on a stream arrive in emit
//! order. Handlers can therefore mutate their captured state without locks.

use super::messages::{BusMsg, EventHandler, ListenerId};
use crossbeam_channel::Receiver;
use std::collections::HashMap;
use std::thread::{self, JoinHandle};

/// Dispatcher actor that delivers bus events.
pub struct DispatchActor {
    /// Handle to the dispatcher thread.
    handle: Option<JoinHandle<()>>,
}

impl DispatchActor {
    /// Spawn the dispatcher thread.
    ///
    /// # Arguments
    ///
    /// * `receiver` - Channel of bus messages from [`EventBus`](super::EventBus) handles.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the dispatcher thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(receiver: Receiver<BusMsg>) -> Self {
        let handle = thread::Builder::new()
            .name("sideband-dispatch".to_string())
            .spawn(move || {
                Self::run_loop(&receiver);
            })
            .expect("Failed to spawn dispatch thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the dispatcher thread to finish.
    ///
    /// The thread exits once it receives [`BusMsg::Shutdown`] or every bus
    /// handle has been dropped.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main dispatch loop.
    fn run_loop(receiver: &Receiver<BusMsg>) {
        let mut handlers: HashMap<String, Vec<(ListenerId, EventHandler)>> = HashMap::new();
        let mut next_id = 0u64;

        while let Ok(msg) = receiver.recv() {
            match msg {
                BusMsg::Emit(event) => {
                    if let Some(stream_handlers) = handlers.get_mut(&event.name) {
                        for (_, handler) in stream_handlers.iter_mut() {
                            handler(&event);
                        }
                    }
                    // No handlers is not an error; the event is dropped.
                }

                BusMsg::Listen {
                    stream,
                    handler,
                    ack,
                } => {
                    let id = ListenerId(next_id);
                    next_id += 1;
                    handlers.entry(stream).or_default().push((id, handler));
                    // The caller blocks on this ack: registration is
                    // complete before listen() returns.
                    let _ = ack.send(id);
                }

                BusMsg::Shutdown => break,
            }
        }
    }
}
