//! Invoke Actor: Dedicated thread for executing named host functions.
//!
//! Callers hand over a function name and move on; the worker thread looks
//! the name up in its registry and runs the function. Return values and
//! failures never travel back to the caller — unknown names and function
//! panics are the worker's problem and end up on the log, not at the call
//! site. This is the explicit ignore-result policy for startup side effects.

use crossbeam_channel::{unbounded, Sender};
use std::collections::HashMap;
use std::thread::{self, JoinHandle};

/// A zero-argument host function. The return value is discarded.
pub type HostFn = Box<dyn FnMut() + Send>;

/// Registry of named zero-argument host functions.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, HostFn>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, function: impl FnMut() + Send + 'static) {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Worker actor that executes host function invocations.
///
/// The worker exits once every handle to its request channel is gone, so
/// dropping the actor is enough to wind it down.
pub struct InvokeActor {
    /// Request channel into the worker. `None` once joined.
    tx: Option<Sender<String>>,
    /// Handle to the worker thread.
    handle: Option<JoinHandle<()>>,
}

impl InvokeActor {
    /// Spawn the worker thread over a registry.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the worker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(registry: FunctionRegistry) -> Self {
        let (tx, rx) = unbounded::<String>();

        let handle = thread::Builder::new()
            .name("sideband-invoke".to_string())
            .spawn(move || {
                let mut functions = registry.functions;
                while let Ok(name) = rx.recv() {
                    match functions.get_mut(&name) {
                        Some(function) => function(),
                        None => log::warn!("invoke: unknown host function '{name}'"),
                    }
                }
            })
            .expect("Failed to spawn invoke thread");

        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Invoke a named function, fire-and-forget.
    ///
    /// Returns immediately. Unknown names are logged by the worker; a dead
    /// worker makes this a no-op. Nothing about the function's outcome is
    /// observable here.
    pub fn invoke(&self, name: impl Into<String>) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(name.into());
        }
    }

    /// Wait for the worker to drain its queue and finish.
    pub fn join(mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
