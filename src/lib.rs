//! # Sideband Screen
//!
//! A bounded event-log display over a host event bus.
//!
//! The crate has two halves: a small host runtime (named event streams with
//! strictly serialized delivery, plus fire-and-forget invocation of named
//! host functions) and the display component that consumes it (a screen that
//! appends each rendered payload as a line and wipes itself once a line
//! budget is exceeded).
//!
//! ## Core Concepts
//!
//! - **Serialized delivery**: one dispatcher thread calls handlers one event
//!   at a time, in arrival order
//! - **Blocking registration**: `listen` returns once the subscription is
//!   live on the dispatcher
//! - **Total truncation**: the screen clears completely past `max_lines`;
//!   it is not a ring buffer
//! - **Graceful degradation**: a missing display surface routes payloads to
//!   the `log` facade instead of failing
//!
//! ## Example
//!
//! ```rust,ignore
//! use sideband_screen::{EventBus, ScreenConfig, ScreenListener, SurfaceRegistry};
//!
//! let bus = EventBus::new();
//! let mut registry = SurfaceRegistry::new();
//! let listener = ScreenListener::attach(&bus, &invoker, &mut registry, ScreenConfig::default())?;
//!
//! bus.emit("event", serde_json::json!({"i": 1}))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod host;
pub mod listener;
pub mod screen;

// Re-exports for convenience
pub use config::ScreenConfig;
pub use host::{Event, EventBus, EventSender, FunctionRegistry, HostError, InvokeActor, ListenerId};
pub use listener::{ScreenListener, EVENT_STREAM, SCREEN_SURFACE, STARTUP_FUNCTION};
pub use screen::{EventScreen, MemorySurface, Surface, SurfaceRegistry, TerminalSurface};
