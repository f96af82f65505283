//! Host runtime: event bus and function invocation.
//!
//! This module implements the host side the front-end talks to, using
//! message-passing over crossbeam channels:
//! - **Dispatch Actor**: owns the handler tables, delivers events serially
//! - **Invoke Actor**: executes named host functions off the caller's thread
//! - **Event Bus**: the public handle producers and listeners share
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      BusMsg       ┌──────────────────┐
//! │  EventBus /  │ ────────────────▶ │ Dispatch Thread  │
//! │ EventSender  │                   │ (handler tables) │
//! └──────────────┘                   └──────────────────┘
//!                                            │
//!                                            │ Event (one at a time)
//!                                            ▼
//!                                      ┌──────────────┐
//!                                      │   Handlers   │
//!                                      └──────────────┘
//!
//! ┌──────────────┐    function name   ┌──────────────────┐
//! │  invoke()    │ ────────────────▶  │  Invoke Thread   │
//! └──────────────┘   (fire & forget)  │ (FunctionRegistry)│
//!                                     └──────────────────┘
//! ```

mod bus;
mod dispatch;
mod invoke;
mod messages;

pub use bus::{EventBus, EventSender, HostError};
pub use dispatch::DispatchActor;
pub use invoke::{FunctionRegistry, HostFn, InvokeActor};
pub use messages::{Event, EventHandler, ListenerId};
