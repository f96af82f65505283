//! Screen Listener: the front-end wiring.
//!
//! On attach this invokes the startup host function (fire-and-forget),
//! looks the display surface up once, and subscribes the screen to the
//! event stream. The subscription lives for the lifetime of the bus.

use crate::config::ScreenConfig;
use crate::host::{EventBus, HostError, InvokeActor, ListenerId};
use crate::screen::{EventScreen, SurfaceRegistry};

/// Host function invoked once at attach time.
pub const STARTUP_FUNCTION: &str = "sideband_func";

/// Stream the screen listens on.
pub const EVENT_STREAM: &str = "event";

/// Registry id the display surface is looked up under.
pub const SCREEN_SURFACE: &str = "screen";

/// An attached screen listener.
///
/// Holds nothing but the listener id: there is no detach, mirroring the
/// permanent subscription of the front-end it models.
#[derive(Debug, Clone, Copy)]
pub struct ScreenListener {
    id: ListenerId,
}

impl ScreenListener {
    /// Wire a screen to the host runtime.
    ///
    /// Invokes [`STARTUP_FUNCTION`] fire-and-forget, takes the
    /// [`SCREEN_SURFACE`] surface from the registry (absence is fine and
    /// falls back to diagnostic logging), and registers the event handler
    /// on [`EVENT_STREAM`]. Blocks until the subscription is live: events
    /// emitted after this returns are guaranteed to reach the screen.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::BusClosed`] if the bus dispatcher has exited.
    pub fn attach(
        bus: &EventBus,
        invoker: &InvokeActor,
        registry: &mut SurfaceRegistry,
        config: ScreenConfig,
    ) -> Result<Self, HostError> {
        invoker.invoke(STARTUP_FUNCTION);

        let mut screen = EventScreen::new(registry.take(SCREEN_SURFACE), config);
        let id = bus.listen(EVENT_STREAM, move |event| screen.push(event))?;

        Ok(Self { id })
    }

    /// The id assigned by the bus.
    pub const fn id(&self) -> ListenerId {
        self.id
    }
}
