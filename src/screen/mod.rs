//! Display surfaces and the bounded event screen.
//!
//! A [`Surface`] is anywhere rendered lines can accumulate: an in-memory
//! list for tests and embedders, or a real terminal. The [`EventScreen`]
//! sits on top and enforces the line budget.

mod display;
mod render;
mod surface;
mod terminal;

pub use display::EventScreen;
pub use render::render_payload;
pub use surface::{MemorySurface, Surface, SurfaceRegistry};
pub use terminal::TerminalSurface;
