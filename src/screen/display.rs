//! Event Screen: the bounded event-log display.
//!
//! Appends one rendered line per event and wipes the whole surface once the
//! line budget is exceeded. This is a total truncation, not a ring buffer:
//! past the budget the display is visibly empty until the next line lands.

use crate::config::ScreenConfig;
use crate::host::Event;
use crate::screen::render::render_payload;
use crate::screen::surface::Surface;

/// A bounded event-log display.
///
/// Invariant: [`line_count`](Self::line_count) always equals the number of
/// lines appended since the last clear. The screen is driven from a single
/// dispatcher thread, so append-then-clear is atomic from the handler's
/// point of view.
pub struct EventScreen {
    /// The surface lines land on. `None` degrades to diagnostic logging.
    surface: Option<Box<dyn Surface>>,
    /// Lines appended since the last clear.
    lines: usize,
    /// Configuration.
    config: ScreenConfig,
}

impl EventScreen {
    /// Create a screen over an optional surface.
    ///
    /// With no surface, every pushed event goes to the `log` facade instead
    /// of a display; this is the graceful path for an absent surface, not a
    /// failure.
    pub fn new(surface: Option<Box<dyn Surface>>, config: ScreenConfig) -> Self {
        if surface.is_none() {
            log::info!("screen: no display surface, falling back to diagnostic logging");
        }
        Self {
            surface,
            lines: 0,
            config,
        }
    }

    /// Push one event onto the screen.
    ///
    /// Renders the payload, appends it as a line, and clears everything if
    /// the line count now exceeds the budget. Surface I/O failures are
    /// logged and swallowed; the display is best-effort.
    pub fn push(&mut self, event: &Event) {
        let Some(surface) = self.surface.as_mut() else {
            log::info!("screen: {event:?}");
            return;
        };

        let line = render_payload(&event.payload, self.config.strip_quotes);
        if let Err(err) = surface.append_line(&line) {
            log::error!("screen: append failed: {err}");
        }
        self.lines += 1;

        if self.lines > self.config.max_lines {
            if let Err(err) = surface.clear() {
                log::error!("screen: clear failed: {err}");
            }
            self.lines = 0;
        }
    }

    /// Lines appended since the last clear.
    pub const fn line_count(&self) -> usize {
        self.lines
    }

    /// Whether a display surface is attached.
    pub const fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// The active configuration.
    pub const fn config(&self) -> ScreenConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::surface::MemorySurface;
    use serde_json::json;

    fn screen_over(surface: &MemorySurface, config: ScreenConfig) -> EventScreen {
        EventScreen::new(Some(Box::new(surface.clone())), config)
    }

    #[test]
    fn test_push_appends_in_order() {
        let surface = MemorySurface::new();
        let mut screen = screen_over(&surface, ScreenConfig::default());

        for k in 1..=3 {
            screen.push(&Event::new("event", json!({"i": k})));
        }

        assert_eq!(screen.line_count(), 3);
        assert_eq!(
            surface.lines(),
            vec![r#"{"i":1}"#, r#"{"i":2}"#, r#"{"i":3}"#]
        );
    }

    #[test]
    fn test_overflow_clears_everything() {
        let surface = MemorySurface::new();
        let config = ScreenConfig::default().with_max_lines(22);
        let mut screen = screen_over(&surface, config);

        for k in 1..=22 {
            screen.push(&Event::new("event", json!({"i": k})));
        }
        assert_eq!(screen.line_count(), 22);
        assert_eq!(surface.len(), 22);
        assert_eq!(surface.lines()[0], r#"{"i":1}"#);
        assert_eq!(surface.lines()[21], r#"{"i":22}"#);

        // The 23rd line trips the budget: total wipe, counter reset.
        screen.push(&Event::new("event", json!({"i": 23})));
        assert_eq!(screen.line_count(), 0);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_display_refills_after_clear() {
        let surface = MemorySurface::new();
        let mut screen = screen_over(&surface, ScreenConfig::default().with_max_lines(2));

        for k in 1..=3 {
            screen.push(&Event::new("event", json!(k)));
        }
        assert!(surface.is_empty());

        screen.push(&Event::new("event", json!(4)));
        assert_eq!(screen.line_count(), 1);
        assert_eq!(surface.lines(), vec!["4"]);
    }

    #[test]
    fn test_strip_quotes_variant() {
        let surface = MemorySurface::new();
        let mut screen = screen_over(&surface, ScreenConfig::compact());

        screen.push(&Event::new("event", json!({"msg": "hi \"there\""})));
        for line in surface.lines() {
            assert!(!line.contains('"'));
        }
    }

    #[test]
    fn test_missing_surface_degrades_without_panicking() {
        let mut screen = EventScreen::new(None, ScreenConfig::default());
        assert!(!screen.has_surface());

        for k in 0..100 {
            screen.push(&Event::new("event", json!({"i": k})));
        }
        // Nothing rendered, nothing counted; payloads went to the log.
        assert_eq!(screen.line_count(), 0);
    }
}
