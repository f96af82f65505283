//! Configuration for the event screen.
//!
//! The two historical front-end variants differed only in their line budget
//! and whether double quotes were stripped from rendered payloads. Neither
//! is canonical, so both knobs are plain configuration here.

use serde::{Deserialize, Serialize};

/// Configuration for an [`EventScreen`](crate::EventScreen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Line budget. Once the number of appended lines strictly exceeds this,
    /// the screen is cleared in full and the counter resets to zero.
    pub max_lines: usize,
    /// Whether to strip all `"` characters from rendered payloads.
    pub strip_quotes: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            max_lines: 22,
            strip_quotes: false,
        }
    }
}

impl ScreenConfig {
    /// The alternate variant: a taller budget with quote stripping.
    pub const fn compact() -> Self {
        Self {
            max_lines: 33,
            strip_quotes: true,
        }
    }

    /// Override the line budget.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Override quote stripping.
    #[must_use]
    pub const fn with_strip_quotes(mut self, strip_quotes: bool) -> Self {
        self.strip_quotes = strip_quotes;
        self
    }
}
