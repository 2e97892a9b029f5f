/// ANSI color helper utilities for terminal output.
use crate::models::{Profitability, Theme};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";

/// Colours used to render verdicts and amounts under a theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub good: &'static str,
    pub medium: &'static str,
    pub bad: &'static str,
    pub muted: &'static str,
}

impl Palette {
    /// Dark terminals get the bright half of the palette.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                good: GREEN,
                medium: YELLOW,
                bad: RED,
                muted: GREY,
            },
            Theme::Dark => Palette {
                good: BRIGHT_GREEN,
                medium: BRIGHT_YELLOW,
                bad: BRIGHT_RED,
                muted: GREY,
            },
        }
    }

    pub fn for_profitability(&self, p: Profitability) -> &'static str {
        match p {
            Profitability::Good => self.good,
            Profitability::Medium => self.medium,
            Profitability::Bad => self.bad,
            Profitability::None => self.muted,
        }
    }

    /// Negative amounts in the "bad" colour, positive in "good", zero plain.
    pub fn for_amount(&self, value: f64) -> &'static str {
        if value > 0.0 {
            self.good
        } else if value < 0.0 {
            self.bad
        } else {
            RESET
        }
    }

    pub fn paint(&self, color: &str, value: &str) -> String {
        format!("{color}{value}{RESET}")
    }
}
