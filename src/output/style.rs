//! Color capability used by the formatters.
//!
//! Styling is injected as a [`Styler`] rather than read from process-wide
//! state, so whether output is colored is decided once by the caller and
//! passed in.

use colored::control::ShouldColorize;
use colored::Color;

/// Text emphasis for error and warning display.
///
/// Implementations must return `text` unchanged apart from any decoration
/// they add around it.
pub trait Styler {
    /// Emphasizes `text` as an error (bold red for [`AnsiStyler`]).
    fn error(&self, text: &str) -> String;

    /// Emphasizes `text` as a warning (bold yellow for [`AnsiStyler`]).
    fn warning(&self, text: &str) -> String;
}

/// ANSI escape based [`Styler`].
///
/// When `enabled` is `false` every style is a no-op returning the input.
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyler {
    pub enabled: bool,
}

impl AnsiStyler {
    pub fn new(enabled: bool) -> Self {
        AnsiStyler { enabled }
    }

    fn bold(&self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[1;{}m{}\x1b[0m", color.to_fg_str(), text)
    }
}

impl Styler for AnsiStyler {
    fn error(&self, text: &str) -> String {
        self.bold(Color::Red, text)
    }

    fn warning(&self, text: &str) -> String {
        self.bold(Color::Yellow, text)
    }
}

/// When to emit colored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Follow `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a terminal.
    #[default]
    Auto,
    /// Always emit ANSI escapes.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice to a concrete on/off decision.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Auto => ShouldColorize::from_env().should_colorize(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// The [`AnsiStyler`] matching this choice.
    pub fn styler(self) -> AnsiStyler {
        AnsiStyler::new(self.resolve())
    }
}
