//! UI state types shared by the engine and the TUI.
//!
//! Pure data with no IO, no async, no ratatui dependency.

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for neurons, arrows and buttons.
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable highlight fades.
    pub reduced_motion: bool,
}
