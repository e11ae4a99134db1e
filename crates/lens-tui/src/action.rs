//! Action enum — the central message bus for the TUI.
//! All user interactions and async results flow through here.

use lens_core::{AnalysisResponse, LensError, Ticket, Trigger};

/// Every possible action that can occur in the application.
#[derive(Debug)]
pub enum Action {
    // ── Global ──────────────────────────────────────────────
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Display a status message in the status bar.
    SetStatus(String),
    /// A tick event for animations.
    Tick,
    /// Move focus between the sentence input and the results region.
    ToggleFocus,

    // ── Analysis cycle ──────────────────────────────────────
    /// Collect the input and submit it.
    Analyze(Trigger),
    /// A submitted cycle came back from the service.
    AnalysisFinished {
        ticket: Ticket,
        outcome: Result<AnalysisResponse, LensError>,
    },
    /// Empty the input and the results region.
    Clear,

    // ── Target language ─────────────────────────────────────
    NextLanguage,
    PrevLanguage,

    // ── Text Input ───────────────────────────────────────────
    /// A character was typed (only sent when in input mode).
    CharInput(char),
    /// Backspace pressed (only sent when in input mode).
    BackspaceInput,
    /// Delete word (Ctrl+W).
    DeleteWord,
    /// Insert a newline (Enter in the sentence input).
    NewlineInput,
    /// Bulk paste from bracketed paste mode (terminal sends entire text at once).
    PasteBulk(String),
    CursorLeft,
    CursorRight,

    // ── Scrolling ───────────────────────────────────────────
    ScrollUp,
    ScrollDown,
}

impl Action {
    /// Whether this action came from the user's keyboard rather than a
    /// timer or a background task.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Action::Tick
                | Action::SetStatus(_)
                | Action::Analyze(Trigger::Startup)
                | Action::AnalysisFinished { .. }
        )
    }
}

/// Whether the app is in a text-input mode where raw keys should
/// be forwarded to the active component instead of interpreted as
/// global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal mode — keys are global shortcuts.
    Normal,
    /// Text input mode — keys go to the sentence input.
    Editing,
}

/// Which region owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Input => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::Input => "Input",
            Focus::Results => "Results",
        }
    }
}
