//! Color scheme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// The color palette for the sentence-lens TUI.
pub struct Theme;

impl Theme {
    // ── Base colors ─────────────────────────────────────────
    pub fn bg() -> Color {
        Color::Reset
    }

    pub fn fg() -> Color {
        Color::Rgb(200, 200, 200)
    }

    pub fn fg_dim() -> Color {
        Color::Rgb(100, 100, 100)
    }

    pub fn fg_muted() -> Color {
        Color::Rgb(140, 140, 140)
    }

    // ── Accent colors ───────────────────────────────────────
    pub fn accent() -> Color {
        Color::Rgb(110, 170, 255)
    }

    pub fn accent_secondary() -> Color {
        Color::Rgb(180, 130, 240)
    }

    pub fn warning() -> Color {
        Color::Rgb(230, 180, 80)
    }

    pub fn error() -> Color {
        Color::Rgb(240, 80, 80)
    }

    // ── Structural colors ───────────────────────────────────
    pub fn border_color() -> Color {
        Color::Rgb(60, 60, 60)
    }

    /// Card color for a part-of-speech tag. Unknown tags are muted.
    pub fn pos_color(pos: &str) -> Color {
        match pos {
            "NOUN" | "PROPER_NOUN" => Color::Rgb(110, 170, 255),
            "PRONOUN" => Color::Rgb(120, 200, 230),
            "VERB" => Color::Rgb(240, 110, 110),
            "AUXILIARY_VERB" => Color::Rgb(230, 150, 130),
            "ADJECTIVE" | "ADJECTIVE_I" | "ADJECTIVE_NA" | "PRENOUN_ADJECTIVE" => {
                Color::Rgb(80, 200, 120)
            }
            "ADVERB" => Color::Rgb(150, 210, 90),
            "PARTICLE" => Color::Rgb(230, 180, 80),
            "CONJUNCTION" => Color::Rgb(180, 130, 240),
            "INTERJECTION" => Color::Rgb(240, 130, 200),
            "PREFIX" | "SUFFIX" => Color::Rgb(170, 170, 220),
            "SYMBOL" | "PUNCTUATION" => Self::fg_dim(),
            _ => Self::fg_muted(),
        }
    }

    // ── Composite styles ────────────────────────────────────

    pub fn title() -> Style {
        Style::default()
            .fg(Self::accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::fg()).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::fg())
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::fg_dim())
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::fg_muted())
    }

    pub fn border() -> Style {
        Style::default().fg(Self::border_color())
    }

    pub fn focused_border() -> Style {
        Style::default().fg(Self::accent())
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::accent())
    }

    pub fn cursor() -> Style {
        Style::default().fg(Self::bg()).bg(Self::accent())
    }

    pub fn translated() -> Style {
        Style::default()
            .fg(Self::accent_secondary())
            .add_modifier(Modifier::ITALIC)
    }

    pub fn word(pos: &str) -> Style {
        Style::default()
            .fg(Self::pos_color(pos))
            .add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default().fg(Self::warning())
    }

    pub fn error_text() -> Style {
        Style::default().fg(Self::error())
    }
}
