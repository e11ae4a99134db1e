//! Help overlay — keybinding reference.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::action::Action;
use crate::components::{centered_rect, Component};
use crate::theme::Theme;

pub struct HelpComponent {
    pub visible: bool,
}

impl HelpComponent {
    pub fn new() -> Self {
        Self { visible: false }
    }
}

impl Component for HelpComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ToggleHelp => {
                self.visible = !self.visible;
                None
            }
            _ if self.visible && action.is_user_input() => {
                // Any key closes help.
                self.visible = false;
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let dialog = centered_rect(area, 58, 22);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .title(" Help — Keybindings ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::accent()));

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("── Editing sentences ──", Theme::header())),
            key_line("Ctrl+S / Ctrl+Enter", "Analyze"),
            key_line("Ctrl+L", "Clear input and results"),
            key_line("Ctrl+T / Ctrl+R", "Next / previous language"),
            key_line("Ctrl+W", "Delete word"),
            key_line("Enter", "New sentence line"),
            key_line("Esc / Tab", "Focus results"),
            Line::from(""),
            Line::from(Span::styled("── Browsing results ──", Theme::header())),
            key_line("Up / Down / j / k", "Scroll"),
            key_line("Enter / a", "Analyze"),
            key_line("c", "Clear input and results"),
            key_line("[ / ]", "Previous / next language"),
            key_line("Esc / Tab / i", "Focus input"),
            key_line("?", "Toggle this help"),
            key_line("q / Ctrl+C", "Quit"),
        ];

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, dialog);
    }
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<24}", key), Theme::selected()),
        Span::styled(desc, Theme::normal()),
    ])
}
