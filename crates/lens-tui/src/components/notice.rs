//! Blocking notice overlay. Stays up until the user presses a key.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::action::Action;
use crate::components::{centered_rect, Component};
use crate::theme::Theme;

pub struct NoticeComponent {
    message: Option<String>,
}

impl NoticeComponent {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn show(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    pub fn visible(&self) -> bool {
        self.message.is_some()
    }
}

impl Component for NoticeComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        if self.visible() && action.is_user_input() && !matches!(action, Action::Quit) {
            self.message = None;
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(ref message) = self.message else {
            return;
        };

        let width = (message.chars().count() as u16 + 6).clamp(30, area.width.max(30));
        let dialog = centered_rect(area, width, 6);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .title(" Notice ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::focused_border());

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(format!(" {message}"), Theme::normal())),
            Line::from(""),
            Line::from(Span::styled(" press any key", Theme::dim())),
        ];
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
            dialog,
        );
    }
}
