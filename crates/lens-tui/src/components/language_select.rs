//! Target-language selector: a single line cycling through the built-in
//! language list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use lens_core::language::{self, TARGET_LANGUAGES};

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Listed(usize),
    /// A configured code the built-in list doesn't know.
    Custom(String),
}

pub struct LanguageSelectComponent {
    selection: Selection,
}

impl LanguageSelectComponent {
    /// Start on `code`. Unlisted codes are kept as they are.
    pub fn new(code: &str) -> Self {
        let selection = match language::index_of(code) {
            Some(i) => Selection::Listed(i),
            None => Selection::Custom(code.to_string()),
        };
        Self { selection }
    }

    /// Code sent with the request.
    pub fn code(&self) -> &str {
        match &self.selection {
            Selection::Listed(i) => TARGET_LANGUAGES[*i].code,
            Selection::Custom(code) => code,
        }
    }

    /// Display name; unlisted codes show the code itself.
    pub fn name(&self) -> &str {
        match &self.selection {
            Selection::Listed(i) => TARGET_LANGUAGES[*i].name,
            Selection::Custom(code) => code,
        }
    }

    fn step(&mut self, forward: bool) {
        let len = TARGET_LANGUAGES.len();
        let next = match self.selection {
            Selection::Listed(i) if forward => (i + 1) % len,
            Selection::Listed(i) => (i + len - 1) % len,
            // Leaving a custom code enters the list at either end.
            Selection::Custom(_) if forward => 0,
            Selection::Custom(_) => len - 1,
        };
        self.selection = Selection::Listed(next);
    }
}

impl Component for LanguageSelectComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        let forward = match action {
            Action::NextLanguage => true,
            Action::PrevLanguage => false,
            _ => return None,
        };
        self.step(forward);
        Some(Action::SetStatus(format!(
            "Target language: {} ({})",
            self.name(),
            self.code()
        )))
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("  Translate to ", Theme::muted()),
            Span::styled("◂ ", Theme::key_hint()),
            Span::styled(self.name(), Theme::selected()),
            Span::styled(format!(" ({})", self.code()), Theme::dim()),
            Span::styled(" ▸", Theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::screen;

    #[test]
    fn cycling_wraps_in_both_directions() {
        let mut select = LanguageSelectComponent::new("en");
        select.handle_action(&Action::PrevLanguage);
        assert_eq!(select.code(), "id");
        select.handle_action(&Action::NextLanguage);
        select.handle_action(&Action::NextLanguage);
        assert_eq!(select.code(), "es");
    }

    #[test]
    fn unlisted_start_code_is_kept() {
        let select = LanguageSelectComponent::new("eo");
        assert_eq!(select.code(), "eo");
        assert!(screen(&select, 40, 1).contains("eo (eo)"));
    }

    #[test]
    fn leaving_unlisted_code_enters_the_list() {
        let mut select = LanguageSelectComponent::new("eo");
        select.handle_action(&Action::NextLanguage);
        assert_eq!(select.code(), "en");

        let mut select = LanguageSelectComponent::new("eo");
        select.handle_action(&Action::PrevLanguage);
        assert_eq!(select.code(), "id");
    }

    #[test]
    fn change_reports_status() {
        let mut select = LanguageSelectComponent::new("ja");
        let action = select.handle_action(&Action::NextLanguage);
        assert!(matches!(
            action,
            Some(Action::SetStatus(ref msg)) if msg == "Target language: Korean (ko)"
        ));
    }
}
