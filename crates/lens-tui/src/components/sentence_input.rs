//! Multi-line sentence input. One sentence per line; blank lines are
//! ignored when the input is collected.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

/// Rough viewport height used to keep the cursor visible between renders.
const ESTIMATED_VIEWPORT: usize = 4;

pub struct SentenceInputComponent {
    text: String,
    /// Cursor position (byte offset) within `text`.
    cursor: usize,
    /// Line number of the first visible line.
    scroll: usize,
    /// Whether the input owns the keyboard.
    pub focused: bool,
}

impl SentenceInputComponent {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            scroll: 0,
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
        self.scroll = 0;
        self.ensure_cursor_visible();
    }

    /// Clamp cursor to valid range.
    fn clamp_cursor(&mut self) {
        if self.cursor > self.text.len() {
            self.cursor = self.text.len();
        }
    }

    fn insert_str(&mut self, s: &str) {
        self.clamp_cursor();
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.ensure_cursor_visible();
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        self.clamp_cursor();
        let prev = self.prev_boundary();
        if let Some(prev) = prev {
            self.text.remove(prev);
            self.cursor = prev;
        }
        self.ensure_cursor_visible();
    }

    /// Byte offset of the character before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    /// Delete the word before the cursor (Ctrl+W). Stops at line breaks.
    fn delete_word(&mut self) {
        self.clamp_cursor();
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end_matches([' ', '\t']);
        let start = trimmed
            .rfind([' ', '\t', '\n'])
            .map(|p| p + 1)
            .unwrap_or(0);
        // Directly after a newline: delete just the newline.
        let start = if start == self.cursor {
            self.prev_boundary().unwrap_or(0)
        } else {
            start
        };
        self.text.drain(start..self.cursor);
        self.cursor = start;
        self.ensure_cursor_visible();
    }

    fn cursor_left(&mut self) {
        self.clamp_cursor();
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    fn cursor_right(&mut self) {
        self.clamp_cursor();
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Line number and byte column of the cursor.
    fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor.min(self.text.len())];
        let line = before.matches('\n').count();
        let col = before
            .rfind('\n')
            .map(|p| self.cursor - p - 1)
            .unwrap_or(self.cursor);
        (line, col)
    }

    /// Move the cursor to `line`, keeping the column where possible.
    fn move_to_line(&mut self, line: usize, col: usize) {
        let lines: Vec<&str> = self.text.split('\n').collect();
        let Some(target) = lines.get(line) else {
            return;
        };
        let start: usize = lines[..line].iter().map(|l| l.len() + 1).sum();
        // Land on a char boundary at or before the requested column.
        let col = target
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(target.len()))
            .take_while(|&i| i <= col)
            .last()
            .unwrap_or(0);
        self.cursor = start + col;
        self.ensure_cursor_visible();
    }

    fn cursor_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line > 0 {
            self.move_to_line(line - 1, col);
        }
    }

    fn cursor_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        self.move_to_line(line + 1, col);
    }

    fn ensure_cursor_visible(&mut self) {
        let (line, _) = self.cursor_line_col();
        if line < self.scroll {
            self.scroll = line;
        }
        if line >= self.scroll + ESTIMATED_VIEWPORT {
            self.scroll = line + 1 - ESTIMATED_VIEWPORT;
        }
    }

    fn line_with_cursor<'a>(&self, line: &'a str, col: usize) -> Line<'a> {
        let col = col.min(line.len());
        let (before, after) = line.split_at(col);
        let mut chars = after.chars();
        let cursor_char = chars.next().map(String::from).unwrap_or_else(|| " ".into());
        Line::from(vec![
            Span::styled(before, Theme::normal()),
            Span::styled(cursor_char, Theme::cursor()),
            Span::styled(chars.as_str(), Theme::normal()),
        ])
    }
}

impl Component for SentenceInputComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        if !self.focused {
            return None;
        }
        match action {
            Action::CharInput(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
            Action::NewlineInput => self.insert_str("\n"),
            Action::PasteBulk(text) => self.insert_str(&text.replace("\r\n", "\n")),
            Action::BackspaceInput => self.delete_char(),
            Action::DeleteWord => self.delete_word(),
            Action::CursorLeft => self.cursor_left(),
            Action::CursorRight => self.cursor_right(),
            Action::ScrollUp => self.cursor_up(),
            Action::ScrollDown => self.cursor_down(),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let sentence_count = self.text.lines().filter(|l| !l.trim().is_empty()).count();
        let title = format!(
            " Sentences ({} sentence{}) ",
            sentence_count,
            if sentence_count == 1 { "" } else { "s" }
        );

        let block = Block::default()
            .title(title)
            .title_style(if self.focused {
                Theme::key_hint()
            } else {
                Theme::muted()
            })
            .borders(Borders::ALL)
            .border_style(if self.focused {
                Theme::focused_border()
            } else {
                Theme::border()
            });

        let viewport = block.inner(area).height as usize;

        if self.text.is_empty() && !self.focused {
            let placeholder = Paragraph::new(Span::styled(
                "Type or paste sentences, one per line.",
                Theme::dim(),
            ))
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let (cursor_line, cursor_col) = self.cursor_line_col();

        // Keep the cursor inside the real viewport.
        let mut scroll = self.scroll;
        if viewport > 0 && cursor_line >= scroll + viewport {
            scroll = cursor_line + 1 - viewport;
        }
        if cursor_line < scroll {
            scroll = cursor_line;
        }

        let lines: Vec<Line> = self
            .text
            .split('\n')
            .enumerate()
            .skip(scroll)
            .take(viewport)
            .map(|(i, line)| {
                if self.focused && i == cursor_line {
                    self.line_with_cursor(line, cursor_col)
                } else {
                    Line::from(Span::styled(line, Theme::normal()))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::screen;

    fn typed(text: &str) -> SentenceInputComponent {
        let mut input = SentenceInputComponent::new();
        for c in text.chars() {
            let action = if c == '\n' {
                Action::NewlineInput
            } else {
                Action::CharInput(c)
            };
            input.handle_action(&action);
        }
        input
    }

    #[test]
    fn typing_multibyte_text_keeps_cursor_on_boundaries() {
        let mut input = typed("本を読む");
        input.handle_action(&Action::BackspaceInput);
        assert_eq!(input.text(), "本を読");
        input.handle_action(&Action::CursorLeft);
        input.handle_action(&Action::CharInput('x'));
        assert_eq!(input.text(), "本をx読");
    }

    #[test]
    fn delete_word_stops_at_line_start() {
        let mut input = typed("first line\nsecond word");
        input.handle_action(&Action::DeleteWord);
        assert_eq!(input.text(), "first line\nsecond ");
        input.handle_action(&Action::DeleteWord);
        assert_eq!(input.text(), "first line\n");
        input.handle_action(&Action::DeleteWord);
        assert_eq!(input.text(), "first line");
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let mut input = typed("long line here\nab");
        input.handle_action(&Action::ScrollUp);
        input.handle_action(&Action::CharInput('!'));
        assert_eq!(input.text(), "lo!ng line here\nab");
    }

    #[test]
    fn paste_normalizes_crlf() {
        let mut input = SentenceInputComponent::new();
        input.handle_action(&Action::PasteBulk("a\r\nb".into()));
        assert_eq!(input.text(), "a\nb");
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = typed("abc");
        input.focused = false;
        input.handle_action(&Action::CharInput('d'));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn title_counts_non_blank_lines() {
        let mut input = SentenceInputComponent::new();
        input.set_text("one\n\ntwo\n");
        assert!(screen(&input, 40, 6).contains("Sentences (2 sentences)"));
    }
}
