//! Results region: draws a [`ResultsView`] as sentence blocks of word cards.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use lens_core::render::{
    ResultsView, SentenceBlock, WordCard, LOADING_MESSAGE, NO_RESULTS_MESSAGE,
};

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

/// Braille spinner frames.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultsViewComponent {
    view: ResultsView,
    /// First visible line.
    scroll: u16,
    /// Whether the results region owns the keyboard.
    pub focused: bool,
    spinner_tick: usize,
}

impl ResultsViewComponent {
    pub fn new() -> Self {
        Self {
            view: ResultsView::Empty,
            scroll: 0,
            focused: false,
            spinner_tick: 0,
        }
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    /// Replace the whole region and scroll back to the top.
    pub fn set_view(&mut self, view: ResultsView) {
        self.view = view;
        self.scroll = 0;
    }

    fn lines(&self) -> Vec<Line<'_>> {
        match &self.view {
            ResultsView::Empty => vec![Line::from(Span::styled(
                "Results will appear here.",
                Theme::dim(),
            ))],
            ResultsView::Loading => vec![Line::from(Span::styled(
                format!(
                    "{} {}",
                    SPINNER[self.spinner_tick % SPINNER.len()],
                    LOADING_MESSAGE
                ),
                Theme::loading(),
            ))],
            ResultsView::NoResults => vec![Line::from(Span::styled(
                NO_RESULTS_MESSAGE,
                Theme::error_text(),
            ))],
            ResultsView::Error { message } => vec![Line::from(Span::styled(
                message.as_str(),
                Theme::error_text(),
            ))],
            ResultsView::Sentences(blocks) => {
                let mut lines = Vec::new();
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::from(""));
                    }
                    sentence_lines(block, &mut lines);
                }
                lines
            }
        }
    }
}

fn sentence_lines<'a>(block: &'a SentenceBlock, lines: &mut Vec<Line<'a>>) {
    lines.push(Line::from(Span::styled(
        block.original.as_str(),
        Theme::header(),
    )));
    lines.push(Line::from(vec![
        Span::styled("→ ", Theme::dim()),
        Span::styled(block.translated.as_str(), Theme::translated()),
    ]));
    for card in &block.cards {
        card_lines(card, lines);
    }
}

fn card_lines<'a>(card: &'a WordCard, lines: &mut Vec<Line<'a>>) {
    let bar_style = Theme::word(&card.pos_key);

    let mut head = vec![
        Span::styled("  ▌ ", bar_style),
        Span::styled(card.word.as_str(), bar_style),
    ];
    if let Some(ref transliteration) = card.transliteration {
        head.push(Span::styled(format!("  {transliteration}"), Theme::muted()));
    }
    lines.push(Line::from(head));

    if let Some(ref translation) = card.translation {
        lines.push(Line::from(vec![
            Span::styled("  ▌ ", bar_style),
            Span::styled(translation.as_str(), Theme::normal()),
        ]));
    }

    for row in &card.details {
        lines.push(Line::from(vec![
            Span::styled("  ▌   ", bar_style),
            Span::styled(format!("{}: ", row.kind.label()), Theme::muted()),
            Span::styled(row.value.as_str(), Theme::normal()),
        ]));
    }
}

impl Component for ResultsViewComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::Tick => {
                if self.view == ResultsView::Loading {
                    self.spinner_tick = self.spinner_tick.wrapping_add(1);
                }
            }
            Action::ScrollUp if self.focused => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::ScrollDown if self.focused => {
                let max = self.lines().len().saturating_sub(1) as u16;
                self.scroll = (self.scroll + 1).min(max);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.view {
            ResultsView::Sentences(blocks) => format!(
                " Results ({} sentence{}, {} words) ",
                blocks.len(),
                if blocks.len() == 1 { "" } else { "s" },
                self.view.card_count()
            ),
            _ => " Results ".to_string(),
        };

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

        let paragraph = Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
