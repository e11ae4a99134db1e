//! Pure mapping from an analysis response to the results region's content.
//!
//! The front ends draw a [`ResultsView`]; nothing here touches a terminal.

use std::fmt::Write as _;

use crate::config::Capabilities;
use crate::model::{AnalysisResponse, SentenceResult, WordAnalysis};

pub const LOADING_MESSAGE: &str = "Analyzing sentences...";
pub const NO_RESULTS_MESSAGE: &str = "No results returned.";
pub const ERROR_MESSAGE: &str =
    "Error analyzing sentences. Please check if the server is running and try again.";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one sentence.";

/// Everything the results region can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    /// Nothing: initial state, or after a clear.
    #[default]
    Empty,
    Loading,
    NoResults,
    Error { message: String },
    Sentences(Vec<SentenceBlock>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBlock {
    pub original: String,
    pub translated: String,
    pub cards: Vec<WordCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCard {
    pub word: String,
    /// Part-of-speech tag, used as the card's style key.
    pub pos_key: String,
    pub transliteration: Option<String>,
    pub translation: Option<String>,
    pub details: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub kind: DetailKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    PartOfSpeech,
    Role,
    Particle,
    VerbForm,
    Honorific,
    Category,
}

impl DetailKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetailKind::PartOfSpeech => "POS",
            DetailKind::Role => "Role",
            DetailKind::Particle => "Particle",
            DetailKind::VerbForm => "Verb Form",
            DetailKind::Honorific => "Honorific",
            DetailKind::Category => "Category",
        }
    }
}

impl ResultsView {
    pub fn error(message: impl Into<String>) -> Self {
        ResultsView::Error {
            message: message.into(),
        }
    }

    /// Number of word cards across all sentence blocks.
    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Sentences(blocks) => blocks.iter().map(|b| b.cards.len()).sum(),
            _ => 0,
        }
    }

    /// Plain-text rendering for non-interactive output.
    pub fn to_text(&self) -> String {
        match self {
            ResultsView::Empty => String::new(),
            ResultsView::Loading => format!("{LOADING_MESSAGE}\n"),
            ResultsView::NoResults => format!("{NO_RESULTS_MESSAGE}\n"),
            ResultsView::Error { message } => format!("{message}\n"),
            ResultsView::Sentences(blocks) => {
                let mut out = String::new();
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    block.write_text(&mut out);
                }
                out
            }
        }
    }
}

impl SentenceBlock {
    fn write_text(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.original);
        let _ = writeln!(out, "  → {}", self.translated);
        for card in &self.cards {
            let _ = write!(out, "  • {}", card.word);
            if let Some(ref t) = card.transliteration {
                let _ = write!(out, " [{t}]");
            }
            if let Some(ref t) = card.translation {
                let _ = write!(out, " — {t}");
            }
            out.push('\n');
            for row in &card.details {
                let _ = writeln!(out, "      {}: {}", row.kind.label(), row.value);
            }
        }
    }
}

/// Build the view for a successful response.
pub fn render(response: &AnalysisResponse, caps: &Capabilities) -> ResultsView {
    if response.results.is_empty() {
        return ResultsView::NoResults;
    }
    ResultsView::Sentences(
        response
            .results
            .iter()
            .map(|result| sentence_block(result, caps))
            .collect(),
    )
}

pub fn sentence_block(result: &SentenceResult, caps: &Capabilities) -> SentenceBlock {
    SentenceBlock {
        original: result.original.clone(),
        translated: result.translated.clone(),
        cards: result
            .analysis
            .iter()
            .map(|word| word_card(word, caps))
            .collect(),
    }
}

pub fn word_card(word: &WordAnalysis, caps: &Capabilities) -> WordCard {
    let mut details = vec![
        row(DetailKind::PartOfSpeech, &word.part_of_speech),
        row(DetailKind::Role, &word.syntax_role),
    ];
    if let Some(particle) = word.particle() {
        details.push(row(DetailKind::Particle, particle));
    }
    if let Some(form) = word.verb_form() {
        details.push(row(DetailKind::VerbForm, form));
    }
    if let Some(level) = word.honorific() {
        details.push(row(DetailKind::Honorific, level));
    }
    details.push(row(DetailKind::Category, &word.semantic_category));

    WordCard {
        word: word.word.clone(),
        pos_key: word.part_of_speech.clone(),
        transliteration: caps
            .show_transliteration
            .then(|| word.transliteration())
            .flatten()
            .map(str::to_string),
        translation: word.translation().map(str::to_string),
        details,
    }
}

fn row(kind: DetailKind, value: &str) -> DetailRow {
    DetailRow {
        kind,
        value: value.to_string(),
    }
}
