//! The terminal's page elements, bound to the core session through [`Page`].

use lens_core::{Capabilities, Page, ResultsView};

use crate::components::language_select::LanguageSelectComponent;
use crate::components::notice::NoticeComponent;
use crate::components::results_view::ResultsViewComponent;
use crate::components::sentence_input::SentenceInputComponent;

pub struct TerminalPage {
    pub input: SentenceInputComponent,
    /// Absent when the target language is not selectable.
    pub language: Option<LanguageSelectComponent>,
    pub results: ResultsViewComponent,
    pub notice: NoticeComponent,
}

impl TerminalPage {
    pub fn new(caps: &Capabilities, default_language: &str) -> Self {
        Self {
            input: SentenceInputComponent::new(),
            language: caps
                .target_language_selectable
                .then(|| LanguageSelectComponent::new(default_language)),
            results: ResultsViewComponent::new(),
            notice: NoticeComponent::new(),
        }
    }
}

impl Page for TerminalPage {
    fn sentence_text(&self) -> String {
        self.input.text().to_string()
    }

    fn set_sentence_text(&mut self, text: &str) {
        self.input.set_text(text);
    }

    fn target_language(&self) -> Option<String> {
        self.language
            .as_ref()
            .map(|select| select.code().to_string())
    }

    fn show_results(&mut self, view: ResultsView) {
        self.results.set_view(view);
    }

    fn notify(&mut self, message: &str) {
        self.notice.show(message);
    }
}
