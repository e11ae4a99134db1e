//! Analysis cycle orchestration: collect, show loading, apply the outcome.
//!
//! A [`Session`] drives any [`Page`] passed to it. Every cycle gets a
//! [`Ticket`] carrying an epoch; only the ticket of the most recently started
//! cycle may write to the results region. A response for a superseded ticket
//! is dropped even if it arrives last.

use tracing::{debug, error, info};

use crate::collector;
use crate::config::Capabilities;
use crate::error::{LensError, Result};
use crate::model::{AnalysisRequest, AnalysisResponse};
use crate::render::{self, ResultsView, EMPTY_INPUT_MESSAGE, ERROR_MESSAGE};

/// The page elements the session reads from and writes to.
pub trait Page {
    /// Raw contents of the sentence input.
    fn sentence_text(&self) -> String;

    fn set_sentence_text(&mut self, text: &str);

    /// Selected target language, or `None` when the page has no selector.
    fn target_language(&self) -> Option<String>;

    /// Replace the whole results region.
    fn show_results(&mut self, view: ResultsView);

    /// Blocking notice the user must acknowledge.
    fn notify(&mut self, message: &str);
}

/// What started a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Manual,
    /// The one automatic cycle shortly after startup.
    Startup,
}

/// An in-flight cycle. Hand it back to [`Session::finish`] with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub trigger: Trigger,
    pub request: AnalysisRequest,
}

/// Result of [`Session::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Failed,
    /// A newer cycle (or a clear) started after this ticket; nothing changed.
    Superseded,
}

pub struct Session {
    caps: Capabilities,
    default_language: String,
    epoch: u64,
}

impl Session {
    pub fn new(caps: Capabilities, default_language: impl Into<String>) -> Self {
        Self {
            caps,
            default_language: default_language.into(),
            epoch: 0,
        }
    }

    /// Epoch of the most recent cycle or clear. Zero until the first one.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a cycle: collect the input and put the results region into
    /// its loading state.
    ///
    /// Empty input notifies the page and returns [`LensError::EmptyInput`]
    /// without touching the results region. A startup trigger that arrives
    /// after the user already started a cycle or cleared yields `Ok(None)`.
    pub fn begin<P: Page>(&mut self, page: &mut P, trigger: Trigger) -> Result<Option<Ticket>> {
        if trigger == Trigger::Startup && self.epoch > 0 {
            debug!(epoch = self.epoch, "Skipping startup analysis, already active");
            return Ok(None);
        }

        let selected = if self.caps.target_language_selectable {
            page.target_language()
        } else {
            None
        };

        let request = match collector::collect(
            &page.sentence_text(),
            selected.as_deref(),
            &self.default_language,
        ) {
            Ok(request) => request,
            Err(LensError::EmptyInput) => {
                page.notify(EMPTY_INPUT_MESSAGE);
                return Err(LensError::EmptyInput);
            }
            Err(e) => return Err(e),
        };

        self.epoch += 1;
        page.show_results(ResultsView::Loading);
        info!(
            epoch = self.epoch,
            ?trigger,
            sentences = request.sentences.len(),
            lang = %request.target_language,
            "Starting analysis cycle"
        );

        Ok(Some(Ticket {
            epoch: self.epoch,
            trigger,
            request,
        }))
    }

    /// Apply the outcome of a cycle, unless it has been superseded.
    pub fn finish<P: Page>(
        &mut self,
        page: &mut P,
        ticket: &Ticket,
        outcome: Result<AnalysisResponse>,
    ) -> Applied {
        if ticket.epoch != self.epoch {
            debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "Discarding superseded analysis result"
            );
            return Applied::Superseded;
        }

        match outcome {
            Ok(response) => {
                debug!(
                    epoch = ticket.epoch,
                    results = response.results.len(),
                    "Rendering analysis results"
                );
                page.show_results(render::render(&response, &self.caps));
                Applied::Rendered
            }
            Err(e) => {
                error!(epoch = ticket.epoch, "Analysis failed: {}", e);
                page.show_results(ResultsView::error(ERROR_MESSAGE));
                Applied::Failed
            }
        }
    }

    /// Empty the input and the results region. In-flight cycles are
    /// superseded.
    pub fn clear<P: Page>(&mut self, page: &mut P) {
        self.epoch += 1;
        page.set_sentence_text("");
        page.show_results(ResultsView::Empty);
        debug!(epoch = self.epoch, "Cleared input and results");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SentenceResult;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakePage {
        text: String,
        selector: Option<String>,
        results: ResultsView,
        history: Vec<ResultsView>,
        notices: Vec<String>,
    }

    impl FakePage {
        fn with_text(text: &str) -> Self {
            Self {
                text: text.to_string(),
                ..Default::default()
            }
        }
    }

    impl Page for FakePage {
        fn sentence_text(&self) -> String {
            self.text.clone()
        }
        fn set_sentence_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
        fn target_language(&self) -> Option<String> {
            self.selector.clone()
        }
        fn show_results(&mut self, view: ResultsView) {
            self.history.push(view.clone());
            self.results = view;
        }
        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn response(original: &str) -> AnalysisResponse {
        AnalysisResponse {
            results: vec![SentenceResult {
                original: original.into(),
                translated: "t".into(),
                analysis: vec![],
            }],
        }
    }

    fn session() -> Session {
        Session::new(Capabilities::default(), "en")
    }

    #[test]
    fn begin_shows_loading_and_builds_request() {
        let mut page = FakePage::with_text("a\n\nb");
        page.selector = Some("es".into());
        let mut s = session();

        let ticket = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        assert_eq!(ticket.request.sentences, vec!["a", "b"]);
        assert_eq!(ticket.request.target_language, "es");
        assert_eq!(page.results, ResultsView::Loading);
        assert_eq!(ticket.epoch, 1);
    }

    #[test]
    fn empty_input_notifies_and_leaves_results_alone() {
        let mut page = FakePage::with_text(" \n ");
        page.results = ResultsView::NoResults;
        let mut s = session();

        let err = s.begin(&mut page, Trigger::Manual).unwrap_err();
        assert!(matches!(err, LensError::EmptyInput));
        assert_eq!(page.notices, vec![EMPTY_INPUT_MESSAGE.to_string()]);
        assert_eq!(page.results, ResultsView::NoResults);
        assert!(page.history.is_empty());
        assert_eq!(s.epoch(), 0);
    }

    #[test]
    fn selector_ignored_when_not_selectable() {
        let mut page = FakePage::with_text("a");
        page.selector = Some("fr".into());
        let mut s = Session::new(
            Capabilities {
                show_transliteration: true,
                target_language_selectable: false,
            },
            "de",
        );
        let ticket = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        assert_eq!(ticket.request.target_language, "de");
    }

    #[test]
    fn failure_replaces_previous_results_with_one_error() {
        let mut page = FakePage::with_text("a");
        let mut s = session();

        let first = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        assert_eq!(s.finish(&mut page, &first, Ok(response("a"))), Applied::Rendered);
        assert!(matches!(page.results, ResultsView::Sentences(_)));

        let second = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        let applied = s.finish(&mut page, &second, Err(LensError::Status(500)));
        assert_eq!(applied, Applied::Failed);
        assert_eq!(page.results, ResultsView::error(ERROR_MESSAGE));
    }

    #[test]
    fn superseded_response_is_discarded_even_when_last() {
        let mut page = FakePage::with_text("a");
        let mut s = session();

        let older = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        let newer = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();

        assert_eq!(s.finish(&mut page, &newer, Ok(response("new"))), Applied::Rendered);
        assert_eq!(
            s.finish(&mut page, &older, Ok(response("old"))),
            Applied::Superseded
        );

        let ResultsView::Sentences(blocks) = &page.results else {
            panic!("expected sentences, got {:?}", page.results);
        };
        assert_eq!(blocks[0].original, "new");
    }

    #[test]
    fn clear_empties_input_and_results_and_drops_in_flight() {
        let mut page = FakePage::with_text("a");
        let mut s = session();

        let ticket = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();
        s.clear(&mut page);
        assert_eq!(page.text, "");
        assert_eq!(page.results, ResultsView::Empty);

        assert_eq!(
            s.finish(&mut page, &ticket, Ok(response("late"))),
            Applied::Superseded
        );
        assert_eq!(page.results, ResultsView::Empty);
    }

    #[test]
    fn startup_trigger_runs_only_before_any_other_cycle() {
        let mut page = FakePage::with_text("a");
        let mut s = session();
        let ticket = s.begin(&mut page, Trigger::Startup).unwrap().unwrap();
        assert_eq!(ticket.trigger, Trigger::Startup);

        let mut page = FakePage::with_text("a");
        let mut s = session();
        s.begin(&mut page, Trigger::Manual).unwrap();
        assert_eq!(s.begin(&mut page, Trigger::Startup).unwrap(), None);
        assert_eq!(s.epoch(), 1);
    }

    #[test]
    fn finishing_twice_with_same_response_renders_identically() {
        let mut page = FakePage::with_text("a");
        let mut s = session();
        let ticket = s.begin(&mut page, Trigger::Manual).unwrap().unwrap();

        s.finish(&mut page, &ticket, Ok(response("a")));
        let first = page.results.clone();
        s.finish(&mut page, &ticket, Ok(response("a")));
        assert_eq!(page.results, first);
    }
}
