//! Property-based tests for input collection and result rendering.
//!
//! 1. **Line law**: every non-blank input line becomes exactly one sentence,
//!    trimmed and in input order.
//! 2. **Blank input**: input made only of whitespace and line breaks is
//!    always rejected as empty and never builds a request.
//! 3. **Sentinel rows**: the particle and verb-form rows appear iff the
//!    field is present and not `"None"`; the honorific row iff present and
//!    not `"PLAIN"`. POS, role and category rows are always there.
//! 4. **Idempotence**: rendering the same response twice gives the same view.

use lens_core::collector::collect;
use lens_core::model::{NOT_APPLICABLE, PLAIN_HONORIFIC};
use lens_core::render::{self, DetailKind, ResultsView};
use lens_core::{AnalysisResponse, Capabilities, LensError, SentenceResult, WordAnalysis};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn line_strategy() -> impl Strategy<Value = String> {
    "[ \t\u{3000}a-zA-Z0-9本を読む。]{0,16}"
}

fn blank_line_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\u{3000}]{0,6}"
}

fn line_break_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n")]
}

/// Tag values biased toward the sentinels.
fn tag_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(NOT_APPLICABLE.to_string())),
        Just(Some(PLAIN_HONORIFIC.to_string())),
        "[A-Za-z_ ]{0,12}".prop_map(Some),
    ]
}

fn word_strategy() -> impl Strategy<Value = WordAnalysis> {
    (
        "[a-z本を]{0,6}",
        tag_strategy(),
        tag_strategy(),
        "[A-Z_]{0,10}",
        "[A-Z_]{0,10}",
        tag_strategy(),
        tag_strategy(),
        tag_strategy(),
        "[A-Z_]{0,10}",
    )
        .prop_map(
            |(
                word,
                transliteration,
                translation,
                part_of_speech,
                syntax_role,
                particle_type,
                verb_form,
                honorific_level,
                semantic_category,
            )| WordAnalysis {
                word,
                transliteration,
                translation,
                part_of_speech,
                syntax_role,
                particle_type,
                verb_form,
                honorific_level,
                semantic_category,
            },
        )
}

fn response_strategy() -> impl Strategy<Value = AnalysisResponse> {
    prop::collection::vec(
        (
            "[a-z本を]{0,8}",
            "[a-z ]{0,8}",
            prop::collection::vec(word_strategy(), 0..6),
        )
            .prop_map(|(original, translated, analysis)| SentenceResult {
                original,
                translated,
                analysis,
            }),
        0..4,
    )
    .prop_map(|results| AnalysisResponse { results })
}

fn caps_strategy() -> impl Strategy<Value = Capabilities> {
    (any::<bool>(), any::<bool>()).prop_map(|(show_transliteration, target_language_selectable)| {
        Capabilities {
            show_transliteration,
            target_language_selectable,
        }
    })
}

fn applicable(value: &Option<String>, sentinel: &str) -> bool {
    value.as_deref().is_some_and(|v| v != sentinel)
}

// ── Collection ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn each_non_blank_line_becomes_one_sentence_in_order(
        lines in prop::collection::vec(line_strategy(), 0..12),
        line_break in line_break_strategy(),
    ) {
        let raw = lines.join(line_break);
        let expected: Vec<String> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        match collect(&raw, None, "en") {
            Ok(request) => {
                prop_assert_eq!(request.sentences, expected);
                prop_assert_eq!(request.target_language, "en");
            }
            Err(LensError::EmptyInput) => {
                prop_assert!(expected.is_empty(), "rejected input with sentences: {:?}", raw);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error: {}", other);
            }
        }
    }

    #[test]
    fn blank_input_is_always_empty(
        lines in prop::collection::vec(blank_line_strategy(), 0..8),
        line_break in line_break_strategy(),
        selector in prop::option::of("[a-z]{2}"),
    ) {
        let raw = lines.join(line_break);
        let outcome = collect(&raw, selector.as_deref(), "en");
        prop_assert!(
            matches!(outcome, Err(LensError::EmptyInput)),
            "blank input {:?} built {:?}",
            raw,
            outcome
        );
    }
}

// ── Rendering ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sentinel_rows_follow_field_values(
        word in word_strategy(),
        caps in caps_strategy(),
    ) {
        let card = render::word_card(&word, &caps);
        let has = |kind: DetailKind| card.details.iter().any(|row| row.kind == kind);

        prop_assert!(has(DetailKind::PartOfSpeech));
        prop_assert!(has(DetailKind::Role));
        prop_assert!(has(DetailKind::Category));
        prop_assert_eq!(has(DetailKind::Particle), applicable(&word.particle_type, NOT_APPLICABLE));
        prop_assert_eq!(has(DetailKind::VerbForm), applicable(&word.verb_form, NOT_APPLICABLE));
        prop_assert_eq!(
            has(DetailKind::Honorific),
            applicable(&word.honorific_level, PLAIN_HONORIFIC)
        );

        if !caps.show_transliteration {
            prop_assert_eq!(&card.transliteration, &None);
        }
        prop_assert_eq!(&card.pos_key, &word.part_of_speech);
    }

    #[test]
    fn rendering_is_idempotent_and_keeps_shape(
        response in response_strategy(),
        caps in caps_strategy(),
    ) {
        let first = render::render(&response, &caps);
        let second = render::render(&response, &caps);
        prop_assert_eq!(&first, &second);

        match first {
            ResultsView::NoResults => {
                prop_assert!(response.results.is_empty());
            }
            ResultsView::Sentences(blocks) => {
                prop_assert_eq!(blocks.len(), response.results.len());
                for (block, result) in blocks.iter().zip(&response.results) {
                    prop_assert_eq!(&block.original, &result.original);
                    prop_assert_eq!(block.cards.len(), result.analysis.len());
                }
            }
            other => {
                prop_assert!(false, "unexpected view {:?}", other);
            }
        }
    }
}
