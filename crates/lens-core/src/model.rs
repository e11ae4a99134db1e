//! Request and response types for the `/analyze` endpoint.
//!
//! Field names follow the wire format. Response fields are lenient: a
//! missing or `null` field becomes its default so that one malformed word
//! entry only degrades its own card.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel meaning "no particle / no verb form" for this word.
pub const NOT_APPLICABLE: &str = "None";

/// Sentinel honorific level for the neutral register.
pub const PLAIN_HONORIFIC: &str = "PLAIN";

/// Body of `POST /analyze`. `sentences` is never empty once built by the
/// collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub sentences: Vec<String>,
    pub target_language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub results: Vec<SentenceResult>,
}

/// Analysis of one input sentence, in the same position as the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    #[serde(default, deserialize_with = "nullable")]
    pub original: String,

    #[serde(default, deserialize_with = "nullable")]
    pub translated: String,

    /// Words in their linear order within the sentence.
    #[serde(default, deserialize_with = "nullable")]
    pub analysis: Vec<WordAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    #[serde(default, deserialize_with = "nullable")]
    pub word: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub part_of_speech: String,

    #[serde(default, deserialize_with = "nullable")]
    pub syntax_role: String,

    #[serde(default)]
    pub particle_type: Option<String>,

    #[serde(default)]
    pub verb_form: Option<String>,

    #[serde(default)]
    pub honorific_level: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub semantic_category: String,
}

impl WordAnalysis {
    /// Particle detail, unless absent or the "None" sentinel.
    pub fn particle(&self) -> Option<&str> {
        applicable(self.particle_type.as_deref(), NOT_APPLICABLE)
    }

    /// Verb-form detail, unless absent or the "None" sentinel.
    pub fn verb_form(&self) -> Option<&str> {
        applicable(self.verb_form.as_deref(), NOT_APPLICABLE)
    }

    /// Honorific detail, unless absent or the "PLAIN" sentinel.
    pub fn honorific(&self) -> Option<&str> {
        applicable(self.honorific_level.as_deref(), PLAIN_HONORIFIC)
    }

    /// Word-level translation, if the service provided a non-empty one.
    pub fn translation(&self) -> Option<&str> {
        non_empty(self.translation.as_deref())
    }

    pub fn transliteration(&self) -> Option<&str> {
        non_empty(self.transliteration.as_deref())
    }
}

fn applicable<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value.filter(|v| *v != sentinel)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
