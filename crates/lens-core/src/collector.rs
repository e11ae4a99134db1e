//! Turns the raw sentence input into an [`AnalysisRequest`].

use crate::error::{LensError, Result};
use crate::language::DEFAULT_TARGET_LANGUAGE;
use crate::model::AnalysisRequest;

/// Split `raw` on line breaks, trim each line and drop blank ones.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a request from the raw input and the selector value, if the page
/// has a selector. Returns [`LensError::EmptyInput`] when no sentence remains.
pub fn collect(
    raw: &str,
    target_language: Option<&str>,
    default_language: &str,
) -> Result<AnalysisRequest> {
    let sentences = normalize(raw);
    if sentences.is_empty() {
        return Err(LensError::EmptyInput);
    }

    let target_language = target_language
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .or_else(|| Some(default_language).filter(|code| !code.is_empty()))
        .unwrap_or(DEFAULT_TARGET_LANGUAGE)
        .to_string();

    Ok(AnalysisRequest {
        sentences,
        target_language,
    })
}
