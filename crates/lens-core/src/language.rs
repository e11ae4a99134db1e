//! Target languages offered by the language selector.

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// A selectable translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

pub const TARGET_LANGUAGES: &[TargetLanguage] = &[
    TargetLanguage { code: "en", name: "English" },
    TargetLanguage { code: "es", name: "Spanish" },
    TargetLanguage { code: "fr", name: "French" },
    TargetLanguage { code: "de", name: "German" },
    TargetLanguage { code: "it", name: "Italian" },
    TargetLanguage { code: "pt", name: "Portuguese" },
    TargetLanguage { code: "ru", name: "Russian" },
    TargetLanguage { code: "ja", name: "Japanese" },
    TargetLanguage { code: "ko", name: "Korean" },
    TargetLanguage { code: "zh-CN", name: "Chinese (Simplified)" },
    TargetLanguage { code: "ar", name: "Arabic" },
    TargetLanguage { code: "he", name: "Hebrew" },
    TargetLanguage { code: "fa", name: "Persian" },
    TargetLanguage { code: "ur", name: "Urdu" },
    TargetLanguage { code: "hi", name: "Hindi" },
    TargetLanguage { code: "tr", name: "Turkish" },
    TargetLanguage { code: "nl", name: "Dutch" },
    TargetLanguage { code: "sv", name: "Swedish" },
    TargetLanguage { code: "pl", name: "Polish" },
    TargetLanguage { code: "vi", name: "Vietnamese" },
    TargetLanguage { code: "th", name: "Thai" },
    TargetLanguage { code: "id", name: "Indonesian" },
];

/// Position of `code` in [`TARGET_LANGUAGES`].
pub fn index_of(code: &str) -> Option<usize> {
    TARGET_LANGUAGES.iter().position(|l| l.code == code)
}
