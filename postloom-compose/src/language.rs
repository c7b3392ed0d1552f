//! Catalog of languages the post generator is exercised in.
//!
//! Advisory only: an unlisted language is still forwarded to the model,
//! which copes with far more than this list. The catalog drives pickers and
//! validation hints.

pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "Gujarati",
    "Bengali",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Punjabi",
    "Marathi",
    "Urdu",
    "Assamese",
    "Odia",
    "Sanskrit",
    "Korean",
    "Japanese",
    "Arabic",
    "French",
    "German",
    "Spanish",
    "Portuguese",
    "Russian",
    "Chinese",
    "Vietnamese",
    "Thai",
    "Indonesian",
    "Turkish",
    "Polish",
    "Ukrainian",
    "Dutch",
    "Italian",
    "Greek",
    "Hebrew",
    "Persian",
    "Swedish",
    "Norwegian",
    "Danish",
    "Finnish",
    "Czech",
    "Hungarian",
    "Romanian",
    "Bulgarian",
    "Croatian",
    "Serbian",
    "Slovak",
    "Slovenian",
    "Estonian",
    "Latvian",
    "Lithuanian",
    "Malay",
    "Tagalog",
    "Swahili",
];

/// Case-insensitive membership test, tolerant of surrounding whitespace.
pub fn is_supported(language: &str) -> bool {
    let needle = language.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|l| l.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_match_loosely() {
        assert!(is_supported("English"));
        assert!(is_supported("  spanish "));
        assert!(is_supported("SWAHILI"));
    }

    #[test]
    fn unknown_languages_do_not_match() {
        assert!(!is_supported("Klingon"));
        assert!(!is_supported(""));
    }
}
