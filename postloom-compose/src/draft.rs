use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candidate post. Never mutated after creation — edits happen on a
/// display-layer copy and only reach the pipeline again at publish time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftVariant {
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Display label, e.g. "Variation 2".
    pub label: String,
    pub language: String,
}

impl DraftVariant {
    pub fn new(content: String, label: String, language: String) -> Self {
        Self {
            content,
            created_at: Utc::now(),
            label,
            language,
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }
}

/// Advisory verdict on a draft's length; never blocks publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAssessment {
    /// Under 50 words — probably too thin to land.
    TooShort,
    Ok,
    /// Over 300 words — readers drop off.
    TooLong,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn assess_length(text: &str) -> LengthAssessment {
    match word_count(text) {
        n if n < 50 => LengthAssessment::TooShort,
        n if n > 300 => LengthAssessment::TooLong,
        _ => LengthAssessment::Ok,
    }
}
