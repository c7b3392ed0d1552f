use postloom_common::{PostloomError, Result};
use postloom_llm::traits::{LlmClient, LlmError};
use std::sync::Arc;

/// Renders an existing draft into another language via the multilingual
/// provider.
pub struct Translator {
    llm: Arc<dyn LlmClient>,
}

impl Translator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Translate a finished draft, preserving structure, hashtags, and tone.
    ///
    /// The model's output is returned verbatim — the publish path runs its
    /// own sanitize pass, and translations shown for review are displayed as
    /// produced.
    pub async fn translate(&self, content: &str, target_language: &str) -> Result<String> {
        let target_language = target_language.trim();

        tracing::debug!(
            target: "compose",
            language = %target_language,
            content_len = content.len(),
            "translate.start"
        );

        let prompt = translation_prompt(content, target_language);
        let response = self
            .llm
            .generate(&prompt, None, None, None)
            .await
            .map_err(translation_error)?;

        Ok(response.text)
    }
}

fn translation_error(e: LlmError) -> PostloomError {
    match e {
        LlmError::MissingCredential(name) => PostloomError::MissingCredential(name),
        other => PostloomError::Translation(other.to_string()),
    }
}

fn translation_prompt(content: &str, target_language: &str) -> String {
    format!(
        "You are a professional translator. Translate the following social media post to {target_language}.\n\
         Important guidelines:\n\
         1. Maintain the professional tone and style\n\
         2. Keep all hashtags and translate them appropriately\n\
         3. Preserve all formatting and line breaks\n\
         4. Keep emojis that make sense in {target_language}\n\
         5. Ensure the translation is natural and engaging\n\
         6. Maintain the same length and structure\n\
         7. Keep any technical terms or brand names unchanged\n\
         8. Ensure the call-to-action is culturally appropriate\n\
         \n\
         Post to translate:\n\
         {content}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_target_language_and_embeds_content() {
        let prompt = translation_prompt("Hello #World 🚀", "Japanese");

        assert!(prompt.contains("post to Japanese"));
        assert!(prompt.contains("Hello #World 🚀"));
        assert!(prompt.contains("brand names unchanged"));
    }
}
