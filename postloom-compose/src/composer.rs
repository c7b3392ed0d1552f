use crate::digest::{build_digest, ContentDigest};
use crate::sanitize::sanitize;
use postloom_common::{PostloomError, Result};
use postloom_llm::traits::{LlmClient, LlmError};
use postloom_search::SearchResultSet;
use std::sync::Arc;

/// Builds the generation prompt from a search digest and invokes the model
/// once per draft.
pub struct PostComposer {
    llm: Arc<dyn LlmClient>,
}

impl PostComposer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Produce one sanitized draft body.
    ///
    /// Single-shot: no conversation history, no retry, no partial output on
    /// failure.
    pub async fn compose(
        &self,
        results: &SearchResultSet,
        style_instructions: &str,
        target_language: &str,
    ) -> Result<String> {
        let target_language = target_language.trim();
        let digest = build_digest(results);
        let prompt = generation_prompt(&digest, style_instructions, target_language);

        tracing::debug!(
            target: "compose",
            language = %target_language,
            summary_lines = digest.summary.lines().count(),
            links = digest.links.len(),
            "compose.start"
        );

        let response = self
            .llm
            .generate(&prompt, None, None, None)
            .await
            .map_err(generation_error)?;

        Ok(sanitize(&response.text))
    }
}

fn generation_error(e: LlmError) -> PostloomError {
    match e {
        LlmError::MissingCredential(name) => PostloomError::MissingCredential(name),
        other => PostloomError::Generation(other.to_string()),
    }
}

/// The fixed instruction block. The model is told to avoid parentheses
/// outright because stripping an aside after the fact can cut real content;
/// the sanitizer pass on the output is the backstop, not the plan.
pub(crate) fn generation_prompt(
    digest: &ContentDigest,
    style_instructions: &str,
    target_language: &str,
) -> String {
    let mut prompt = format!(
        "Create an engaging social media post in {target_language} based on the following content. The post should:\n\
         \n\
         1. Be professional yet conversational\n\
         2. Include relevant hashtags (3-5)\n\
         3. Have a compelling hook in the first line\n\
         4. Be between 100-300 words\n\
         5. Include a call-to-action\n\
         6. Use emojis strategically (6-8 maximum)\n\
         7. Structure with short paragraphs for readability\n\
         8. Ensure all text is properly formatted for {target_language}\n\
         9. DO NOT use parentheses () in the text\n\
         10. Use clear, direct language without parenthetical expressions\n\
         \n\
         Content to base the post on:\n\
         {summary}\n\
         Relevant links to potentially reference:\n\
         {links}\n",
        summary = digest.summary,
        links = digest.links.join("\n"),
    );

    if !style_instructions.is_empty() {
        prompt.push('\n');
        prompt.push_str(style_instructions);
        prompt.push('\n');
    }

    prompt.push_str(
        "\nGenerate a post that will engage professional audiences and encourage interaction.\n",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use postloom_search::{OrganicHit, SearchResultSet};

    fn sample_digest() -> ContentDigest {
        build_digest(&SearchResultSet {
            organic: vec![OrganicHit {
                title: "Agentic AI".into(),
                snippet: "Frameworks compared".into(),
                link: Some("https://example.com".into()),
            }],
            news: vec![],
        })
    }

    #[test]
    fn prompt_embeds_language_summary_and_links() {
        let prompt = generation_prompt(&sample_digest(), "", "Hindi");

        assert!(prompt.contains("social media post in Hindi"));
        assert!(prompt.contains("• Agentic AI: Frameworks compared"));
        assert!(prompt.contains("https://example.com"));
        assert!(prompt.contains("DO NOT use parentheses"));
    }

    #[test]
    fn style_instructions_are_appended_when_present() {
        let with = generation_prompt(&sample_digest(), "Focus on statistics.", "English");
        let without = generation_prompt(&sample_digest(), "", "English");

        assert!(with.contains("Focus on statistics."));
        assert!(!without.contains("Focus on statistics."));
    }
}
