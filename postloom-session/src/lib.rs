//! Session orchestration: search → 3 draft variants → review → publish.
//!
//! A [`Session`] owns the two pieces of user-visible state — the last search
//! result set and the generated drafts — plus the provider clients that act
//! on them. Both state slots are replaced wholesale by a new search and
//! cleared together; partial merges never happen. Everything runs
//! sequentially on the caller's task: each user-triggered action is one
//! awaited call chain with no background work.

use postloom_common::{PostloomError, Result};
use postloom_compose::{sanitize, DraftVariant, PostComposer, Translator};
use postloom_publish::{PublishResult, Publisher};
use postloom_search::{SearchApi, SearchMode, SearchResultSet};

/// Drafts generated per search.
pub const VARIANT_COUNT: usize = 3;

/// Style nudge appended for the second variant.
pub const CASUAL_SUFFIX: &str = "Make this version more casual and story-driven.";
/// Style nudge appended for the third variant.
pub const DATA_DRIVEN_SUFFIX: &str = "Make this version more data-driven and professional.";

/// Result rows surfaced in the overview panel.
const PREVIEW_LIMIT: usize = 3;

/// Display summary of the last search, mirroring what the original results
/// panel showed: counts plus the leading hits.
#[derive(Debug, Clone)]
pub struct ResultOverview {
    pub organic_count: usize,
    pub news_count: usize,
    pub top_organic: Vec<String>,
    pub top_news: Vec<String>,
}

pub struct Session {
    search: SearchApi,
    composer: PostComposer,
    translator: Translator,
    publisher: Publisher,
    language: String,
    mode: SearchMode,
    result_count: u32,
    last_results: Option<SearchResultSet>,
    drafts: Vec<DraftVariant>,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        search: SearchApi,
        composer: PostComposer,
        translator: Translator,
        publisher: Publisher,
        language: String,
        mode: SearchMode,
        result_count: u32,
    ) -> Self {
        Self {
            search,
            composer,
            translator,
            publisher,
            language,
            mode,
            result_count,
            last_results: None,
            drafts: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn drafts(&self) -> &[DraftVariant] {
        &self.drafts
    }

    pub fn last_results(&self) -> Option<&SearchResultSet> {
        self.last_results.as_ref()
    }

    /// Search the web and generate up to [`VARIANT_COUNT`] drafts.
    ///
    /// A search failure leaves the previous session state untouched. Once
    /// results arrive, both state slots are replaced; each variant is then
    /// attempted independently, so one model failure never aborts the others.
    /// Returns the number of drafts generated, erroring only when none
    /// succeeded.
    pub async fn run(&mut self, query: &str, instructions: &str) -> Result<usize> {
        let results = self
            .search
            .search(query, self.mode, self.result_count)
            .await?;

        self.last_results = Some(results.clone());
        self.drafts = Vec::new();

        let language = sanitize(&self.language);
        let base_instructions = sanitize(instructions);

        for index in 0..VARIANT_COUNT {
            let styled = variant_instructions(&base_instructions, index);
            match self.composer.compose(&results, &styled, &language).await {
                Ok(content) => {
                    self.drafts.push(DraftVariant::new(
                        content,
                        format!("Variation {}", index + 1),
                        language.clone(),
                    ));
                }
                Err(e) => {
                    tracing::warn!(
                        target: "session",
                        variant = index + 1,
                        error = %e,
                        "draft variant failed"
                    );
                }
            }
        }

        if self.drafts.is_empty() {
            return Err(PostloomError::Generation(
                "no draft variant could be generated".into(),
            ));
        }

        tracing::info!(
            target: "session",
            query = %query,
            variants = self.drafts.len(),
            "session.run.complete"
        );
        Ok(self.drafts.len())
    }

    /// Publish a reviewed (possibly edited) draft body.
    ///
    /// Author identity and content are validated here, before the external
    /// agent is ever involved, and the content gets its post-edit sanitize
    /// pass on the way out.
    pub async fn publish(&self, content: &str, author: &str) -> Result<PublishResult> {
        let author = author.trim();
        if author.is_empty() {
            return Err(PostloomError::Publish(
                "author identity must not be empty".into(),
            ));
        }

        let cleaned = sanitize(content);
        if cleaned.is_empty() {
            return Err(PostloomError::Publish(
                "post content must not be empty".into(),
            ));
        }

        self.publisher.publish(&cleaned, author).await
    }

    /// Alternate path: render an existing draft into another language.
    pub async fn translate(&self, content: &str, target_language: &str) -> Result<String> {
        self.translator.translate(content, target_language).await
    }

    /// Drop both state slots.
    pub fn clear(&mut self) {
        self.last_results = None;
        self.drafts.clear();
    }

    /// Counts and preview lines for the last result set.
    pub fn overview(&self) -> Option<ResultOverview> {
        let results = self.last_results.as_ref()?;

        let top_organic = results
            .organic
            .iter()
            .take(PREVIEW_LIMIT)
            .map(|hit| format!("{}: {}", sanitize(&hit.title), sanitize(&hit.snippet)))
            .collect();
        let top_news = results
            .news
            .iter()
            .take(PREVIEW_LIMIT)
            .map(|hit| format!("{}: {}", sanitize(&hit.title), sanitize(&hit.snippet)))
            .collect();

        Some(ResultOverview {
            organic_count: results.organic.len(),
            news_count: results.news.len(),
            top_organic,
            top_news,
        })
    }
}

/// Style instructions for the nth variant: the first passes the caller's
/// instructions through, the other two append a fixed nudge.
pub fn variant_instructions(base: &str, index: usize) -> String {
    let suffix = match index {
        1 => Some(CASUAL_SUFFIX),
        2 => Some(DATA_DRIVEN_SUFFIX),
        _ => None,
    };

    match suffix {
        Some(suffix) if base.is_empty() => suffix.to_string(),
        Some(suffix) => format!("{base}\n\n{suffix}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_variant_keeps_instructions_unmodified() {
        assert_eq!(variant_instructions("Focus on stats.", 0), "Focus on stats.");
        assert_eq!(variant_instructions("", 0), "");
    }

    #[test]
    fn later_variants_append_their_style_nudges() {
        assert_eq!(
            variant_instructions("Focus on stats.", 1),
            format!("Focus on stats.\n\n{CASUAL_SUFFIX}")
        );
        assert_eq!(variant_instructions("", 2), DATA_DRIVEN_SUFFIX);
    }
}
