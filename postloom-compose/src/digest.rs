//! Condenses a search result set into the bullet summary and link list the
//! generation prompt embeds.

use crate::sanitize::sanitize;
use postloom_search::SearchResultSet;

/// Leading organic hits folded into the prompt. Keeps prompt size bounded;
/// everything past the cut is display-only.
pub const ORGANIC_DIGEST_LIMIT: usize = 5;
/// Leading news hits folded into the prompt.
pub const NEWS_DIGEST_LIMIT: usize = 3;
/// Source links offered to the model for reference.
pub const LINK_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct ContentDigest {
    /// One `• title: snippet` line per retained hit, organic before news,
    /// provider order preserved.
    pub summary: String,
    pub links: Vec<String>,
}

pub fn build_digest(results: &SearchResultSet) -> ContentDigest {
    let mut summary = String::new();
    let mut links = Vec::new();

    for hit in results.organic.iter().take(ORGANIC_DIGEST_LIMIT) {
        push_line(&mut summary, &hit.title, &hit.snippet);
        if let Some(link) = &hit.link {
            links.push(link.clone());
        }
    }

    for hit in results.news.iter().take(NEWS_DIGEST_LIMIT) {
        push_line(&mut summary, &hit.title, &hit.snippet);
        if let Some(link) = &hit.link {
            links.push(link.clone());
        }
    }

    links.truncate(LINK_LIMIT);

    ContentDigest { summary, links }
}

fn push_line(summary: &mut String, title: &str, snippet: &str) {
    summary.push_str(&format!("• {}: {}\n", sanitize(title), sanitize(snippet)));
}
