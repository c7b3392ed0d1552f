use serde::{Deserialize, Serialize};

/// Which provider vertical to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// General web results (`organic` array in the response).
    Search,
    /// News-specific results (`news` array in the response).
    News,
}

impl SearchMode {
    /// URL path segment under the provider base, e.g. `{base}/news`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::News => "news",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Request body for the provider's POST endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "q")]
    pub query: &'a str,
    pub num: u32,
}

/// One general web hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// One news hit. `date` is the provider's display string, passed through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// The provider's result set. Immutable once returned; downstream consumers
/// only ever read the leading items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultSet {
    #[serde(default)]
    pub organic: Vec<OrganicHit>,
    #[serde(default)]
    pub news: Vec<NewsHit>,
}

impl SearchResultSet {
    pub fn is_empty(&self) -> bool {
        self.organic.is_empty() && self.news.is_empty()
    }
}
