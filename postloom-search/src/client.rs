use crate::cache::{CacheKey, Clock, ResultCache, SystemClock};
use crate::types::{SearchMode, SearchRequest, SearchResultSet};
use postloom_common::{PostloomError, Result};
use postloom_http::{Auth, HttpClient, RequestOpts};
use reqwest::header::{HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

/// Provider calls are paid; identical requests within this window are served
/// from the cache.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound accepted by the provider's `num` field.
pub const MAX_RESULT_COUNT: u32 = 20;

/// Client for a Serper-compatible search API.
///
/// One outbound POST per uncached request; failures surface to the caller
/// unretried so the user decides whether to trigger the search again.
pub struct SearchApi {
    http: HttpClient,
    api_key: String,
    cache: ResultCache,
    clock: Arc<dyn Clock>,
}

impl SearchApi {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        Self::with_clock(base_url, api_key, Arc::new(SystemClock))
    }

    /// Construct with an explicit clock; tests use this to step expiry.
    pub fn with_clock(base_url: &str, api_key: String, clock: Arc<dyn Clock>) -> Result<Self> {
        // Keep a trailing slash so Url::join preserves the base path.
        let base = format!("{}/", base_url.trim_end_matches('/'));
        let http = HttpClient::new(&base)
            .map_err(|e| PostloomError::Config(format!("invalid search endpoint: {e}")))?
            .with_timeout(SEARCH_TIMEOUT)
            .with_retries(0);

        Ok(Self {
            http,
            api_key,
            cache: ResultCache::new(CACHE_TTL),
            clock,
        })
    }

    /// Query the provider, returning cached results when the same
    /// `(query, mode, result_count)` was fetched within the last hour.
    pub async fn search(
        &self,
        query: &str,
        mode: SearchMode,
        result_count: u32,
    ) -> Result<SearchResultSet> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PostloomError::Search("query must not be empty".into()));
        }
        if result_count == 0 || result_count > MAX_RESULT_COUNT {
            return Err(PostloomError::Search(format!(
                "result count must be between 1 and {MAX_RESULT_COUNT}"
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(PostloomError::MissingCredential("search API key"));
        }

        let key = CacheKey {
            query: query.to_string(),
            mode,
            result_count,
        };
        if let Some(cached) = self.cache.get(&key, self.clock.now()) {
            tracing::debug!(
                target: "search.serper",
                query = %query,
                %mode,
                "search.cache_hit"
            );
            return Ok(cached);
        }

        let body = SearchRequest {
            query,
            num: result_count,
        };

        let started = std::time::Instant::now();
        tracing::info!(
            target: "search.serper",
            query = %query,
            %mode,
            result_count,
            "search.request.start"
        );

        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| PostloomError::Search(format!("invalid search API key: {e}")))?;

        let resp: SearchResultSet = match self
            .http
            .post_json_opts(
                mode.path(),
                &body,
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: HeaderName::from_static("x-api-key"),
                        value: api_key,
                    }),
                    retries: Some(0),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    target: "search.serper",
                    query = %query,
                    %mode,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "search.request.error"
                );
                return Err(PostloomError::Search(e.to_string()));
            }
        };

        tracing::info!(
            target: "search.serper",
            query = %query,
            %mode,
            organic = resp.organic.len(),
            news = resp.news.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search.request.success"
        );

        self.cache.put(key, resp.clone(), self.clock.now());
        Ok(resp)
    }
}
