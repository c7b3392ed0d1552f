use crate::publisher::ActionExecutor;
use async_trait::async_trait;
use postloom_common::{PostloomError, Result};
use postloom_http::{Auth, HttpClient, RequestOpts};
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use std::time::Duration;

/// The only automation action this pipeline binds. The provider resolves it
/// to an authenticated create-post call on the connected account.
pub const CREATE_POST_ACTION: &str = "LINKEDIN_CREATE_LINKED_IN_POST";

/// The agent run on the provider side can take a while.
const EXECUTE_TIMEOUT: Duration = Duration::from_secs(90);

/// HTTP-backed [`ActionExecutor`] for a Composio-style automation provider.
pub struct AutomationApi {
    http: HttpClient,
    api_key: String,
    action: String,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    input: ExecuteInput<'a>,
}

#[derive(Serialize)]
struct ExecuteInput<'a> {
    task: &'a str,
}

impl AutomationApi {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        let http = HttpClient::new(&base)
            .map_err(|e| PostloomError::Config(format!("invalid automation endpoint: {e}")))?
            .with_timeout(EXECUTE_TIMEOUT)
            .with_retries(0);

        Ok(Self {
            http,
            api_key,
            action: CREATE_POST_ACTION.to_string(),
        })
    }

    /// Override the bound action id (tests point this at a scratch action).
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }
}

#[async_trait]
impl ActionExecutor for AutomationApi {
    async fn execute(&self, task: &str) -> Result<serde_json::Value> {
        if self.api_key.trim().is_empty() {
            return Err(PostloomError::MissingCredential("automation API key"));
        }

        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| PostloomError::Publish(format!("invalid automation API key: {e}")))?;

        let path = format!("v2/actions/{}/execute", self.action);
        let body = ExecuteRequest {
            input: ExecuteInput { task },
        };

        self.http
            .post_json_opts(
                &path,
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
            .map_err(|e| PostloomError::Publish(e.to_string()))
    }
}
