use async_trait::async_trait;
use postloom_common::Result;
use std::sync::Arc;

/// Whatever the automation provider hands back for a completed action.
/// Ephemeral: shown to the user, never persisted.
#[derive(Debug, Clone)]
pub struct PublishResult {
    pub raw: serde_json::Value,
}

/// Executes one natural-language task against the automation toolset.
///
/// The toolset's own agent machinery (tool discovery, model-driven dispatch)
/// stays behind this seam; the pipeline only ever sees a task string going in
/// and a raw result coming out.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    async fn execute(&self, task: &str) -> Result<serde_json::Value>;
}

/// Creates a post on behalf of a configured author identity.
pub struct Publisher {
    executor: Arc<dyn ActionExecutor>,
}

impl Publisher {
    pub fn new(executor: Arc<dyn ActionExecutor>) -> Self {
        Self { executor }
    }

    /// Hand one create-post task to the automation provider.
    ///
    /// Callers validate author and content as non-empty and sanitize the
    /// content before this point; this method only formats and delegates.
    pub async fn publish(&self, content: &str, author: &str) -> Result<PublishResult> {
        let task = publish_task(content, author);

        tracing::info!(
            target: "publish",
            author = %author,
            content_len = content.len(),
            "publish.start"
        );

        let raw = self.executor.execute(&task).await?;

        tracing::info!(target: "publish", author = %author, "publish.success");
        Ok(PublishResult { raw })
    }
}

/// The one task description the executor ever receives.
fn publish_task(content: &str, author: &str) -> String {
    format!(
        "Create a LinkedIn post by author {author} \
         and set visibility to PUBLIC, lifecycleState to PUBLISHED, and resharing enabled.\n\
         \n\
         Post content: '{content}'"
    )
}
