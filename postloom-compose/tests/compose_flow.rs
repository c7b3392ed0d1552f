use async_trait::async_trait;
use postloom_common::PostloomError;
use postloom_compose::{PostComposer, Translator};
use postloom_llm::traits::{LlmClient, LlmError, LlmResponse, LlmResult};
use postloom_search::{OrganicHit, SearchResultSet};
use std::sync::Arc;

/// Scripted model: returns a fixed reply or a fixed error.
struct ScriptedLlm {
    reply: Result<String, &'static str>,
    missing_credential: bool,
}

impl ScriptedLlm {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            missing_credential: false,
        })
    }

    fn failing(detail: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(detail),
            missing_credential: false,
        })
    }

    fn keyless() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("unused"),
            missing_credential: true,
        })
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _system_prompt: Option<&str>,
        _max_tokens: Option<u32>,
        _temperature: Option<f32>,
    ) -> LlmResult<LlmResponse> {
        if self.missing_credential {
            return Err(LlmError::MissingCredential("generation API key"));
        }
        match &self.reply {
            Ok(text) => Ok(LlmResponse {
                text: text.clone(),
                model: Some("scripted".into()),
                tokens_used: None,
            }),
            Err(detail) => Err(LlmError::Invocation((*detail).to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn sample_results() -> SearchResultSet {
    SearchResultSet {
        organic: vec![OrganicHit {
            title: "Agentic AI Frameworks".into(),
            snippet: "A field guide (2025 edition)".into(),
            link: Some("https://example.com/guide".into()),
        }],
        news: vec![],
    }
}

#[tokio::test]
async fn compose_sanitizes_the_model_output() {
    let composer = PostComposer::new(ScriptedLlm::replying(
        "Big news (again)!\n\nAgents are   everywhere. #AI",
    ));

    let draft = composer
        .compose(&sample_results(), "", "English")
        .await
        .expect("compose");

    assert_eq!(draft, "Big news ! Agents are everywhere. #AI");
    assert!(!draft.contains('(') && !draft.contains(')'));
}

#[tokio::test]
async fn compose_maps_invocation_failures_to_generation() {
    let composer = PostComposer::new(ScriptedLlm::failing("rate limited"));

    let err = composer
        .compose(&sample_results(), "", "English")
        .await
        .expect_err("should fail");

    match err {
        PostloomError::Generation(detail) => assert!(detail.contains("rate limited")),
        other => panic!("expected generation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn compose_surfaces_missing_credentials_directly() {
    let composer = PostComposer::new(ScriptedLlm::keyless());

    let err = composer
        .compose(&sample_results(), "", "English")
        .await
        .expect_err("should fail");

    assert!(matches!(
        err,
        PostloomError::MissingCredential("generation API key")
    ));
}

#[tokio::test]
async fn translate_returns_model_output_verbatim() {
    // The translate path intentionally skips the sanitizer; parentheses in
    // the model output survive here and are only cleaned at publish time.
    let translator = Translator::new(ScriptedLlm::replying("Bonjour (le monde) 🌍"));

    let translated = translator
        .translate("Hello world 🌍", "French")
        .await
        .expect("translate");

    assert_eq!(translated, "Bonjour (le monde) 🌍");
}

#[tokio::test]
async fn translate_maps_failures_to_translation() {
    let translator = Translator::new(ScriptedLlm::failing("model offline"));

    let err = translator
        .translate("Hello", "French")
        .await
        .expect_err("should fail");

    assert!(matches!(err, PostloomError::Translation(_)));
}
