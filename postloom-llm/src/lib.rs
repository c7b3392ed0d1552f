//! Model-provider integration for Postloom.
//!
//! Exposes a common [`traits::LlmClient`] interface and the concrete
//! [`chat::ChatApi`] implementation for OpenAI-compatible chat-completions
//! endpoints. The pipeline builds two instances of the same client: one
//! against the generation provider and one against the translation provider.
//!
//! # Examples
//! ```no_run
//! use postloom_llm::chat::ChatApi;
//! use postloom_llm::traits::LlmClient;
//!
//! # fn demo() -> Result<(), postloom_llm::traits::LlmError> {
//! let client = ChatApi::new(
//!     "https://api.openai.com/v1/",
//!     "sk-example".into(),
//!     "gpt-4".into(),
//!     0.7,
//!     "generation API key",
//! )?;
//! assert_eq!(client.model_name(), "gpt-4");
//! # Ok(())
//! # }
//! ```
pub mod chat;
pub mod traits;

pub use chat::ChatApi;
pub use traits::{LlmClient, LlmError, LlmResponse, LlmResult};
