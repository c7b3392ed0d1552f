//! Common types shared across Postloom crates.
//!
//! This crate defines the shared error taxonomy and the observability
//! helpers used by every binary and integration test in the workspace. It is
//! intentionally lightweight so that all crates can depend on it without
//! pulling in heavy transitive costs.
//!
//! # Overview
//!
//! - [`PostloomError`] and [`Result`]: shared error handling
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! Every pipeline stage converts its provider-level failure into one
//! [`PostloomError`] variant at the call site; nothing here is fatal to the
//! process and nothing is retried automatically.

pub mod observability;

/// Error types used across the Postloom pipeline.
///
/// Each variant corresponds to one stage of the pipeline. Credential checks
/// run before any network call, so a [`PostloomError::MissingCredential`]
/// guarantees no outbound request was made.
#[derive(thiserror::Error, Debug)]
pub enum PostloomError {
    /// A required API key or identity field was absent.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The search provider returned a transport, HTTP, or parse error.
    #[error("search failed: {0}")]
    Search(String),

    /// The generation model invocation failed.
    #[error("post generation failed: {0}")]
    Generation(String),

    /// The translation model invocation failed.
    #[error("translation failed: {0}")]
    Translation(String),

    /// The publish automation provider failed or rejected the request.
    #[error("publish failed: {0}")]
    Publish(String),

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`PostloomError`].
pub type Result<T> = std::result::Result<T, PostloomError>;
