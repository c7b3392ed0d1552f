//! Draft composition for Postloom: sanitization, search digestion, prompt
//! construction, and the translate path.
//!
//! [`composer::PostComposer`] turns a search result set plus style
//! instructions into one sanitized draft per invocation;
//! [`translator::Translator`] renders an existing draft into another
//! language. Both are single-shot wrappers over an [`postloom_llm::LlmClient`].
pub mod composer;
pub mod digest;
pub mod draft;
pub mod language;
pub mod sanitize;
pub mod translator;

pub use composer::PostComposer;
pub use digest::{ContentDigest, LINK_LIMIT, NEWS_DIGEST_LIMIT, ORGANIC_DIGEST_LIMIT};
pub use draft::{assess_length, word_count, DraftVariant, LengthAssessment};
pub use language::{is_supported, SUPPORTED_LANGUAGES};
pub use sanitize::sanitize;
pub use translator::Translator;
