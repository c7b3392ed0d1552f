//! Web search integration for Postloom.
//!
//! Wraps a Serper-compatible search API behind [`client::SearchApi`]: one
//! authenticated POST per request, a 10 second timeout, no automatic retries,
//! and an hour-long result cache keyed by the full request tuple.
pub mod cache;
pub mod client;
pub mod types;

pub use cache::{Clock, SystemClock};
pub use client::{SearchApi, MAX_RESULT_COUNT};
pub use types::{NewsHit, OrganicHit, SearchMode, SearchResultSet};
