//! Publishing surface for Postloom.
//!
//! [`publisher::Publisher`] is the pipeline's single call contract: content
//! and author identity in, provider result out, no retries. The third-party
//! automation toolset that actually authenticates to the social network
//! lives behind the [`publisher::ActionExecutor`] trait; the HTTP-backed
//! implementation is [`automation::AutomationApi`].
pub mod automation;
pub mod publisher;

pub use automation::{AutomationApi, CREATE_POST_ACTION};
pub use publisher::{ActionExecutor, Publisher, PublishResult};
