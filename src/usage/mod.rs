//! Markup usage: scanning documents into a [`UsageIndex`] and caching the
//! current snapshot.

pub mod cache;
pub mod index;
pub mod markup;
pub mod source;

pub use cache::UsageCache;
pub use index::{build_usage_index, UsageIndex, DATA_PREFIX};
pub use source::ContentSource;
