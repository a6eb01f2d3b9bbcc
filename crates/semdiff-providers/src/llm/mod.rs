//! LLM Comparator Implementations
//!
//! The LLM comparison path is an independent collaborator outside this
//! repository; only the null stub ships here.

/// Null comparator for testing
pub mod null;

pub use null::NullLlmComparator;
