//! Service-Owned Caches

/// Append-only language-validity cache
pub mod language_validity;

pub use language_validity::LanguageValidityCache;
