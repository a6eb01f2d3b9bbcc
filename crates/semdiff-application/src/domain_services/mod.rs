//! Domain Services
//!
//! Pure computation shared by the use cases. The alignment service is the
//! algorithmic core of the repository: nearest-neighbor cosine matching
//! of sentence embeddings with threshold-governed diff classification.

/// Sentence alignment and diff classification
pub mod alignment;

pub use alignment::{cosine_similarity, sentence_diff};
