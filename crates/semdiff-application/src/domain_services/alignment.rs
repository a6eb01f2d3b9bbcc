//! Sentence Alignment
//!
//! For each sentence on one side of a comparison, finds the most similar
//! sentence on the other side and flags the sentence as unmatched when
//! even that best match falls below the similarity threshold.
//!
//! Matching is nearest-neighbor, not one-to-one: a single target sentence
//! may be the best match for several source sentences. That is accepted,
//! not resolved. Complexity is O(|source| x |target|) per direction,
//! which is fine at article scale (hundreds of sentences per side).

use semdiff_domain::value_objects::comparison::DirectionalDiff;
use semdiff_domain::value_objects::{Embedding, Sentence};

/// Cosine similarity between two vectors
///
/// Returns a value in [-1, 1]; zero-norm vectors compare as 0.0. For
/// normalized text embeddings the practical range is near [0, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Flag source sentences without a sufficiently similar target match
///
/// For each source index `i`, takes the maximum similarity between
/// `source_embeddings[i]` and every target embedding. Sentences whose
/// best score is strictly below `threshold` are emitted in source order;
/// a score exactly equal to the threshold counts as a match.
///
/// An empty target sequence means no similarity is possible: the maximum
/// over an empty set is treated as below any valid threshold, so every
/// source sentence is flagged.
///
/// `threshold` must already be validated to lie in the accepted range;
/// this function does not clamp it.
pub fn sentence_diff(
    source_sentences: &[Sentence],
    source_embeddings: &[Embedding],
    target_embeddings: &[Embedding],
    threshold: f32,
) -> DirectionalDiff {
    debug_assert_eq!(source_sentences.len(), source_embeddings.len());

    let mut sentences = Vec::new();
    let mut indices = Vec::new();

    for (i, sentence) in source_sentences.iter().enumerate() {
        let best = target_embeddings
            .iter()
            .map(|target| cosine_similarity(&source_embeddings[i].vector, &target.vector))
            .fold(f32::NEG_INFINITY, f32::max);

        if best < threshold {
            sentences.push(sentence.text.clone());
            indices.push(i);
        }
    }

    DirectionalDiff { sentences, indices }
}
