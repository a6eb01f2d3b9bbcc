//! Comparison Outcome Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: One Direction of a Comparison
///
/// The sentences of the source side whose best match in the target side
/// fell below the similarity threshold, together with their positions in
/// the source sequence.
///
/// ## Business Rules
///
/// - Indices are unique, strictly increasing, and reference valid
///   positions in the source sentence sequence
/// - `sentences[k]` is the text of the source sentence at `indices[k]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectionalDiff {
    /// Unmatched sentence texts, in source order
    pub sentences: Vec<String>,
    /// Indices of the unmatched sentences in the source sequence
    pub indices: Vec<usize>,
}

impl DirectionalDiff {
    /// Number of unmatched sentences
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether every source sentence found a sufficiently similar match
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Value Object: Bidirectional Comparison Outcome
///
/// The complete result of comparing two texts: both full sentence
/// sequences (for rendering the diff against the original text) and both
/// diff directions. `missing` flags sentences present in the source text
/// with no counterpart in the target; `extra` is the same algorithm with
/// the roles swapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonOutcome {
    /// All sentences of the source text, in order
    pub source_sentences: Vec<String>,
    /// All sentences of the target text, in order
    pub target_sentences: Vec<String>,
    /// Source sentences without a sufficiently similar target counterpart
    pub missing: DirectionalDiff,
    /// Target sentences without a sufficiently similar source counterpart
    pub extra: DirectionalDiff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_diff_len_tracks_indices() {
        let diff = DirectionalDiff {
            sentences: vec!["It was hungry.".to_string()],
            indices: vec![1],
        };
        assert_eq!(diff.len(), 1);
        assert!(!diff.is_empty());
        assert!(DirectionalDiff::default().is_empty());
    }
}
