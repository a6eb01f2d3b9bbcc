//! Segmented Sentence Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Segmented Sentence
///
/// One unit of a segmented text, carrying its raw text and the position it
/// occupied in the segmentation run that produced it.
///
/// ## Business Rules
///
/// - Text is trimmed and never empty
/// - Indices within one sequence are dense and start at 0
/// - Immutable once created; scoped to a single comparison request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence text, trimmed
    pub text: String,
    /// Zero-based position within the segmented sequence
    pub index: usize,
}

impl Sentence {
    /// Create a sentence, trimming surrounding whitespace
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into().trim().to_string(),
            index,
        }
    }

    /// Build a dense, 0-indexed sequence from raw segmentation pieces
    ///
    /// Empty and whitespace-only pieces are dropped before indices are
    /// assigned, so the resulting sequence always satisfies the density
    /// invariant regardless of how crude the upstream splitter was.
    pub fn sequence<I, S>(pieces: I) -> Vec<Sentence>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pieces
            .into_iter()
            .map(Into::into)
            .map(|piece| piece.trim().to_string())
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(index, text)| Sentence { text, index })
            .collect()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        let sentence = Sentence::new("  The cat sat.  ", 3);
        assert_eq!(sentence.text, "The cat sat.");
        assert_eq!(sentence.index, 3);
    }

    #[test]
    fn sequence_drops_empty_pieces_and_reindexes() {
        let sentences = Sentence::sequence(vec!["First", "   ", "", "Second"]);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "First");
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].text, "Second");
        assert_eq!(sentences[1].index, 1);
    }
}
