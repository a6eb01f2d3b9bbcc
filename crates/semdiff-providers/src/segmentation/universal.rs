//! Universal Fallback Splitter
//!
//! Language-agnostic sentence splitting for codes without a registered
//! linguistic segmenter. Treats `.`, `!` and `?` as equivalent
//! terminators and splits on them with no abbreviation handling. The
//! crudeness is a documented approximation: "Dr. Smith" becomes two
//! pieces here, and terminators are not preserved in the output.

/// Split text on sentence-terminating punctuation
///
/// Empty and whitespace-only pieces are dropped; remaining pieces are
/// trimmed and returned in input order.
pub fn universal_split(text: &str) -> Vec<String> {
    text.replace('!', ".")
        .replace('?', ".")
        .split('.')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}
