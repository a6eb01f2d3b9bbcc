//! Profile-Driven Rule Segmenter
//!
//! The shared splitting machinery behind every linguistic segmenter.
//! Works on UAX-29 word boundaries (unicode-segmentation), which keeps
//! decimals ("3.14") and dotted abbreviations ("z.B.", "U.S.A.") together
//! as single tokens, so only bare single-word abbreviations need to be
//! listed per language.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use semdiff_application::ports::providers::SentenceSegmenter;

/// Per-language segmentation profile
///
/// `abbreviations` are lowercase, without the trailing period. Dotted
/// abbreviations need no listing; UAX-29 already keeps them whole.
/// `numeric_ordinals` marks languages (German) where a bare number
/// followed by a period is an ordinal, not a sentence end.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    /// Language code this profile serves
    pub language: &'static str,
    /// Known sentence-internal abbreviations, lowercase, no trailing dot
    pub abbreviations: &'static [&'static str],
    /// Whether "<digits>." marks an ordinal rather than a sentence end
    pub numeric_ordinals: bool,
}

/// Abbreviation-aware sentence segmenter for one language
pub struct RuleSegmenter {
    profile: LanguageProfile,
    abbreviations: HashSet<&'static str>,
}

impl RuleSegmenter {
    /// Build a segmenter from a language profile
    pub fn new(profile: LanguageProfile) -> Self {
        let abbreviations = profile.abbreviations.iter().copied().collect();
        Self {
            profile,
            abbreviations,
        }
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        split_sentences(text, &self.profile, &self.abbreviations)
    }

    fn language(&self) -> &'static str {
        self.profile.language
    }
}

/// Whether a token is a sentence-terminating punctuation mark
fn is_terminator(token: &str) -> bool {
    matches!(token, "." | "!" | "?")
}

/// Whether a token closes a quotation or bracket and belongs to the
/// sentence it follows
fn is_closer(token: &str) -> bool {
    matches!(token, "\"" | "'" | ")" | "]" | "\u{00BB}" | "\u{201D}" | "\u{2019}")
}

/// Whether a token starts with an alphanumeric character (a "word")
fn is_word(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphanumeric)
}

/// Split text into sentences using the profile's boundary rules
///
/// Terminators `!` and `?` always end a sentence. A period ends one
/// unless it follows a listed abbreviation, a dotted token, a
/// single-letter initial, a numeric ordinal (profile-dependent), or is
/// followed by a lowercase continuation. Trailing terminator runs and
/// closing quotes are kept with the sentence they close.
fn split_sentences(
    text: &str,
    profile: &LanguageProfile,
    abbreviations: &HashSet<&'static str>,
) -> Vec<String> {
    let tokens: Vec<&str> = text.split_word_bounds().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut prev_word: Option<&str> = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        current.push_str(token);
        if is_word(token) {
            prev_word = Some(token);
        }

        if is_terminator(token)
            && is_boundary(token, prev_word, &tokens[i + 1..], profile, abbreviations)
        {
            // Keep an immediately following terminator run ("?!", "..")
            // and closing quotes with the finished sentence.
            let mut j = i + 1;
            while j < tokens.len() && (is_terminator(tokens[j]) || is_closer(tokens[j])) {
                current.push_str(tokens[j]);
                j += 1;
            }
            push_trimmed(&mut sentences, &mut current);
            prev_word = None;
            i = j;
            continue;
        }

        i += 1;
    }

    push_trimmed(&mut sentences, &mut current);
    sentences
}

/// Decide whether a terminator token actually ends the sentence
fn is_boundary(
    token: &str,
    prev_word: Option<&str>,
    rest: &[&str],
    profile: &LanguageProfile,
    abbreviations: &HashSet<&'static str>,
) -> bool {
    if token != "." {
        return true;
    }

    let Some(word) = prev_word else {
        return true;
    };

    // Dotted abbreviations and decimals arrive as single tokens
    if word.contains('.') {
        return false;
    }

    if abbreviations.contains(word.to_lowercase().as_str()) {
        return false;
    }

    // Single-letter initials: "J. Smith"
    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        if first.is_uppercase() {
            return false;
        }
    }

    // Numeric ordinals: "3. Oktober"
    if profile.numeric_ordinals && word.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // A lowercase continuation suggests an unlisted abbreviation
    if let Some(next_word) = rest.iter().find(|t| is_word(t)) {
        if next_word.chars().next().is_some_and(char::is_lowercase) {
            return false;
        }
    }

    true
}

/// Push the accumulated sentence if it is non-empty after trimming
fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let piece = current.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_profile() -> LanguageProfile {
        LanguageProfile {
            language: "xx",
            abbreviations: &["dr", "etc"],
            numeric_ordinals: false,
        }
    }

    fn split(text: &str) -> Vec<String> {
        RuleSegmenter::new(plain_profile()).split(text)
    }

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            split("One sentence. Another one! A third? Done."),
            vec!["One sentence.", "Another one!", "A third?", "Done."]
        );
    }

    #[test]
    fn keeps_listed_abbreviations() {
        assert_eq!(
            split("Dr. Smith arrived. He sat down."),
            vec!["Dr. Smith arrived.", "He sat down."]
        );
    }

    #[test]
    fn keeps_dotted_tokens_whole() {
        assert_eq!(
            split("The U.S.A. Senate met. It adjourned."),
            vec!["The U.S.A. Senate met.", "It adjourned."]
        );
        assert_eq!(split("Pi is 3.14 roughly. True."), vec![
            "Pi is 3.14 roughly.",
            "True."
        ]);
    }

    #[test]
    fn keeps_single_letter_initials() {
        assert_eq!(
            split("J. Smith spoke. Everyone listened."),
            vec!["J. Smith spoke.", "Everyone listened."]
        );
    }

    #[test]
    fn terminator_runs_stay_with_their_sentence() {
        assert_eq!(split("Really?! Yes."), vec!["Really?!", "Yes."]);
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        assert_eq!(split("It cost approx. ten euros. Cheap."), vec![
            "It cost approx. ten euros.",
            "Cheap."
        ]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }
}
