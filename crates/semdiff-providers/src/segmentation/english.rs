//! English segmentation profile
//!
//! Abbreviation inventory for English sentence boundary detection.
//! Dotted forms ("e.g.", "i.e.", "U.S.") need no listing; UAX-29 word
//! boundaries already keep them whole.

use super::common::LanguageProfile;

/// Common English abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "st", "jr", "sr", "vs", "etc",
    "inc", "ltd", "co", "corp", "dept", "est", "fig", "no", "vol", "pp", "approx", "ca", "cf",
    "al", "ed", "eds",
];

/// The English language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "en",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}

#[cfg(test)]
mod tests {
    use semdiff_application::ports::providers::SentenceSegmenter;

    use super::super::common::RuleSegmenter;
    use super::profile;

    #[test]
    fn titles_do_not_split() {
        let segmenter = RuleSegmenter::new(profile());
        assert_eq!(
            segmenter.split("Mr. Jones met Mrs. Smith. They spoke briefly."),
            vec!["Mr. Jones met Mrs. Smith.", "They spoke briefly."]
        );
    }

    #[test]
    fn dotted_abbreviations_survive() {
        let segmenter = RuleSegmenter::new(profile());
        assert_eq!(
            segmenter.split("Bring fruit, e.g. apples. Nothing else."),
            vec!["Bring fruit, e.g. apples.", "Nothing else."]
        );
    }
}
