//! German segmentation profile
//!
//! German additionally treats a bare number followed by a period as an
//! ordinal ("3. Oktober"), so `numeric_ordinals` is set.

use super::common::LanguageProfile;

/// Common German abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "bzw", "ca", "usw", "vgl", "evtl", "ggf", "inkl", "nr", "str", "dr", "prof", "bspw", "sog",
    "abs", "art", "bd", "hrsg", "jh", "mio", "mrd",
];

/// The German language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "de",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: true,
    }
}

#[cfg(test)]
mod tests {
    use semdiff_application::ports::providers::SentenceSegmenter;

    use super::super::common::RuleSegmenter;
    use super::profile;

    #[test]
    fn ordinals_do_not_split() {
        let segmenter = RuleSegmenter::new(profile());
        assert_eq!(
            segmenter.split("Das Fest war am 3. Oktober. Es regnete."),
            vec!["Das Fest war am 3. Oktober.", "Es regnete."]
        );
    }
}
