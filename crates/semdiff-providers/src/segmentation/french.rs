//! French segmentation profile

use super::common::LanguageProfile;

/// Common French abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "mm", "mme", "mlle", "dr", "st", "ste", "etc", "env", "av", "bd", "fig", "chap", "vol", "cf",
    "ex", "tel",
];

/// The French language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "fr",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}
