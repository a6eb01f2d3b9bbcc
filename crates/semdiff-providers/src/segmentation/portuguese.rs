//! Portuguese segmentation profile

use super::common::LanguageProfile;

/// Common Portuguese abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "sr", "sra", "dr", "dra", "prof", "etc", "pág", "av", "núm", "tel", "ex", "cap", "vol",
];

/// The Portuguese language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "pt",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}
