//! Italian segmentation profile

use super::common::LanguageProfile;

/// Common Italian abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "sig", "sigg", "dott", "prof", "ing", "avv", "ecc", "pag", "tel", "es", "cap", "vol",
];

/// The Italian language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "it",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}
