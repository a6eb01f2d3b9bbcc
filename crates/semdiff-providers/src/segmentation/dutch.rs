//! Dutch segmentation profile

use super::common::LanguageProfile;

/// Common Dutch abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "dhr", "mevr", "dr", "drs", "prof", "ir", "bv", "enz", "bijv", "ca", "nr", "blz", "afd",
    "tel",
];

/// The Dutch language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "nl",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}
