//! Spanish segmentation profile

use super::common::LanguageProfile;

/// Common Spanish abbreviations that end in a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "sr", "sra", "srta", "dr", "dra", "ud", "uds", "etc", "aprox", "av", "núm", "pág", "tel",
    "dpto", "ej",
];

/// The Spanish language profile
pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: "es",
        abbreviations: ABBREVIATIONS,
        numeric_ordinals: false,
    }
}
