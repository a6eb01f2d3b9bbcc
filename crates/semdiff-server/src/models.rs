//! Request and Response Models
//!
//! Wire schemas for the comparison endpoints. Field names follow the
//! established client contract (`article_text_blob_1`,
//! `left_article_array`, ...) and must not drift.

use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use semdiff_domain::constants::SEMANTIC_COMPARE_DEFAULT_THRESHOLD;
use semdiff_domain::value_objects::ComparisonOutcome;

/// Default language code for sides that do not specify one
fn default_language() -> String {
    "en".to_string()
}

/// Default threshold on the strict semantic path
fn default_semantic_threshold() -> f32 {
    SEMANTIC_COMPARE_DEFAULT_THRESHOLD
}

/// Document comparison request (lenient path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Text of the first article
    pub article_text_blob_1: String,
    /// Text of the second article
    pub article_text_blob_2: String,
    /// Language code of the first article
    #[serde(default = "default_language")]
    pub article_text_blob_1_language: String,
    /// Language code of the second article
    #[serde(default = "default_language")]
    pub article_text_blob_2_language: String,
    /// Similarity threshold; the configured default applies when unset
    #[serde(default)]
    pub comparison_threshold: Option<f32>,
    /// Model selector; unknown selectors resolve to the default model
    #[serde(default)]
    pub model_name: Option<String>,
}

/// One comparison result in the document-compare response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// All sentences of the first article, in order
    pub left_article_array: Vec<String>,
    /// All sentences of the second article, in order
    pub right_article_array: Vec<String>,
    /// Indices into `left_article_array` flagged as missing from the right
    pub left_article_missing_info_index: Vec<usize>,
    /// Indices into `right_article_array` flagged as extra over the left
    pub right_article_extra_info_index: Vec<usize>,
}

impl From<ComparisonOutcome> for ComparisonEntry {
    fn from(outcome: ComparisonOutcome) -> Self {
        Self {
            left_article_array: outcome.source_sentences,
            right_article_array: outcome.target_sentences,
            left_article_missing_info_index: outcome.missing.indices,
            right_article_extra_info_index: outcome.extra.indices,
        }
    }
}

/// Document comparison response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    /// Comparison results (currently always exactly one)
    pub comparisons: Vec<ComparisonEntry>,
}

/// Semantic comparison request (strict path, JSON body)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SemanticCompareRequest {
    /// Text of the first article
    pub text_a: String,
    /// Text of the second article
    pub text_b: String,
    /// Similarity threshold, in [0, 1]
    #[serde(default = "default_semantic_threshold")]
    #[validate(range(
        min = 0.0,
        max = 1.0,
        message = "Provided similarity threshold is out of the defined valid range [0,1]"
    ))]
    pub similarity_threshold: f32,
    /// Model selector; must name a cataloged model
    #[serde(default)]
    pub model_name: Option<String>,
    /// Language code of the first article
    #[serde(default = "default_language")]
    pub lang_a: String,
    /// Language code of the second article
    #[serde(default = "default_language")]
    pub lang_b: String,
}

/// One flagged sentence with its position in the full sentence array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceRef {
    /// The flagged sentence text
    pub sentence: String,
    /// Index of the sentence in its side's full array
    pub index: usize,
}

/// Semantic comparison response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleComparisonResponse {
    /// Sentences of the first text without a counterpart in the second
    pub missing_info: Vec<SentenceRef>,
    /// Sentences of the second text without a counterpart in the first
    pub extra_info: Vec<SentenceRef>,
}

impl From<ComparisonOutcome> for ArticleComparisonResponse {
    fn from(outcome: ComparisonOutcome) -> Self {
        let missing_info = outcome
            .missing
            .indices
            .iter()
            .zip(outcome.missing.sentences.iter())
            .map(|(&index, sentence)| SentenceRef {
                sentence: sentence.clone(),
                index,
            })
            .collect();
        let extra_info = outcome
            .extra
            .indices
            .iter()
            .zip(outcome.extra.sentences.iter())
            .map(|(&index, sentence)| SentenceRef {
                sentence: sentence.clone(),
                index,
            })
            .collect();

        Self {
            missing_info,
            extra_info,
        }
    }
}

/// Error payload returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl ErrorResponse {
    /// Create an error payload
    pub fn new(detail: impl Into<String>) -> Json<Self> {
        Json(Self {
            detail: detail.into(),
        })
    }
}
