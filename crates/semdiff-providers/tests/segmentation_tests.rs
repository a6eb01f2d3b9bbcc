//! Integration tests for the segmentation engine

use semdiff_application::ports::providers::ArticleSegmenter;
use semdiff_providers::segmentation::{DECLARED_LANGUAGES, SegmentationEngine, universal_split};

fn texts(engine: &SegmentationEngine, text: &str, language: &str) -> Vec<String> {
    engine
        .segment(text, language)
        .unwrap()
        .into_iter()
        .map(|sentence| sentence.text)
        .collect()
}

#[test]
fn unknown_language_uses_the_universal_fallback() {
    let engine = SegmentationEngine::new();

    // Double line-break is a title boundary, single line-breaks become
    // sentence terminators
    assert_eq!(
        texts(&engine, "Hello world.\n\nSecond para.\nThird line.", "xx"),
        vec!["Hello world", "Second para", "Third line"]
    );
}

#[test]
fn empty_and_whitespace_input_segment_to_nothing() {
    let engine = SegmentationEngine::new();
    assert!(engine.segment("", "en").unwrap().is_empty());
    assert!(engine.segment("   \n\n  ", "xx").unwrap().is_empty());
}

#[test]
fn english_keeps_sentence_terminators() {
    let engine = SegmentationEngine::new();
    assert_eq!(
        texts(&engine, "The cat sat. It was hungry.", "en"),
        vec!["The cat sat.", "It was hungry."]
    );
}

#[test]
fn english_abbreviations_do_not_split() {
    let engine = SegmentationEngine::new();
    assert_eq!(
        texts(&engine, "Dr. Smith arrived at 3.15 pm. He sat down.", "en"),
        vec!["Dr. Smith arrived at 3.15 pm.", "He sat down."]
    );
}

#[test]
fn indices_are_dense_and_ordered() {
    let engine = SegmentationEngine::new();
    let sentences = engine
        .segment("One. Two! Three? Four.", "en")
        .unwrap();

    assert_eq!(sentences.len(), 4);
    for (position, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence.index, position);
        assert!(!sentence.text.trim().is_empty());
    }
}

#[test]
fn paragraph_breaks_never_create_sentences() {
    let engine = SegmentationEngine::new();
    // The double line-break collapses to a space: an unterminated title
    // glues onto the following sentence instead of becoming its own
    assert_eq!(
        texts(&engine, "Some title\n\nbody of the article.", "en"),
        vec!["Some title body of the article."]
    );
    assert_eq!(
        texts(&engine, "Hello world.\n\nSecond para. Third one.", "en"),
        vec!["Hello world.", "Second para.", "Third one."]
    );
}

#[test]
fn empty_language_code_uses_the_fallback() {
    let engine = SegmentationEngine::new();
    assert_eq!(
        texts(&engine, "Une phrase! Deux phrases?", ""),
        vec!["Une phrase", "Deux phrases"]
    );
}

#[test]
fn declared_languages_are_linguistic() {
    let engine = SegmentationEngine::new();
    for language in DECLARED_LANGUAGES {
        assert!(engine.is_linguistic(language));
    }
    assert!(!engine.is_linguistic("xx"));
    assert!(!engine.is_linguistic(""));
    assert_eq!(engine.declared_languages(), DECLARED_LANGUAGES);
}

#[test]
fn german_segmentation_handles_ordinals() {
    let engine = SegmentationEngine::new();
    assert_eq!(
        texts(&engine, "Die Mauer fiel am 9. November. Berlin feierte.", "de"),
        vec!["Die Mauer fiel am 9. November.", "Berlin feierte."]
    );
}

#[test]
fn universal_split_drops_terminators_by_design() {
    assert_eq!(
        universal_split("Dr. Smith arrived."),
        vec!["Dr", "Smith arrived"]
    );
}

#[test]
fn segmentation_is_stable_across_runs() {
    let engine = SegmentationEngine::new();
    let text = "First sentence. Second sentence! Third?";
    assert_eq!(
        engine.segment(text, "en").unwrap(),
        engine.segment(text, "en").unwrap()
    );
}

// Exercised only when the build excludes a declared language
#[cfg(not(feature = "lang-de"))]
#[test]
fn declared_language_without_segmenter_is_unavailable() {
    use semdiff_domain::error::Error;

    let engine = SegmentationEngine::new();
    let err = engine.segment("Ein Satz.", "de").unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
}

#[cfg(feature = "lang-de")]
#[test]
fn declared_language_with_segmenter_never_errors() {
    let engine = SegmentationEngine::new();
    assert!(engine.segment("Ein Satz.", "de").is_ok());
}
