//! Unit tests for the error taxonomy

use semdiff_domain::error::Error;

#[test]
fn client_errors_are_classified() {
    assert!(Error::invalid_input("missing text").is_client_error());
    assert!(Error::unknown_model("bogus").is_client_error());

    assert!(!Error::model_unavailable("sentence-transformers/LaBSE", "down").is_client_error());
    assert!(!Error::resource_unavailable("segmenter/de", "not compiled").is_client_error());
    assert!(!Error::embedding("bad payload").is_client_error());
    assert!(!Error::internal("boom").is_client_error());
}

#[test]
fn unknown_model_message_names_the_selector() {
    let err = Error::unknown_model("wrong-model");
    assert_eq!(
        err.to_string(),
        "Invalid model selected. wrong-model does not exist."
    );
}

#[test]
fn resource_unavailable_names_the_resource() {
    let err = Error::resource_unavailable("segmenter/de", "not compiled into this build");
    let message = err.to_string();
    assert!(message.contains("segmenter/de"));
    assert!(message.contains("not compiled"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io { .. }));
}
