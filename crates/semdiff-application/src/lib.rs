//! # Semdiff Application Layer
//!
//! Use cases and port contracts for the semantic comparison pipeline.
//! This crate defines *what* collaborators the pipeline needs (embedding
//! providers, sentence segmentation, the external document source and LLM
//! comparator) and implements the two pieces with real algorithmic
//! substance: nearest-neighbor sentence alignment and the bidirectional
//! comparison orchestrator.
//!
//! ## Layout
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | Provider traits and the provider registry |
//! | [`domain_services`] | Sentence alignment (cosine nearest-neighbor diff) |
//! | [`use_cases`] | [`use_cases::ComparisonService`], the request orchestrator |
//!
//! Provider implementations live in `semdiff-providers`; wiring and
//! configuration live in `semdiff-infrastructure` and `semdiff-server`.

/// Port contracts and the provider registry
pub mod ports;

/// Domain services (alignment)
pub mod domain_services;

/// Application use cases
pub mod use_cases;

pub use use_cases::{ComparisonRequest, ComparisonService};
