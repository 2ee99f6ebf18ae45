//! Character-level sliding-window language model.
//!
//! This crate provides a small Markov text generator including:
//! - Per-window next-character distributions with cumulative probabilities
//! - An insertion-ordered store of every window seen during training
//! - Seeded (reproducible) or unseeded weighted sampling
//! - Text generation from a seed string up to a target length
//!
//! The entry point is [`model::language_model::LanguageModel`].

/// Model types, training, sampling and generation.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ModelError, Result};
pub use model::language_model::LanguageModel;
