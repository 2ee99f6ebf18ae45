//! Top-level module for the sliding-window language model.
//!
//! This module provides:
//! - Per-window next-character statistics (`CharacterDistribution`)
//! - The insertion-ordered window store (`ModelStore`)
//! - Training over a character stream (`trainer`)
//! - Weighted sampling (`sampler`)
//! - Step-by-step generation (`Generator`)
//! - The public façade tying them together (`LanguageModel`)

/// Ordered next-character distribution of one window.
///
/// Tracks occurrence counts and derives probabilities and cumulative
/// probabilities used by sampling.
pub mod distribution;

/// Mapping from window to distribution, enumerated in first-seen order.
pub mod store;

/// Sliding-window training over a character stream.
///
/// Not exposed: training goes through `LanguageModel::train`.
mod trainer;

/// Inverse-CDF sampling of one character from a distribution.
pub mod sampler;

/// Generation state machine (seed check, sampling loop, termination).
pub mod generator;

/// High-level model: construction, training, generation and dump.
pub mod language_model;
