//! Error types for the language model

/// Errors that can occur while building or querying a model.
///
/// Unseen windows and degenerate sampling are not errors: they are
/// regular termination paths of generation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
	#[error("window length must be >= 1")]
	InvalidWindowLength,

	#[error("index {index} out of bounds for distribution of length {len}")]
	IndexOutOfBounds { index: usize, len: usize },

	#[error("failed to read corpus")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
