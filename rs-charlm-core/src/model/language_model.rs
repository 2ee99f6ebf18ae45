use std::fmt;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::generator::{Generation, Generator};
use super::store::ModelStore;
use super::trainer;
use crate::error::{ModelError, Result};
use crate::io::read_corpus;

/// Character-level sliding-window language model.
///
/// The model maps every window of `window_length` consecutive characters
/// seen in a corpus to the distribution of the character that follows it,
/// then generates text by sampling from those distributions.
///
/// # Responsibilities
/// - Own the window length, the random source and the trained store
/// - Train from a character stream or a corpus file
/// - Generate text from a seed string
/// - Dump the whole model (`Display`)
///
/// # Invariants
/// - `window_length >= 1`
/// - The store is only modified by training; generation reads it
#[derive(Debug)]
pub struct LanguageModel {
	/// Number of characters in a context window
	window_length: usize,

	/// Seed of `rng`, `None` when seeded from the operating system
	seed: Option<u64>,

	/// Random source used by `generate`
	rng: StdRng,

	store: ModelStore,
}

impl LanguageModel {
	/// Creates an untrained model.
	///
	/// - `Some(seed)`: every generation is reproducible for the same
	///   corpus, seed text and target length.
	/// - `None`: the random source is seeded by the operating system.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidWindowLength`] if `window_length == 0`.
	pub fn new(window_length: usize, seed: Option<u64>) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}

		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self { window_length, seed, rng, store: ModelStore::new() })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}

	/// Read-only access to the trained windows.
	pub fn store(&self) -> &ModelStore {
		&self.store
	}

	/// Trains the model on a character stream.
	///
	/// Any previous training is discarded.
	pub fn train<I>(&mut self, chars: I)
	where
		I: IntoIterator<Item = char>,
	{
		trainer::train(&mut self.store, chars, self.window_length);
	}

	/// Trains the model on the content of a UTF-8 text file.
	///
	/// # Errors
	/// Returns [`ModelError::Io`] if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let corpus = read_corpus(&filepath)?;
		info!("Training on {} ({} bytes)", filepath.as_ref().display(), corpus.len());
		self.train(corpus.chars());
		Ok(())
	}

	/// Generates text starting from `seed_text`, up to `target_length`
	/// characters in total (seed included).
	///
	/// Returns `seed_text` unchanged if it is shorter than a window or if
	/// its trailing window was never seen. Generation stops early when it
	/// reaches an unseen window.
	pub fn generate(&mut self, seed_text: &str, target_length: usize) -> String {
		self.generate_with_outcome(seed_text, target_length).text
	}

	/// Same as [`generate`](Self::generate), also reporting why the
	/// generation stopped.
	pub fn generate_with_outcome(&mut self, seed_text: &str, target_length: usize) -> Generation {
		Generator::new(&self.store, self.window_length, seed_text, target_length, &mut self.rng).run()
	}

	/// Generates with a caller-provided random source, leaving the model
	/// untouched.
	///
	/// Lets independent callers share one trained model, each with its own
	/// generator.
	pub fn generate_with_rng<R: Rng>(&self, seed_text: &str, target_length: usize, rng: &mut R) -> Generation {
		Generator::new(&self.store, self.window_length, seed_text, target_length, rng).run()
	}
}

/// One line per window, in first-seen order:
/// `window : ((c count p cp) ...)`
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in self.store.iter() {
			writeln!(f, "{} : {}", window, distribution)?;
		}
		Ok(())
	}
}
