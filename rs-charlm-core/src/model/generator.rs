use log::{debug, trace};
use rand::Rng;

use super::sampler;
use super::store::ModelStore;

/// Why a generation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
	/// The text reached the target length.
	ReachedLength,
	/// The trailing window of the text was never seen during training.
	UnseenWindow,
	/// The seed text is shorter than a window, or its trailing window is
	/// unknown; nothing was generated.
	SeedTooShortOrUnseen,
}

/// Lifecycle of a [`Generator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
	NotStarted,
	Generating,
	Terminated(Termination),
}

/// Result of a generation: the full text (seed included) and the reason
/// the generation stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	pub text: String,
	pub termination: Termination,
}

/// Step-by-step text generator over a trained store.
///
/// # Responsibilities
/// - Validate the seed text against the store
/// - Sample one character per step from the distribution of the
///   trailing window
/// - Slide the window after each emitted character
/// - Stop on target length or on an unseen window
///
/// The store is only read, so several generators may share it as long as
/// each one has its own random source.
pub struct Generator<'a, R: Rng> {
	store: &'a ModelStore,
	window_length: usize,
	target_length: usize,
	rng: &'a mut R,
	text: String,
	/// Number of characters in `text`
	length: usize,
	window: String,
	state: GeneratorState,
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator extending `seed_text` up to `target_length`
	/// characters.
	pub fn new(store: &'a ModelStore, window_length: usize, seed_text: &str, target_length: usize, rng: &'a mut R) -> Self {
		Self {
			store,
			window_length,
			target_length,
			rng,
			text: seed_text.to_owned(),
			length: seed_text.chars().count(),
			window: String::new(),
			state: GeneratorState::NotStarted,
		}
	}

	pub fn state(&self) -> GeneratorState {
		self.state
	}

	/// Text produced so far, seed included.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Advances the state machine by one transition.
	///
	/// - `NotStarted` checks the seed and moves to `Generating` or
	///   `Terminated(SeedTooShortOrUnseen)`.
	/// - `Generating` emits one character, or terminates on target length
	///   or unseen window.
	/// - `Terminated` is final.
	pub fn step(&mut self) -> GeneratorState {
		self.state = match self.state {
			GeneratorState::NotStarted => self.start(),
			GeneratorState::Generating => self.emit(),
			terminated => terminated,
		};
		self.state
	}

	/// Runs the generator to termination.
	pub fn run(mut self) -> Generation {
		loop {
			if let GeneratorState::Terminated(termination) = self.step() {
				debug!("Generated {} characters ({:?})", self.length, termination);
				return Generation { text: self.text, termination };
			}
		}
	}

	fn start(&mut self) -> GeneratorState {
		if self.length < self.window_length {
			return GeneratorState::Terminated(Termination::SeedTooShortOrUnseen);
		}

		self.window = last_n_chars(&self.text, self.window_length);
		if !self.store.contains(&self.window) {
			return GeneratorState::Terminated(Termination::SeedTooShortOrUnseen);
		}
		GeneratorState::Generating
	}

	fn emit(&mut self) -> GeneratorState {
		if self.length >= self.target_length {
			return GeneratorState::Terminated(Termination::ReachedLength);
		}

		let store = self.store;
		let Some(distribution) = store.lookup(&self.window) else {
			return GeneratorState::Terminated(Termination::UnseenWindow);
		};

		let c = sampler::sample_with(distribution, &mut *self.rng);
		trace!("{:?} -> {:?}", self.window, c);

		self.text.push(c);
		self.length += 1;
		self.window.remove(0);
		self.window.push(c);
		GeneratorState::Generating
	}
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned. Counts characters, not bytes.
fn last_n_chars(s: &str, n: usize) -> String {
	let len = s.chars().count();
	s.chars().skip(len.saturating_sub(n)).collect()
}
