use std::collections::HashMap;

use super::distribution::CharacterDistribution;

/// Mapping from a context window to its next-character distribution.
///
/// Windows are enumerated in the order they were first seen during
/// training, which keeps the model dump reproducible.
///
/// # Invariants
/// - `index[window]` is the position of `window` in `windows`
/// - Each window appears once
#[derive(Clone, Debug, Default)]
pub struct ModelStore {
	/// Windows and their distributions, in first-seen order.
	windows: Vec<(String, CharacterDistribution)>,

	/// Position of each window in `windows`.
	index: HashMap<String, usize>,
}

impl ModelStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the distribution of `window`, registering an empty one
	/// at the end of the enumeration order if the window is new.
	pub fn get_or_create(&mut self, window: &str) -> &mut CharacterDistribution {
		let position = match self.index.get(window) {
			Some(&position) => position,
			None => {
				let position = self.windows.len();
				self.windows.push((window.to_owned(), CharacterDistribution::new()));
				self.index.insert(window.to_owned(), position);
				position
			}
		};
		&mut self.windows[position].1
	}

	/// Returns the distribution of `window`, or `None` if it was never seen.
	pub fn lookup(&self, window: &str) -> Option<&CharacterDistribution> {
		self.index.get(window).map(|&position| &self.windows[position].1)
	}

	pub fn contains(&self, window: &str) -> bool {
		self.index.contains_key(window)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Removes every window.
	pub fn clear(&mut self) {
		self.windows.clear();
		self.index.clear();
	}

	/// Iterates over `(window, distribution)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterDistribution)> {
		self.windows.iter().map(|(window, distribution)| (window.as_str(), distribution))
	}

	pub(crate) fn distributions_mut(&mut self) -> impl Iterator<Item = &mut CharacterDistribution> {
		self.windows.iter_mut().map(|(_, distribution)| distribution)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_or_create_registers_once() {
		let mut store = ModelStore::new();
		store.get_or_create("ab").record_occurrence('c');
		store.get_or_create("ab").record_occurrence('c');

		assert_eq!(store.len(), 1);
		assert_eq!(store.lookup("ab").map(|d| d.total_count()), Some(2));
	}

	#[test]
	fn test_lookup_does_not_create() {
		let store = ModelStore::new();
		assert!(store.lookup("zz").is_none());
		assert!(store.is_empty());
	}

	#[test]
	fn test_iteration_follows_first_seen_order() {
		let mut store = ModelStore::new();
		for window in ["th", "he", "e ", "th", " t", "he"] {
			store.get_or_create(window).record_occurrence('x');
		}

		let windows: Vec<&str> = store.iter().map(|(window, _)| window).collect();
		assert_eq!(windows, vec!["th", "he", "e ", " t"]);
	}

	#[test]
	fn test_clear() {
		let mut store = ModelStore::new();
		store.get_or_create("ab");
		store.clear();

		assert!(store.is_empty());
		assert!(!store.contains("ab"));
		store.get_or_create("cd");
		assert_eq!(store.iter().next().map(|(window, _)| window), Some("cd"));
	}
}
