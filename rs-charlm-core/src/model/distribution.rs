use std::fmt;

use crate::error::{ModelError, Result};

/// Statistics of one character following a given window.
///
/// `probability` and `cumulative_probability` are only meaningful once
/// [`CharacterDistribution::compute_probabilities`] has run; before that
/// they are `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	chr: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharData {
	fn new(chr: char) -> Self {
		Self { chr, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	pub fn chr(&self) -> char {
		self.chr
	}

	/// Number of times this character followed the window.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {:?} {:?})", self.chr, self.count, self.probability, self.cumulative_probability)
	}
}

/// Next-character distribution of a single context window.
///
/// Entries are kept in first-seen order. That order is the enumeration
/// order of the dump and the scan order of sampling, so it never changes
/// on update.
///
/// # Invariants
/// - At most one entry per distinct character
/// - Every entry has `count >= 1`
/// - After `compute_probabilities`, cumulative probabilities are
///   non-decreasing in iteration order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterDistribution {
	entries: Vec<CharData>,
}

impl CharacterDistribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `chr` after the window.
	///
	/// - If an entry for `chr` exists, its count is increased.
	/// - Otherwise, a new entry with a count of 1 is appended.
	pub fn record_occurrence(&mut self, chr: char) {
		match self.entries.iter_mut().find(|entry| entry.chr == chr) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharData::new(chr)),
		}
	}

	/// Computes `probability` and `cumulative_probability` of every entry.
	///
	/// Probabilities are exact `count / total` divisions; the cumulative
	/// value is the running sum in iteration order, current entry included.
	/// An empty distribution is left untouched.
	pub fn compute_probabilities(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let total = total as f64;
		let mut cumulative = 0.0;
		for entry in &mut self.entries {
			entry.probability = entry.count as f64 / total;
			cumulative += entry.probability;
			entry.cumulative_probability = cumulative;
		}
	}

	/// Sum of the counts of all entries.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(CharData::count).sum()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the position of the entry for `chr`, if any.
	pub fn index_of(&self, chr: char) -> Option<usize> {
		self.entries.iter().position(|entry| entry.chr == chr)
	}

	/// Returns the entry at `index`.
	///
	/// # Errors
	/// Returns [`ModelError::IndexOutOfBounds`] if `index >= len()`.
	pub fn get(&self, index: usize) -> Result<&CharData> {
		self.entries
			.get(index)
			.ok_or(ModelError::IndexOutOfBounds { index, len: self.entries.len() })
	}

	pub fn first(&self) -> Option<&CharData> {
		self.entries.first()
	}

	/// Removes the entry for `chr`.
	///
	/// Returns `true` if an entry was removed. Probabilities of the
	/// remaining entries are stale until `compute_probabilities` is called
	/// again.
	pub fn remove(&mut self, chr: char) -> bool {
		match self.index_of(chr) {
			Some(index) => {
				self.entries.remove(index);
				true
			}
			None => false,
		}
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, CharData> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a CharacterDistribution {
	type Item = &'a CharData;
	type IntoIter = std::slice::Iter<'a, CharData>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for CharacterDistribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{}", entry)?;
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn distribution_of(text: &str) -> CharacterDistribution {
		let mut distribution = CharacterDistribution::new();
		text.chars().for_each(|c| distribution.record_occurrence(c));
		distribution
	}

	#[test]
	fn test_record_occurrence_appends_and_counts() {
		let distribution = distribution_of("abca");

		let chars: Vec<(char, usize)> = distribution.iter().map(|e| (e.chr(), e.count())).collect();
		assert_eq!(chars, vec![('a', 2), ('b', 1), ('c', 1)]);
		assert_eq!(distribution.total_count(), 4);
	}

	#[test]
	fn test_update_does_not_reorder() {
		let distribution = distribution_of("xyyyy");
		assert_eq!(distribution.index_of('x'), Some(0));
		assert_eq!(distribution.index_of('y'), Some(1));
		assert_eq!(distribution.index_of('z'), None);
	}

	#[test]
	fn test_compute_probabilities() {
		let mut distribution = distribution_of("aabc");
		distribution.compute_probabilities();

		let a = distribution.get(0).unwrap();
		let b = distribution.get(1).unwrap();
		let c = distribution.get(2).unwrap();
		assert_eq!(a.probability(), 0.5);
		assert_eq!(a.cumulative_probability(), 0.5);
		assert_eq!(b.probability(), 0.25);
		assert_eq!(b.cumulative_probability(), 0.75);
		assert_eq!(c.probability(), 0.25);
		assert_eq!(c.cumulative_probability(), 1.0);
	}

	#[test]
	fn test_probabilities_are_normalized() {
		let mut distribution = distribution_of("committee of seven");
		distribution.compute_probabilities();

		let sum: f64 = distribution.iter().map(CharData::probability).sum();
		let last = distribution.get(distribution.len() - 1).unwrap();
		assert!((sum - 1.0).abs() < 1e-9);
		assert!((last.cumulative_probability() - sum).abs() < 1e-12);

		let mut previous = 0.0;
		for entry in &distribution {
			assert!(entry.cumulative_probability() >= previous);
			previous = entry.cumulative_probability();
		}
	}

	#[test]
	fn test_empty_distribution() {
		let mut distribution = CharacterDistribution::new();
		distribution.compute_probabilities();

		assert!(distribution.is_empty());
		assert_eq!(distribution.total_count(), 0);
		assert!(distribution.first().is_none());
		assert_eq!(distribution.to_string(), "()");
	}

	#[test]
	fn test_get_out_of_bounds() {
		let distribution = distribution_of("ab");
		match distribution.get(2) {
			Err(ModelError::IndexOutOfBounds { index, len }) => {
				assert_eq!(index, 2);
				assert_eq!(len, 2);
			}
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_remove() {
		let mut distribution = distribution_of("abc");
		assert!(distribution.remove('b'));
		assert!(!distribution.remove('b'));
		assert_eq!(distribution.len(), 2);
		assert_eq!(distribution.first().map(CharData::chr), Some('a'));
		assert_eq!(distribution.index_of('c'), Some(1));
	}

	#[test]
	fn test_display() {
		let mut distribution = distribution_of("aab");
		distribution.compute_probabilities();
		assert_eq!(
			distribution.to_string(),
			"((a 2 0.6666666666666666 0.6666666666666666) (b 1 0.3333333333333333 1.0))"
		);
	}
}
