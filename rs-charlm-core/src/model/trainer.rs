use log::{debug, trace};

use super::store::ModelStore;

/// Builds `store` from a character stream.
///
/// # Behavior
/// - Resets `store` first; training never accumulates across runs.
/// - Reads up to `window_length` characters to fill the first window.
/// - For every following character `c`, records `c` in the distribution
///   of the current window, then slides the window by one character.
/// - Once the stream is exhausted, computes the probabilities of every
///   distribution.
///
/// # Notes
/// - A stream shorter than `window_length` is fully consumed by the
///   initial fill, leaving the store empty.
/// - The window never contains the character it is followed by.
pub(crate) fn train<I>(store: &mut ModelStore, chars: I, window_length: usize)
where
	I: IntoIterator<Item = char>,
{
	store.clear();

	let mut chars = chars.into_iter();
	let mut window: String = chars.by_ref().take(window_length).collect();

	let mut observed = 0usize;
	for c in chars {
		trace!("{:?} -> {:?}", window, c);
		store.get_or_create(&window).record_occurrence(c);
		window.remove(0);
		window.push(c);
		observed += 1;
	}

	for distribution in store.distributions_mut() {
		distribution.compute_probabilities();
	}

	debug!("Trained on {} transitions, {} distinct windows", observed, store.len());
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trained(corpus: &str, window_length: usize) -> ModelStore {
		let mut store = ModelStore::new();
		train(&mut store, corpus.chars(), window_length);
		store
	}

	#[test]
	fn test_train_synthetic_corpus() {
		let store = trained("abab", 2);

		let windows: Vec<&str> = store.iter().map(|(window, _)| window).collect();
		assert_eq!(windows, vec!["ab", "ba"]);

		let ab = store.lookup("ab").unwrap();
		assert_eq!(ab.len(), 1);
		assert_eq!(ab.first().unwrap().chr(), 'a');
		assert_eq!(ab.first().unwrap().probability(), 1.0);
		assert_eq!(ab.first().unwrap().cumulative_probability(), 1.0);

		let ba = store.lookup("ba").unwrap();
		assert_eq!(ba.len(), 1);
		assert_eq!(ba.first().unwrap().chr(), 'b');
	}

	#[test]
	fn test_count_conservation() {
		let corpus = "the cat sat on the mat, then the cat ran";
		let window_length = 3;
		let store = trained(corpus, window_length);

		let chars: Vec<char> = corpus.chars().collect();
		for (window, distribution) in store.iter() {
			let expected = chars
				.windows(window_length + 1)
				.filter(|w| w[..window_length].iter().collect::<String>() == window)
				.count();
			assert_eq!(distribution.total_count(), expected, "window {:?}", window);
		}

		let total: usize = store.iter().map(|(_, d)| d.total_count()).sum();
		assert_eq!(total, chars.len() - window_length);
	}

	#[test]
	fn test_corpus_shorter_than_window() {
		assert!(trained("ab", 4).is_empty());
		assert!(trained("", 4).is_empty());
	}

	#[test]
	fn test_corpus_exactly_one_window() {
		assert!(trained("abcd", 4).is_empty());
		assert_eq!(trained("abcde", 4).len(), 1);
	}

	#[test]
	fn test_retraining_resets_store() {
		let mut store = ModelStore::new();
		train(&mut store, "aaaa".chars(), 1);
		train(&mut store, "xyxy".chars(), 1);

		assert!(store.lookup("a").is_none());
		assert_eq!(store.lookup("x").map(|d| d.total_count()), Some(2));
	}

	#[test]
	fn test_multibyte_windows() {
		let store = trained("héhé", 2);
		assert!(store.contains("hé"));
		assert!(store.contains("éh"));
		assert_eq!(store.lookup("hé").unwrap().first().unwrap().chr(), 'h');
	}
}
