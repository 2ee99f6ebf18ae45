use log::warn;
use rand::Rng;

use super::distribution::CharacterDistribution;

/// Character returned when no entry covers the random draw.
pub const FALLBACK_CHAR: char = ' ';

/// Selects a character from `distribution` for the uniform draw `r`.
///
/// Entries are scanned in iteration order and the first one with
/// `r < cumulative_probability` wins. `r` is expected in `[0, 1)`.
///
/// # Notes
/// - The distribution must have its probabilities computed.
/// - If no entry matches (floating-point rounding left the last
///   cumulative value below `r`, or the distribution is empty),
///   [`FALLBACK_CHAR`] is returned.
pub fn sample(distribution: &CharacterDistribution, r: f64) -> char {
	for entry in distribution {
		if r < entry.cumulative_probability() {
			return entry.chr();
		}
	}

	warn!("No entry covers draw {}, falling back to {:?}", r, FALLBACK_CHAR);
	FALLBACK_CHAR
}

/// Draws `r` uniformly in `[0, 1)` from `rng`, then [`sample`]s.
pub fn sample_with<R: Rng>(distribution: &CharacterDistribution, rng: &mut R) -> char {
	let r: f64 = rng.random();
	sample(distribution, r)
}
