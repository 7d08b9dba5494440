use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;

/// A candidate list shorter than this is backfilled with generic imagery.
pub const MIN_OPTIONS: usize = 3;

/// Generic imagery range used to backfill the first list.
const ELEMENT1_FALLBACK: (usize, usize) = (0, 5);

/// Generic imagery range used to backfill the second list.
const ELEMENT2_FALLBACK: (usize, usize) = (5, 10);

/// Candidate imagery derived from a name, one list per blind-box element.
///
/// Both lists are duplicate-free and keep first-seen order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageryOptions {
	pub element1_options: Vec<String>,
	pub element2_options: Vec<String>,
}

/// Turns names into candidate imagery using an injected `Lexicon`.
///
/// # Responsibilities
/// - Walk a name character by character
/// - Route each character's imagery to list 1 (even index) or list 2 (odd index)
/// - Backfill short lists from the lexicon's generic imagery
///
/// The analyzer only reads its lexicon, so a shared reference can be used
/// from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct NameAnalyzer {
	lexicon: Lexicon,
}

impl NameAnalyzer {
	/// Creates an analyzer over `lexicon`.
	pub fn new(lexicon: Lexicon) -> Self {
		Self { lexicon }
	}

	/// The lexicon this analyzer reads.
	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	/// Analyzes a name.
	///
	/// # Behavior
	/// - Characters are Unicode scalar values, taken in literal order.
	/// - Imagery of the character at index `i` goes to list 1 when `i` is
	///   even and to list 2 when `i` is odd; repeated words are skipped.
	/// - A list with fewer than `MIN_OPTIONS` entries receives generic imagery
	///   `[0, 5)` (list 1) or `[5, 10)` (list 2), skipping duplicates.
	///
	/// Total over all strings: unknown characters contribute nothing and
	/// an empty name yields the two generic ranges.
	pub fn analyze(&self, name: &str) -> ImageryOptions {
		let mut options = ImageryOptions::default();

		for (index, c) in name.chars().enumerate() {
			let target = if index % 2 == 0 {
				&mut options.element1_options
			} else {
				&mut options.element2_options
			};
			for imagery in self.lexicon.lookup(c) {
				push_unique(target, imagery);
			}
		}

		self.backfill(&mut options.element1_options, ELEMENT1_FALLBACK);
		self.backfill(&mut options.element2_options, ELEMENT2_FALLBACK);

		options
	}

	/// Appends generic imagery `[start, end)` (clamped) when `list` is short.
	fn backfill(&self, list: &mut Vec<String>, (start, end): (usize, usize)) {
		if list.len() >= MIN_OPTIONS {
			return;
		}
		for imagery in self.lexicon.generic().iter().take(end).skip(start) {
			push_unique(list, imagery);
		}
	}
}

fn push_unique(list: &mut Vec<String>, imagery: &str) {
	if !list.iter().any(|existing| existing == imagery) {
		list.push(imagery.to_owned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(list: &[&str]) -> Vec<String> {
		list.iter().map(|w| (*w).to_owned()).collect()
	}

	fn generic(analyzer: &NameAnalyzer, start: usize, end: usize) -> Vec<String> {
		analyzer.lexicon().generic()[start..end].to_vec()
	}

	#[test]
	fn empty_name_yields_generic_ranges() {
		let analyzer = NameAnalyzer::default();
		let options = analyzer.analyze("");
		assert_eq!(options.element1_options, generic(&analyzer, 0, 5));
		assert_eq!(options.element2_options, generic(&analyzer, 5, 10));
	}

	#[test]
	fn zhang_san_routes_by_position() {
		let analyzer = NameAnalyzer::default();
		let options = analyzer.analyze("张三");

		let mut expected = words(&["帐篷", "长颈鹿"]);
		expected.extend(generic(&analyzer, 0, 5));
		assert_eq!(options.element1_options, expected);
		// '三' has no entry, list 2 comes entirely from the fallback
		assert_eq!(options.element2_options, generic(&analyzer, 5, 10));
	}

	#[test]
	fn long_lists_are_not_backfilled() {
		let analyzer = NameAnalyzer::default();
		// index 0 and 2 feed list 1, index 1 feeds list 2
		let options = analyzer.analyze("王李明");
		assert_eq!(options.element1_options, words(&["王冠", "皇冕", "明亮", "明星"]));

		let mut expected = words(&["梨子", "李子"]);
		expected.extend(generic(&analyzer, 5, 10));
		assert_eq!(options.element2_options, expected);
	}

	#[test]
	fn repeated_imagery_is_kept_once() {
		let analyzer = NameAnalyzer::default();
		// '芳' and '华' both map to 花朵
		let options = analyzer.analyze("芳x华");
		let count = options.element1_options.iter().filter(|w| *w == "花朵").count();
		assert_eq!(count, 1);
	}

	#[test]
	fn fallback_range_is_clamped_to_generic_length() {
		let lexicon = Lexicon::from_entries("tiny", Vec::new(), words(&["龙", "凤凰", "猫", "狗", "老虎", "兔子"]));
		let analyzer = NameAnalyzer::new(lexicon);
		let options = analyzer.analyze("?");
		assert_eq!(options.element1_options, words(&["龙", "凤凰", "猫", "狗", "老虎"]));
		assert_eq!(options.element2_options, words(&["兔子"]));
	}

	#[test]
	fn mixed_case_latin_matches_lowercase() {
		let analyzer = NameAnalyzer::default();
		assert_eq!(analyzer.analyze("Ab"), analyzer.analyze("aB"));
	}
}
