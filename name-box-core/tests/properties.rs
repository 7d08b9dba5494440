use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use name_box_core::model::analyzer::MIN_OPTIONS;
use name_box_core::{CombinationGenerator, Lexicon, NameAnalyzer};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

static ANALYZER: LazyLock<NameAnalyzer> = LazyLock::new(NameAnalyzer::default);

/// Characters mixing lexicon hits, misses, upper case and astral symbols.
const ALPHABET: &[char] = &[
	'张', '王', '李', '明', '华', '芳', '三', '四', '小', 'A', 'b', 'C', 'x', '7', '0', ' ', '-', '😀', 'é',
];

/// Names drawn mostly from characters the built-in lexicon knows.
fn lexicon_names(max_len: usize) -> impl Strategy<Value = String> {
	prop::collection::vec(prop::sample::select(ALPHABET), 1..max_len)
		.prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Arbitrary printable names or lexicon-heavy ones.
fn names() -> impl Strategy<Value = String> {
	prop_oneof!["\\PC{1,16}", lexicon_names(12)]
}

fn contributed(lexicon: &Lexicon, name: &str, parity: usize) -> HashSet<String> {
	name.chars()
		.enumerate()
		.filter(|(index, _)| index % 2 == parity)
		.flat_map(|(_, c)| lexicon.lookup(c).to_vec())
		.collect()
}

proptest! {
	#[test]
	fn non_empty_names_get_at_least_three_options(name in names()) {
		let options = ANALYZER.analyze(&name);
		prop_assert!(options.element1_options.len() >= MIN_OPTIONS);
		prop_assert!(options.element2_options.len() >= MIN_OPTIONS);
	}

	#[test]
	fn options_are_duplicate_free(name in prop_oneof!["\\PC*", lexicon_names(12)]) {
		let options = ANALYZER.analyze(&name);
		for list in [&options.element1_options, &options.element2_options] {
			let unique: HashSet<&String> = list.iter().collect();
			prop_assert_eq!(unique.len(), list.len());
		}
	}

	#[test]
	fn lists_only_hold_own_parity_or_fallback_words(name in names()) {
		let lexicon = ANALYZER.lexicon();
		let fallback1: HashSet<&String> = lexicon.generic()[0..5].iter().collect();
		let fallback2: HashSet<&String> = lexicon.generic()[5..10].iter().collect();
		let even = contributed(lexicon, &name, 0);
		let odd = contributed(lexicon, &name, 1);

		let options = ANALYZER.analyze(&name);
		for word in &options.element1_options {
			prop_assert!(even.contains(word) || fallback1.contains(word), "{}", word);
		}
		for word in &options.element2_options {
			prop_assert!(odd.contains(word) || fallback2.contains(word), "{}", word);
		}
	}
}

#[test]
fn curated_and_random_frequencies() {
	const TRIALS: usize = 20_000;
	let generator = CombinationGenerator::default();
	let mut rng = StdRng::seed_from_u64(2024);

	let mut curated: HashMap<String, usize> = HashMap::new();
	let mut random: HashMap<(String, String), usize> = HashMap::new();
	for _ in 0..TRIALS {
		let combination = generator.generate(&mut rng);
		if combination.is_random() {
			assert_ne!(combination.element1.id, combination.element2.id);
			*random.entry((combination.element1.id, combination.element2.id)).or_insert(0) += 1;
		} else {
			*curated.entry(combination.id).or_insert(0) += 1;
		}
	}

	let curated_total: usize = curated.values().sum();
	let curated_share = curated_total as f64 / TRIALS as f64;
	assert!((curated_share - 0.4).abs() < 0.02, "curated share {curated_share}");

	let curated_len = generator.catalog().curated().len();
	assert_eq!(curated.len(), curated_len);
	for (id, count) in &curated {
		let share = *count as f64 / TRIALS as f64;
		assert!((share - 0.4 / curated_len as f64).abs() < 0.015, "{id}: {share}");
	}

	// 10 elements give 90 ordered pairs, each expected 0.6 / 90 of the time
	let elements = generator.catalog().elements().len();
	assert_eq!(random.len(), elements * (elements - 1));
	let expected = 0.6 * TRIALS as f64 / random.len() as f64;
	for (pair, count) in &random {
		let count = *count as f64;
		assert!(count > expected * 0.5 && count < expected * 1.5, "{pair:?}: {count}");
	}
}
