use rand::Rng;

use super::element::{Catalog, Combination, Element, RANDOM_ID_PREFIX};

/// Default probability of returning a curated combination.
pub const CURATED_PROBABILITY: f64 = 0.4;

/// Draws blind-box combinations from a `Catalog`.
///
/// # Responsibilities
/// - With probability `curated_probability`, return a curated combination
/// - Otherwise pair two distinct random elements and synthesize display text
///
/// The random source is passed to every call, so tests can drive the
/// generator with a seeded `StdRng` and binaries with `rand::rng()`.
#[derive(Clone, Debug)]
pub struct CombinationGenerator {
	catalog: Catalog,
	curated_probability: f64,
}

impl Default for CombinationGenerator {
	fn default() -> Self {
		Self::new(Catalog::default())
	}
}

impl CombinationGenerator {
	pub fn new(catalog: Catalog) -> Self {
		Self { catalog, curated_probability: CURATED_PROBABILITY }
	}

	/// Overrides the curated probability, clamped to `[0.0, 1.0]`.
	pub fn with_curated_probability(mut self, probability: f64) -> Self {
		self.curated_probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
		self
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn curated_probability(&self) -> f64 {
		self.curated_probability
	}

	/// Returns one combination.
	///
	/// # Behavior
	/// - Draws `u` in `[0, 1)`; a curated combination is picked uniformly when
	///   `u < curated_probability` and the curated list is non-empty.
	/// - Otherwise element A is drawn uniformly, removed from a working copy,
	///   and element B is drawn uniformly from the rest, so A and B differ.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Combination {
		let curated = self.catalog.curated();
		let u: f64 = rng.random();
		if u < self.curated_probability && !curated.is_empty() {
			return curated[rng.random_range(0..curated.len())].clone();
		}

		// Catalog guarantees at least two elements
		let mut available: Vec<&Element> = self.catalog.elements().iter().collect();
		let element1 = available.remove(rng.random_range(0..available.len()));
		let element2 = available[rng.random_range(0..available.len())];

		Self::synthesize(element1, element2)
	}

	/// Builds the display record of a random pair.
	///
	/// - name: first character of A's name followed by B's name
	/// - description: "A和B的奇妙组合"
	/// - emoji: A's emoji followed by B's
	/// - id: `random-<A.id>-<B.id>`
	pub fn synthesize(element1: &Element, element2: &Element) -> Combination {
		let mut name: String = element1.name.chars().take(1).collect();
		name.push_str(&element2.name);

		Combination {
			id: format!("{RANDOM_ID_PREFIX}{}-{}", element1.id, element2.id),
			name,
			description: format!("{}和{}的奇妙组合", element1.name, element2.name),
			element1: element1.clone(),
			element2: element2.clone(),
			emoji: format!("{}{}", element1.emoji, element2.emoji),
		}
	}
}
