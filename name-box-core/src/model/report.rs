use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rarity tier shown on a generated box.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
	Rare,
	Precious,
	Legendary,
	Epic,
}

impl Rarity {
	pub const ALL: [Rarity; 4] = [Rarity::Rare, Rarity::Precious, Rarity::Legendary, Rarity::Epic];

	pub fn label(self) -> &'static str {
		match self {
			Rarity::Rare => "稀有",
			Rarity::Precious => "珍贵",
			Rarity::Legendary => "传说",
			Rarity::Epic => "史诗",
		}
	}

	/// Uniform draw over all tiers.
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Rarity::ALL[rng.random_range(0..Rarity::ALL.len())]
	}

	/// Tier of the `rank`-th box of a report (1-based).
	///
	/// Ranks 1 to 3 map to Rare, Precious, Legendary; anything else is Rare.
	pub fn for_rank(rank: usize) -> Self {
		match rank {
			2 => Rarity::Precious,
			3 => Rarity::Legendary,
			_ => Rarity::Rare,
		}
	}
}

impl fmt::Display for Rarity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}级", self.label())
	}
}

/// Picks one of the analysis sentences for a pair of symbols.
pub fn analysis_text<R: Rng + ?Sized>(symbol1: &str, symbol2: &str, rng: &mut R) -> String {
	match rng.random_range(0..4) {
		0 => format!("{symbol1}的力量与{symbol2}的美学完美融合，创造出独特的视觉盛宴"),
		1 => format!("这是{symbol1}与{symbol2}跨越时空的相遇，充满了无限的想象空间"),
		2 => format!("{symbol1}的精神内核与{symbol2}的外在表现形成了和谐统一"),
		_ => format!("从{symbol1}到{symbol2}，这是一场关于美与力量的对话"),
	}
}

/// One box produced from a pair of selected symbols.
///
/// A box starts closed; the image URL is attached once the generation
/// API answers, and opening is one-way.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratedBox {
	pub id: String,
	pub symbol1: String,
	pub symbol2: String,
	pub image_url: Option<String>,
	pub rarity: Rarity,
	pub analysis: String,
	opened: bool,
}

impl GeneratedBox {
	/// Creates a closed box with a random rarity and analysis.
	pub fn new<R: Rng + ?Sized>(id: &str, symbol1: &str, symbol2: &str, rng: &mut R) -> Self {
		Self {
			id: id.to_owned(),
			symbol1: symbol1.to_owned(),
			symbol2: symbol2.to_owned(),
			image_url: None,
			rarity: Rarity::random(rng),
			analysis: analysis_text(symbol1, symbol2, rng),
			opened: false,
		}
	}

	pub fn attach_image(&mut self, url: &str) {
		self.image_url = Some(url.to_owned());
	}

	pub fn is_opened(&self) -> bool {
		self.opened
	}

	/// Opens the box.
	///
	/// # Errors
	/// Returns an error if the box is already open.
	pub fn open(&mut self) -> Result<(), String> {
		if self.opened {
			return Err(format!("Box {} is already opened", self.id));
		}
		self.opened = true;
		Ok(())
	}

	/// Short title, ex. `"龙 × 猫"`.
	pub fn title(&self) -> String {
		format!("{} × {}", self.symbol1, self.symbol2)
	}
}
