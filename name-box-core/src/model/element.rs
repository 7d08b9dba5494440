use serde::{Deserialize, Serialize};

/// Atomic display unit of the blind box.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Element {
	pub id: String,
	pub name: String,
	pub description: String,
	pub emoji: String,
}

impl Element {
	pub fn new(id: &str, name: &str, description: &str, emoji: &str) -> Self {
		Self {
			id: id.to_owned(),
			name: name.to_owned(),
			description: description.to_owned(),
			emoji: emoji.to_owned(),
		}
	}
}

/// Two elements paired with display text.
///
/// Curated combinations carry hand-written ids; synthesized ones use
/// the `random-` prefix (see `RANDOM_ID_PREFIX`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Combination {
	pub id: String,
	pub name: String,
	pub description: String,
	pub element1: Element,
	pub element2: Element,
	pub emoji: String,
}

/// Id prefix of combinations synthesized at random.
pub const RANDOM_ID_PREFIX: &str = "random-";

impl Combination {
	/// `true` when this combination was not taken from a curated catalog.
	pub fn is_random(&self) -> bool {
		self.id.starts_with(RANDOM_ID_PREFIX)
	}
}

/// Elements and curated combinations the generator draws from.
///
/// # Invariants
/// - At least two elements, so two distinct elements can always be drawn
/// - Curated combinations only reference elements of the catalog
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Catalog {
	elements: Vec<Element>,
	curated: Vec<Combination>,
}

impl Catalog {
	/// Creates a catalog.
	///
	/// # Errors
	/// Returns an error if fewer than two elements are given, or if a
	/// curated combination uses an element missing from `elements`.
	pub fn new(elements: Vec<Element>, curated: Vec<Combination>) -> Result<Self, String> {
		if elements.len() < 2 {
			return Err(format!("A catalog needs at least 2 elements, got {}", elements.len()));
		}
		for combination in &curated {
			for element in [&combination.element1, &combination.element2] {
				if !elements.contains(element) {
					return Err(format!(
						"Curated combination {} uses unknown element {}",
						combination.id, element.id
					));
				}
			}
		}
		Ok(Self { elements, curated })
	}

	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	pub fn curated(&self) -> &[Combination] {
		&self.curated
	}

	/// Finds an element by id.
	pub fn element(&self, id: &str) -> Option<&Element> {
		self.elements.iter().find(|e| e.id == id)
	}
}

impl Default for Catalog {
	/// The built-in catalog: ten elements and five curated pairs.
	fn default() -> Self {
		let elements = vec![
			Element::new("bamboo", "竹子", "修长挺直的竹子", "🎋"),
			Element::new("doraemon", "哆啦A梦", "来自未来的机器猫", "🐱"),
			Element::new("fish", "小鱼", "活泼可爱的小鱼", "🐟"),
			Element::new("bamboo_shoot", "笋", "鲜嫩可口的竹笋", "🌱"),
			Element::new("crab", "蟹", "横行霸道的螃蟹", "🦀"),
			Element::new("apple", "苹果", "红润多汁的苹果", "🍎"),
			Element::new("star", "星星", "闪烁的星星", "⭐"),
			Element::new("cloud", "云朵", "飘浮的云", "☁️"),
			Element::new("cat", "猫咪", "慵懒的猫", "😺"),
			Element::new("robot", "机器人", "智能机器人", "🤖"),
		];

		let pair = |id: &str, name: &str, description: &str, first: usize, second: usize| {
			let element1 = elements[first].clone();
			let element2 = elements[second].clone();
			Combination {
				id: id.to_owned(),
				name: name.to_owned(),
				description: description.to_owned(),
				emoji: format!("{}{}", element1.emoji, element2.emoji),
				element1,
				element2,
			}
		};

		let curated = vec![
			pair("sunxiaoyu", "孙小鱼", "笋和小鱼的有趣组合", 3, 2),
			pair("mudabao", "木大宝", "竹子和哆啦A梦的奇特组合", 0, 1),
			pair("xiepingguo", "谢苹果", "蟹和苹果的美味组合", 4, 5),
			pair("starcat", "星星猫", "星星和猫咪的梦幻组合", 6, 8),
			pair("cloudrobot", "云朵机器人", "云朵和机器人的科技组合", 7, 9),
		];

		Self { elements, curated }
	}
}
