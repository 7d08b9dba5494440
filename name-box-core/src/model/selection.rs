use serde::Serialize;

/// Number of symbols a selection holds once complete.
pub const PAIR_SIZE: usize = 2;

/// Fixed symbol library offered next to the name-derived symbols,
/// grouped by category.
const SYMBOL_LIBRARY: &[(&str, [&str; 8])] = &[
	("山海经神兽", ["青龙", "白虎", "朱雀", "玄武", "凤凰", "麒麟", "貔貅", "九尾狐"]),
	("现代动漫", ["机甲", "魔法少女", "时空穿越", "异世界", "超能力", "校园", "治愈系", "热血"]),
	("自然元素", ["火焰", "冰雪", "雷电", "森林", "海洋", "山峰", "星空", "彩虹"]),
	("情感色彩", ["温暖", "梦幻", "神秘", "活力", "宁静", "浪漫", "勇敢", "智慧"]),
];

/// A category of the symbol library.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SymbolCategory {
	pub name: &'static str,
	pub symbols: Vec<&'static str>,
}

/// Returns the categorized symbol library.
pub fn symbol_library() -> Vec<SymbolCategory> {
	SYMBOL_LIBRARY
		.iter()
		.map(|(name, symbols)| SymbolCategory { name: *name, symbols: symbols.to_vec() })
		.collect()
}

/// Up to two symbols chosen for a new box, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolSelection {
	selected: Vec<String>,
}

impl SymbolSelection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Toggles `symbol`.
	///
	/// - Selected: it is removed.
	/// - Not selected and room left: it is appended.
	/// - Not selected and full: the oldest symbol is dropped first.
	pub fn toggle(&mut self, symbol: &str) {
		if let Some(position) = self.selected.iter().position(|s| s == symbol) {
			self.selected.remove(position);
			return;
		}
		if self.selected.len() >= PAIR_SIZE {
			self.selected.remove(0);
		}
		self.selected.push(symbol.to_owned());
	}

	pub fn selected(&self) -> &[String] {
		&self.selected
	}

	pub fn contains(&self, symbol: &str) -> bool {
		self.selected.iter().any(|s| s == symbol)
	}

	/// The selected pair, once two symbols are chosen.
	pub fn pair(&self) -> Option<(&str, &str)> {
		match self.selected.as_slice() {
			[first, second] => Some((first.as_str(), second.as_str())),
			_ => None,
		}
	}

	pub fn clear(&mut self) {
		self.selected.clear();
	}
}
