use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Marker opening a line of generic imagery in a lexicon file.
pub const GENERIC_MARKER: &str = "*";

/// Name given to the lexicon built into the crate.
pub const BUILTIN_NAME: &str = "builtin";

/// Built-in character table: common surnames, common given-name
/// characters, then Latin letters and digits for romanized names.
const BUILTIN_ENTRIES: &[(char, &[&str])] = &[
	// Surnames
	('张', &["帐篷", "长颈鹿"]),
	('王', &["王冠", "皇冕"]),
	('李', &["梨子", "李子"]),
	('赵', &["赵钱孙李", "超人"]),
	('陈', &["沉船", "陈列品"]),
	('刘', &["流水", "刘海"]),
	('杨', &["杨树", "阳光"]),
	('黄', &["黄色", "蜜蜂"]),
	('周', &["舟船", "粥"]),
	('吴', &["乌鸦", "舞者"]),
	('徐', &["徐徐微风", "须鲸"]),
	('孙', &["孙悟空", "竹笋"]),
	('马', &["马匹", "蚂蚁"]),
	('朱', &["朱砂", "猪"]),
	('胡', &["胡须", "狐狸"]),
	('郭', &["果实", "锅"]),
	('何', &["河流", "禾苗"]),
	('高', &["高山", "羔羊"]),
	('林', &["森林", "木林"]),
	('罗', &["螺旋", "罗盘"]),
	// Given-name characters
	('伟', &["威武", "卫星"]),
	('芳', &["芳香", "花朵"]),
	('娜', &["娜美", "纳米"]),
	('秀', &["秀丽", "绣花"]),
	('英', &["英雄", "樱花"]),
	('华', &["华丽", "花朵"]),
	('明', &["明亮", "明星"]),
	('丽', &["丽人", "梨花"]),
	('涛', &["波涛", "滔滔"]),
	('强', &["强壮", "墙"]),
	('晨', &["晨曦", "尘埃"]),
	('燕', &["燕子", "眼镜"]),
	('红', &["红色", "虹"]),
	('娟', &["娟秀", "卷轴"]),
	('玉', &["玉石", "雨滴"]),
	('洁', &["洁白", "杰出"]),
	('静', &["静谧", "井"]),
	('敏', &["敏捷", "蜜蜂"]),
	('文', &["文字", "温柔"]),
	('博', &["博学", "薄荷"]),
	('欢', &["欢乐", "幻影"]),
	('海', &["海洋", "嗨"]),
	('凯', &["凯旋", "开心"]),
	// Latin letters and digits
	('a', &["苹果", "箭头"]),
	('b', &["蝙蝠", "气球"]),
	('c', &["猫", "月亮"]),
	('d', &["狗", "钻石"]),
	('e', &["大象", "鹰"]),
	('f', &["花", "火焰"]),
	('g', &["鬼", "坚果"]),
	('h', &["帽子", "心脏"]),
	('i', &["冰淇淋", "岛屿"]),
	('j', &["果酱", "竹子"]),
	('k', &["钥匙", "袋鼠"]),
	('l', &["灯笼", "狮子"]),
	('m', &["山", "月亮"]),
	('n', &["鸟巢", "鼻子"]),
	('o', &["橙子", "猫头鹰"]),
	('p', &["钢笔", "企鹅"]),
	('q', &["皇后", "问号"]),
	('r', &["兔子", "彩虹"]),
	('s', &["蛇", "星星"]),
	('t', &["茶", "老虎"]),
	('u', &["独角兽", "伞"]),
	('v', &["小提琴", "火山"]),
	('w', &["鲸鱼", "魔杖"]),
	('x', &["木琴", "狐狸"]),
	('y', &["瑜伽", "黄色"]),
	('z', &["斑马", "闪电"]),
	('0', &["蛋", "圆圈"]),
	('1', &["火箭", "铅笔"]),
	('2', &["天鹅", "双胞胎"]),
	('3', &["三叉戟", "三明治"]),
	('4', &["帆船", "四叶草"]),
	('5', &["钩子", "手掌"]),
	('6', &["蜗牛", "樱桃"]),
	('7', &["魔杖", "七彩虹"]),
	('8', &["眼镜", "沙漏"]),
	('9', &["气球", "九条尾巴"]),
];

/// Built-in generic imagery used to backfill short candidate lists.
const GENERIC_IMAGERY: &[&str] = &[
	"龙", "凤凰", "猫", "狗", "老虎", "兔子", "熊猫", "大象",
	"花朵", "树木", "云彩", "星星", "月亮", "太阳", "彩虹",
	"水晶", "钻石", "宝石", "皇冠", "城堡", "船", "火箭",
	"音符", "书本", "魔法棒", "剑", "盾牌", "风", "火", "水", "土",
	"蜂蜜", "糖果", "冰淇淋", "蛋糕", "面包", "果汁", "茶",
	"机器人", "宇航员", "超人", "仙女", "精灵", "巫师",
];

/// Case-folds a character for lexicon keys.
///
/// Latin letters fold to lowercase. Characters whose lowercase form spans
/// several scalar values (ex. `'İ'`) and characters without case (CJK,
/// digits) are kept as-is.
fn fold(c: char) -> char {
	let mut lower = c.to_lowercase();
	match (lower.next(), lower.next()) {
		(Some(l), None) => l,
		_ => c,
	}
}

/// Immutable mapping from single characters to candidate imagery words.
///
/// A `Lexicon` is built once (from the built-in table, explicit entries, or
/// a lexicon file) and then only read. It is handed to the analyzer by value,
/// so there is no process-wide table.
///
/// ## Invariants
/// - Keys are case-folded (see `fold`)
/// - Entries and the generic list never change after construction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Lexicon {
	/// Identifier of the lexicon (file stem, or `"builtin"`).
	name: String,
	/// Candidate imagery per folded character, in authoring order.
	entries: HashMap<char, Vec<String>>,
	/// Fallback imagery, in authoring order.
	generic: Vec<String>,
}

impl Default for Lexicon {
	/// The built-in lexicon.
	fn default() -> Self {
		Self::from_entries(
			BUILTIN_NAME,
			BUILTIN_ENTRIES
				.iter()
				.map(|(c, words)| (*c, words.iter().map(|w| (*w).to_owned()).collect::<Vec<_>>())),
			GENERIC_IMAGERY.iter().map(|w| (*w).to_owned()).collect(),
		)
	}
}

impl Lexicon {
	/// Builds a lexicon from explicit entries and a generic list.
	///
	/// Keys are case-folded. When two entries fold to the same key,
	/// the later one wins.
	pub fn from_entries<I>(name: &str, entries: I, generic: Vec<String>) -> Self
	where
		I: IntoIterator<Item = (char, Vec<String>)>,
	{
		let entries = entries
			.into_iter()
			.map(|(c, words)| (fold(c), words))
			.collect();
		Self { name: name.to_owned(), entries, generic }
	}

	/// Loads a lexicon file, preferring its compiled sibling when up to date.
	///
	/// - `filepath` is the text lexicon (`.dat`); its stem names the lexicon.
	/// - A `.bin` next to it (postcard encoding) is used when it is at least
	///   as recent as the text file and decodes cleanly.
	/// - Otherwise the text file is parsed and the `.bin` is rewritten.
	///   An undecodable cache or a failed cache write is logged, not returned.
	///
	/// # Errors
	/// Returns an error if the path has no file name, the text file cannot be
	/// read, or a line is malformed.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let source = filepath.as_ref();
		let name = source
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.ok_or_else(|| format!("Lexicon path has no file name: {}", source.display()))?;
		let compiled = source.with_extension("bin");

		let mut lexicon = match Self::read_compiled(&compiled, source) {
			Some(lexicon) => lexicon,
			None => {
				let text = fs::read_to_string(source)?;
				let lines: Vec<&str> = text.lines().collect();
				let lexicon = Self::parse(&name, &lines)?;
				Self::write_compiled(&lexicon, &compiled);
				lexicon
			}
		};
		lexicon.name = name;

		info!(
			"Lexicon '{}' ready: {} characters, {} generic words",
			lexicon.name,
			lexicon.len(),
			lexicon.generic.len()
		);
		Ok(lexicon)
	}

	/// Decodes `compiled` if it is fresh with respect to `source`.
	///
	/// Returns `None` (text must be parsed) when it is stale, missing or corrupt.
	fn read_compiled(compiled: &Path, source: &Path) -> Option<Self> {
		if !Self::is_fresh(compiled, source) {
			return None;
		}
		let decoded = fs::read(compiled)
			.map_err(|e| e.to_string())
			.and_then(|bytes| postcard::from_bytes::<Lexicon>(&bytes).map_err(|e| e.to_string()));
		match decoded {
			Ok(lexicon) => {
				debug!("Loaded compiled lexicon {}", compiled.display());
				Some(lexicon)
			}
			Err(e) => {
				warn!("Ignoring unreadable {}: {e}", compiled.display());
				None
			}
		}
	}

	fn write_compiled(lexicon: &Lexicon, compiled: &Path) {
		match postcard::to_stdvec(lexicon) {
			Ok(bytes) => {
				if let Err(e) = fs::write(compiled, bytes) {
					warn!("Could not write {}: {e}", compiled.display());
				}
			}
			Err(e) => warn!("Could not encode lexicon {}: {e}", lexicon.name),
		}
	}

	/// `true` when `binary` exists and is not older than `source`.
	fn is_fresh<B: AsRef<Path>, S: AsRef<Path>>(binary: B, source: S) -> bool {
		let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
		match (modified(binary.as_ref()), modified(source.as_ref())) {
			(Some(bin), Some(src)) => bin >= src,
			(Some(_), None) => true,
			_ => false,
		}
	}

	/// Parses the text lexicon format.
	///
	/// ```text
	/// # comment
	/// 张 帐篷 长颈鹿
	/// * 龙 凤凰 猫
	/// ```
	///
	/// - `<char> <word>...` adds an entry
	/// - `* <word>...` appends generic imagery (may repeat)
	/// - Blank lines and `#` lines are ignored
	///
	/// # Errors
	/// Returns an error naming the 1-based line when a key is not exactly one
	/// character or an entry has no words.
	pub fn parse<S: AsRef<str>>(name: &str, lines: &[S]) -> Result<Self, String> {
		let mut entries: Vec<(char, Vec<String>)> = Vec::new();
		let mut generic: Vec<String> = Vec::new();

		for (index, line) in lines.iter().enumerate() {
			let line = line.as_ref().trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}

			let mut tokens = line.split_whitespace();
			let key = match tokens.next() {
				Some(key) => key,
				None => continue,
			};
			let words: Vec<String> = tokens.map(str::to_owned).collect();

			if key == GENERIC_MARKER {
				generic.extend(words);
				continue;
			}

			let mut chars = key.chars();
			let c = match (chars.next(), chars.next()) {
				(Some(c), None) => c,
				_ => {
					return Err(format!(
						"line {}: key '{}' must be a single character",
						index + 1,
						key
					));
				}
			};
			if words.is_empty() {
				return Err(format!("line {}: no imagery for '{}'", index + 1, c));
			}
			entries.push((c, words));
		}

		Ok(Self::from_entries(name, entries, generic))
	}

	/// Returns the candidate imagery for `c`, or an empty slice.
	///
	/// Case-insensitive for cased scripts, exact otherwise.
	pub fn lookup(&self, c: char) -> &[String] {
		self.entries.get(&fold(c)).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Fallback imagery, in authoring order.
	pub fn generic(&self) -> &[String] {
		&self.generic
	}

	/// Lexicon name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of characters with an entry.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(list: &[&str]) -> Vec<String> {
		list.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn builtin_lookup_is_exact_for_cjk() {
		let lexicon = Lexicon::default();
		assert_eq!(lexicon.lookup('张'), words(&["帐篷", "长颈鹿"]).as_slice());
		assert!(lexicon.lookup('三').is_empty());
		assert_eq!(lexicon.generic().len(), 44);
	}

	#[test]
	fn latin_lookup_ignores_case() {
		let lexicon = Lexicon::default();
		assert_eq!(lexicon.lookup('A'), lexicon.lookup('a'));
		assert_eq!(lexicon.lookup('Z'), words(&["斑马", "闪电"]).as_slice());
	}

	#[test]
	fn uppercase_keys_are_folded_on_insert() {
		let lexicon = Lexicon::from_entries("custom", vec![('Q', words(&["问号"]))], Vec::new());
		assert_eq!(lexicon.lookup('q'), words(&["问号"]).as_slice());
		assert_eq!(lexicon.len(), 1);
	}

	#[test]
	fn parse_reads_entries_generic_and_comments() {
		let lines = ["# sample", "", "星 星星 流星", "* 龙 凤凰", "* 猫"];
		let lexicon = Lexicon::parse("sample", &lines).unwrap();
		assert_eq!(lexicon.lookup('星'), words(&["星星", "流星"]).as_slice());
		assert_eq!(lexicon.generic(), words(&["龙", "凤凰", "猫"]).as_slice());
		assert_eq!(lexicon.name(), "sample");
	}

	#[test]
	fn parse_rejects_multi_character_keys() {
		let err = Lexicon::parse("bad", &["ok 好"]).unwrap_err();
		assert!(err.starts_with("line 1:"), "{err}");
	}

	#[test]
	fn parse_rejects_entries_without_words() {
		let err = Lexicon::parse("bad", &["# header", "星"]).unwrap_err();
		assert!(err.starts_with("line 2:"), "{err}");
	}
}
