use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rendering style requested from the image generation API.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
	Realistic,
	Cartoon,
	Watercolor,
	Ink,
	#[serde(rename = "3d")]
	ThreeD,
	Anime,
	Pixar,
}

impl ImageStyle {
	/// Every style, in menu order.
	pub const ALL: [ImageStyle; 7] = [
		ImageStyle::Realistic,
		ImageStyle::Cartoon,
		ImageStyle::Watercolor,
		ImageStyle::Ink,
		ImageStyle::ThreeD,
		ImageStyle::Anime,
		ImageStyle::Pixar,
	];

	/// Wire value.
	pub fn value(self) -> &'static str {
		match self {
			ImageStyle::Realistic => "realistic",
			ImageStyle::Cartoon => "cartoon",
			ImageStyle::Watercolor => "watercolor",
			ImageStyle::Ink => "ink",
			ImageStyle::ThreeD => "3d",
			ImageStyle::Anime => "anime",
			ImageStyle::Pixar => "pixar",
		}
	}

	/// Display label.
	pub fn label(self) -> &'static str {
		match self {
			ImageStyle::Realistic => "写实风格",
			ImageStyle::Cartoon => "卡通风格",
			ImageStyle::Watercolor => "水彩风格",
			ImageStyle::Ink => "水墨风格",
			ImageStyle::ThreeD => "3D立体风格",
			ImageStyle::Anime => "动漫风格",
			ImageStyle::Pixar => "皮克斯风格",
		}
	}

	fn keywords(self) -> &'static str {
		match self {
			ImageStyle::Realistic => "photorealistic, detailed texture, studio lighting, 8k",
			ImageStyle::Cartoon => "cartoon style, vibrant colors, simple shapes, cute character design",
			ImageStyle::Watercolor => {
				"watercolor painting, soft edges, flowing pigments, artistic, traditional media"
			}
			ImageStyle::Ink => {
				"Chinese ink painting, elegant brush strokes, minimalist, black and white with subtle color accents"
			}
			ImageStyle::ThreeD => {
				"3D render, volumetric lighting, smooth surfaces, Pixar style, computer generated"
			}
			ImageStyle::Anime => "anime style, vibrant colors, big expressive eyes, stylized features",
			ImageStyle::Pixar => "Pixar style, 3D animation, expressive character, polished, family-friendly",
		}
	}
}

impl fmt::Display for ImageStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.value())
	}
}

impl FromStr for ImageStyle {
	type Err = String;

	/// Parses a wire value, case-insensitively.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_ascii_lowercase();
		ImageStyle::ALL
			.into_iter()
			.find(|style| style.value() == wanted)
			.ok_or_else(|| format!("Unknown image style '{}'", s))
	}
}

/// Builds the image generation prompt for a pair of imagery words.
///
/// Without a style, only the base sentence is returned.
pub fn image_prompt(element1: &str, element2: &str, style: Option<ImageStyle>) -> String {
	let base = format!("A creative, whimsical fusion of {element1} and {element2}");
	match style {
		Some(style) => format!("{base}, {}", style.keywords()),
		None => base,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prompt_appends_style_keywords() {
		let prompt = image_prompt("龙", "猫", Some(ImageStyle::Ink));
		assert!(prompt.starts_with("A creative, whimsical fusion of 龙 and 猫, Chinese ink painting"));
		assert_eq!(image_prompt("龙", "猫", None), "A creative, whimsical fusion of 龙 and 猫");
	}

	#[test]
	fn styles_parse_from_wire_values() {
		for style in ImageStyle::ALL {
			assert_eq!(style.value().parse::<ImageStyle>(), Ok(style));
		}
		assert_eq!("3D".parse::<ImageStyle>(), Ok(ImageStyle::ThreeD));
		assert!("oil".parse::<ImageStyle>().is_err());
	}
}
