use std::env;
use std::path::PathBuf;

/// Bind address used when `NAME_BOX_BIND` is not set.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Server settings, read once at startup from the environment.
///
/// - `NAME_BOX_BIND`: listen address (`host:port`)
/// - `NAME_BOX_LEXICON`: lexicon file; the built-in table is used when unset
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub bind: String,
	pub lexicon: Option<PathBuf>,
}

impl ServerConfig {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds the configuration from any variable lookup.
	///
	/// Empty values count as unset.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
		Self {
			bind: value("NAME_BOX_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned()),
			lexicon: value("NAME_BOX_LEXICON").map(PathBuf::from),
		}
	}
}
