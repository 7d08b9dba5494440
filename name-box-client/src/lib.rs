//! Blocking client for the external image generation API.
//!
//! The API turns names into symbol pairs and symbol pairs into images.
//! Each call is a single request with a timeout; failures are returned
//! to the caller as `reqwest::Error`.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::Result;
use serde::{Deserialize, Serialize};

/// API root used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Where and how patiently to reach the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_API_URL.to_owned(),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
		}
	}
}

/// One symbol pair proposed by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymbolOption {
	pub id: u32,
	pub symbol1: String,
	pub symbol2: String,
}

/// Body of `/generate-symbols/` responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateSymbolsResponse {
	pub input: String,
	pub symbol_dict: Vec<SymbolOption>,
}

/// Body of `/generate-image/` responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateImageResponse {
	pub status: String,
	pub image_url: String,
}

/// Two symbols sent for image generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymbolPair {
	pub symbol1: String,
	pub symbol2: String,
}

impl SymbolPair {
	pub fn new(symbol1: &str, symbol2: &str) -> Self {
		Self { symbol1: symbol1.to_owned(), symbol2: symbol2.to_owned() }
	}
}

#[derive(Serialize)]
struct GenerateSymbolsRequest<'a> {
	input: &'a str,
}

/// REST context holding a reusable blocking HTTP client.
pub struct ApiClient {
	client: Client,
	base_url: String,
}

impl ApiClient {
	/// Creates a client with the configured timeout.
	pub fn new(config: &ClientConfig) -> Result<Self> {
		let client = Client::builder()
			.timeout(config.timeout)
			.build()?;
		Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_owned() })
	}

	/// Full URL of an API path.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	/// Sends a POST request to `/generate-symbols/` for `name`.
	pub fn generate_symbols(&self, name: &str) -> Result<GenerateSymbolsResponse> {
		debug!("Requesting symbols for '{name}'");
		self.client
			.post(self.endpoint("generate-symbols/"))
			.json(&GenerateSymbolsRequest { input: name })
			.send()?
			.error_for_status()?
			.json()
	}

	/// Sends a POST request to `/generate-image/` for a symbol pair.
	pub fn generate_image(&self, pair: &SymbolPair) -> Result<GenerateImageResponse> {
		debug!("Requesting image for {} × {}", pair.symbol1, pair.symbol2);
		self.client
			.post(self.endpoint("generate-image/"))
			.json(pair)
			.send()?
			.error_for_status()?
			.json()
	}

	/// `true` when the API root answers with a success status.
	pub fn check_connection(&self) -> bool {
		match self.client.get(self.endpoint("")).send() {
			Ok(response) => response.status().is_success(),
			Err(e) => {
				debug!("API unreachable: {e}");
				false
			}
		}
	}
}
