use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub display: Display,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { http_bind: "127.0.0.1:5001".to_string(), log_level: "info".to_string() }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Storage {
	/// JSON object mapping each key to its integer weight.
	pub weights_path: String,
	/// JSON object mapping each key to its description text.
	pub descriptions_path: String,
}
impl Default for Storage {
	fn default() -> Self {
		Self {
			weights_path: "elements.json".to_string(),
			descriptions_path: "descriptions.json".to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Providers {
	pub encyclopedia: EncyclopediaProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncyclopediaProviderConfig {
	pub enabled: bool,
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
	/// Optional. MediaWiki asks clients to identify themselves; blank values are dropped.
	pub user_agent: Option<String>,
	pub default_headers: Map<String, Value>,
}
impl Default for EncyclopediaProviderConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			api_base: "https://ja.wikipedia.org".to_string(),
			path: "/w/api.php".to_string(),
			timeout_ms: 10_000,
			user_agent: Some(concat!("kbase/", env!("CARGO_PKG_VERSION")).to_string()),
			default_headers: Map::new(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Display {
	/// Shown in place of a description that was never written.
	pub missing_description: String,
	/// Selection input that leaves the results screen without editing.
	pub return_keyword: String,
	/// Upper bound on displayed hits. Zero disables the limit.
	pub max_results: usize,
}
impl Default for Display {
	fn default() -> Self {
		Self {
			missing_description: "No description available.".to_string(),
			return_keyword: "q".to_string(),
			max_results: 0,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Security {
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true }
	}
}
