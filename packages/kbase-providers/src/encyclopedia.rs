use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Result, request_headers};

/// Returned by [`lookup`] when the page exists but carries no intro text.
pub const NOT_FOUND: &str = "No information was found.";
/// Returned by [`lookup`] when the service could not be reached or answered with an error.
pub const REQUEST_FAILED: &str = "The request to the encyclopedia service failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
	Found(String),
	Missing,
}

/// Fetches the plain-text intro of the page titled `query` from a MediaWiki API.
pub async fn fetch(
	cfg: &kbase_config::EncyclopediaProviderConfig,
	query: &str,
) -> Result<Lookup> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(url)
		.headers(request_headers(cfg)?)
		.query(&[
			("action", "query"),
			("format", "json"),
			("titles", query),
			("prop", "extracts"),
			("exintro", "1"),
			("explaintext", "1"),
		])
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(parse_extract_response(&json))
}

/// Like [`fetch`], but folds every outcome into display text.
pub async fn lookup(cfg: &kbase_config::EncyclopediaProviderConfig, query: &str) -> String {
	match fetch(cfg, query).await {
		Ok(Lookup::Found(text)) => text,
		Ok(Lookup::Missing) => NOT_FOUND.to_string(),
		Err(err) => {
			tracing::warn!(error = %err, query, "Encyclopedia lookup failed.");

			REQUEST_FAILED.to_string()
		},
	}
}

pub fn parse_extract_response(json: &Value) -> Lookup {
	let Some(page) = json
		.get("query")
		.and_then(|v| v.get("pages"))
		.and_then(|v| v.as_object())
		.and_then(|pages| pages.values().next())
	else {
		return Lookup::Missing;
	};

	match page.get("extract").and_then(|v| v.as_str()) {
		Some(text) if !text.trim().is_empty() => Lookup::Found(text.to_string()),
		_ => Lookup::Missing,
	}
}
