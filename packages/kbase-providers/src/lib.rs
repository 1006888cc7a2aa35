pub mod encyclopedia;

mod error;

pub use error::{Error, Result};

use reqwest::header::{HeaderMap, HeaderName, USER_AGENT};

pub fn request_headers(cfg: &kbase_config::EncyclopediaProviderConfig) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	if let Some(agent) = cfg.user_agent.as_deref() {
		headers.insert(USER_AGENT, agent.parse()?);
	}

	for (key, value) in &cfg.default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: "Default header values must be strings.".to_string(),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}
