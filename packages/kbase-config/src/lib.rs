mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Display, EncyclopediaProviderConfig, Providers, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Loads `path` when given, otherwise falls back to the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
	match path {
		Some(path) => load(path),
		None => {
			let mut cfg = Config::default();

			normalize(&mut cfg);

			validate(&cfg)?;

			Ok(cfg)
		},
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	for (label, value) in [
		("storage.weights_path", &cfg.storage.weights_path),
		("storage.descriptions_path", &cfg.storage.descriptions_path),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.storage.weights_path == cfg.storage.descriptions_path {
		return Err(Error::Validation {
			message: "storage.weights_path and storage.descriptions_path must differ.".to_string(),
		});
	}
	if cfg.display.missing_description.is_empty() {
		return Err(Error::Validation {
			message: "display.missing_description must be non-empty.".to_string(),
		});
	}
	if cfg.display.return_keyword.is_empty() {
		return Err(Error::Validation {
			message: "display.return_keyword must be non-empty.".to_string(),
		});
	}
	if cfg.display.return_keyword.parse::<i64>().is_ok() {
		return Err(Error::Validation {
			message: "display.return_keyword must not be a number.".to_string(),
		});
	}

	let encyclopedia = &cfg.providers.encyclopedia;

	if encyclopedia.enabled {
		if encyclopedia.timeout_ms == 0 {
			return Err(Error::Validation {
				message: "providers.encyclopedia.timeout_ms must be greater than zero.".to_string(),
			});
		}
		if !encyclopedia.api_base.starts_with("http://")
			&& !encyclopedia.api_base.starts_with("https://")
		{
			return Err(Error::Validation {
				message: "providers.encyclopedia.api_base must be an http or https URL."
					.to_string(),
			});
		}
	}

	for (key, value) in &encyclopedia.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!(
					"providers.encyclopedia.default_headers.{key} must be a string."
				),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.providers
		.encyclopedia
		.user_agent
		.as_deref()
		.map(|agent| agent.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.providers.encyclopedia.user_agent = None;
	}

	let keyword = cfg.display.return_keyword.trim();

	if keyword.len() != cfg.display.return_keyword.len() {
		cfg.display.return_keyword = keyword.to_string();
	}

	let api_base = cfg.providers.encyclopedia.api_base.trim_end_matches('/');

	if api_base.len() != cfg.providers.encyclopedia.api_base.len() {
		cfg.providers.encyclopedia.api_base = api_base.to_string();
	}
}
