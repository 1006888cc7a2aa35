use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use kbase_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let mut table = root.as_table_mut().expect("Sample config must be a table.");

	for part in section.split('.') {
		table = table
			.get_mut(part)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Sample config must include [{section}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("kbase_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> kbase_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = kbase_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(message.contains(expected), "Unexpected error message: {message}");
}

#[test]
fn sample_config_loads_and_normalizes() {
	let cfg = load_payload(SAMPLE_CONFIG_TOML.to_string()).expect("Sample config must load.");

	assert_eq!(cfg.providers.encyclopedia.api_base, "https://ja.wikipedia.org");
	assert_eq!(cfg.providers.encyclopedia.user_agent, None);
	assert_eq!(cfg.providers.encyclopedia.timeout_ms, 5_000);
	assert_eq!(cfg.display.return_keyword, "q");
	assert_eq!(cfg.display.missing_description, "説明がありません。");
	assert_eq!(cfg.display.max_results, 10);
}

#[test]
fn empty_file_uses_defaults() {
	let cfg = load_payload(String::new()).expect("Empty config must load.");
	let defaults = Config::default();

	assert_eq!(cfg.service.http_bind, defaults.service.http_bind);
	assert_eq!(cfg.storage.weights_path, "elements.json");
	assert_eq!(cfg.storage.descriptions_path, "descriptions.json");
	assert!(cfg.providers.encyclopedia.enabled);
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn missing_path_falls_back_to_defaults() {
	let cfg = kbase_config::load_or_default(None).expect("Defaults must validate.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.display.return_keyword, "q");
}

#[test]
fn unreadable_file_reports_path() {
	let mut path = env::temp_dir();

	path.push("kbase_config_test_does_not_exist.toml");

	let err = kbase_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
	assert!(err.to_string().contains("kbase_config_test_does_not_exist.toml"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
	let err = load_payload("[storage\nweights_path = 1".to_string())
		.expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }));
}

#[test]
fn storage_paths_must_differ() {
	expect_validation(
		sample_with("storage", "descriptions_path", Value::String("elements.json".to_string())),
		"storage.weights_path and storage.descriptions_path must differ.",
	);
}

#[test]
fn storage_paths_must_be_non_empty() {
	expect_validation(
		sample_with("storage", "weights_path", Value::String(" ".to_string())),
		"storage.weights_path must be non-empty.",
	);
}

#[test]
fn return_keyword_must_not_be_numeric() {
	expect_validation(
		sample_with("display", "return_keyword", Value::String("0".to_string())),
		"display.return_keyword must not be a number.",
	);
}

#[test]
fn return_keyword_must_be_non_empty() {
	expect_validation(
		sample_with("display", "return_keyword", Value::String("   ".to_string())),
		"display.return_keyword must be non-empty.",
	);
}

#[test]
fn timeout_must_be_positive_when_enabled() {
	expect_validation(
		sample_with("providers.encyclopedia", "timeout_ms", Value::Integer(0)),
		"providers.encyclopedia.timeout_ms must be greater than zero.",
	);
}

#[test]
fn timeout_is_ignored_when_disabled() {
	let payload = sample_with("providers.encyclopedia", "timeout_ms", Value::Integer(0));
	let mut root: Value = toml::from_str(&payload).expect("Failed to parse payload.");

	root["providers"]["encyclopedia"]
		.as_table_mut()
		.expect("Encyclopedia section must be a table.")
		.insert("enabled".to_string(), Value::Boolean(false));

	let cfg = load_payload(toml::to_string(&root).expect("Failed to render payload."))
		.expect("Disabled provider must not be validated.");

	assert!(!cfg.providers.encyclopedia.enabled);
}

#[test]
fn api_base_must_be_http() {
	expect_validation(
		sample_with("providers.encyclopedia", "api_base", Value::String("ftp://wiki".to_string())),
		"providers.encyclopedia.api_base must be an http or https URL.",
	);
}

#[test]
fn default_headers_must_be_strings() {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	root["providers"]["encyclopedia"]["default_headers"]
		.as_table_mut()
		.expect("Headers must be a table.")
		.insert("X-Retries".to_string(), Value::Integer(3));

	expect_validation(
		toml::to_string(&root).expect("Failed to render payload."),
		"providers.encyclopedia.default_headers.X-Retries must be a string.",
	);
}
