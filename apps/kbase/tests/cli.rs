use std::{
	env, fs, io,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;

use kbase::{Args, Mode, Outcome};
use kbase_service::session::{EditorRun, SearchRun};

fn temp_dir() -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let dir = env::temp_dir().join(format!(
		"kbase_cli_test_{nanos}_{}_{ordinal}",
		std::process::id()
	));

	fs::create_dir_all(&dir).expect("Failed to create temp dir.");

	dir
}

fn offline_config(dir: &std::path::Path) -> kbase_config::Config {
	let mut cfg = kbase_config::Config::default();

	cfg.storage.weights_path = dir.join("elements.json").display().to_string();
	cfg.storage.descriptions_path = dir.join("descriptions.json").display().to_string();
	cfg.providers.encyclopedia.enabled = false;

	cfg
}

#[test]
fn parses_mode_and_config_flags() {
	let args = Args::try_parse_from(["kbase", "--mode", "search", "-c", "kbase.toml"])
		.expect("Failed to parse args.");

	assert_eq!(args.mode, Mode::Search);
	assert_eq!(args.config, Some(PathBuf::from("kbase.toml")));
}

#[test]
fn mode_accepts_surrounding_whitespace_and_rejects_unknown() {
	assert_eq!(" search ".parse::<Mode>(), Ok(Mode::Search));
	assert_eq!("editor\n".parse::<Mode>(), Ok(Mode::Editor));
	assert!("browse".parse::<Mode>().is_err());
	assert!(Args::try_parse_from(["kbase", "--mode", "browse"]).is_err());
}

#[tokio::test]
async fn editor_then_search_round_trip() {
	let dir = temp_dir();
	let mut rendered = Vec::new();
	let editor = kbase::execute(
		offline_config(&dir),
		Mode::Editor,
		"1\n銅\n5\n銅は金属です。\n".as_bytes(),
		io::sink(),
		&mut rendered,
	)
	.await
	.expect("Editor run failed.");

	assert!(matches!(editor, Outcome::Editor(EditorRun::Saved(report)) if report.written == 1));
	assert!(String::from_utf8_lossy(&rendered).contains("Saved 1 entries."));

	let mut rendered = Vec::new();
	let search = kbase::execute(
		offline_config(&dir),
		Mode::Search,
		"銅\n1\n6\n銅は赤い金属です。\n".as_bytes(),
		io::sink(),
		&mut rendered,
	)
	.await
	.expect("Search run failed.");
	let text = String::from_utf8_lossy(&rendered).into_owned();

	assert_eq!(search, Outcome::Search(SearchRun::Updated { key: "銅".to_string() }));
	assert!(text.contains("1. 銅 (weight 5, score 1)"), "Unexpected output: {text}");
	assert!(text.contains("No information was found."), "Unexpected output: {text}");

	let descriptions =
		fs::read_to_string(dir.join("descriptions.json")).expect("Missing descriptions file.");

	assert!(descriptions.contains("銅は赤い金属です。"));

	fs::remove_dir_all(&dir).expect("Failed to remove temp dir.");
}

#[tokio::test]
async fn search_on_empty_store_reports_no_results() {
	let dir = temp_dir();
	let mut rendered = Vec::new();
	let outcome = kbase::execute(
		offline_config(&dir),
		Mode::Search,
		"金属\n".as_bytes(),
		io::sink(),
		&mut rendered,
	)
	.await
	.expect("Search run failed.");

	assert_eq!(outcome, Outcome::Search(SearchRun::NoResults));
	assert_eq!(String::from_utf8_lossy(&rendered), "No results for 金属.\n");

	fs::remove_dir_all(&dir).expect("Failed to remove temp dir.");
}
