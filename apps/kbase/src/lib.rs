pub mod console;

use std::{
	fmt,
	io::{self, BufRead, Write},
	path::PathBuf,
	str::FromStr,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kbase_service::{
	KbService,
	session::{EditorRun, SearchRun},
};

use crate::console::{ConsoleSink, LinePrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Editor,
	Search,
}
impl FromStr for Mode {
	type Err = String;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim() {
			"editor" => Ok(Self::Editor),
			"search" => Ok(Self::Search),
			other => Err(format!("Unknown mode {other:?}. Expected editor or search.")),
		}
	}
}
impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Editor => f.write_str("editor"),
			Self::Search => f.write_str("search"),
		}
	}
}

#[derive(Debug, Parser)]
#[command(
	version = kbase_cli::VERSION,
	rename_all = "kebab",
	styles = kbase_cli::styles(),
)]
pub struct Args {
	/// Optional TOML config. Built-in defaults apply when omitted.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// `editor` adds entries; `search` queries them and can re-edit a hit.
	#[arg(long, short = 'm', env = "MODE", default_value_t = Mode::Editor)]
	pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Editor(EditorRun),
	Search(SearchRun),
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = kbase_config::load_or_default(args.config.as_deref())?;

	init_tracing(&config);

	let stdin = io::stdin();
	let outcome = execute(config, args.mode, stdin.lock(), io::stdout(), io::stdout()).await?;

	tracing::debug!(?outcome, "Run finished.");

	Ok(())
}

/// Runs one workflow in `mode`, reading answers from `input`.
///
/// Prompts go to `prompt_output` and rendered events to `event_output`.
pub async fn execute<R, P, E>(
	config: kbase_config::Config,
	mode: Mode,
	input: R,
	prompt_output: P,
	event_output: E,
) -> color_eyre::Result<Outcome>
where
	R: BufRead,
	P: Write,
	E: Write,
{
	let mut service = KbService::open(config)?;
	let mut prompt = LinePrompt::new(input, prompt_output);
	let mut sink = ConsoleSink::new(event_output);

	tracing::info!(%mode, "Starting run.");

	let outcome = match mode {
		Mode::Editor => Outcome::Editor(service.run_editor(&mut prompt, &mut sink)?),
		Mode::Search => Outcome::Search(service.run_search(&mut prompt, &mut sink).await?),
	};

	sink.into_inner().flush()?;

	Ok(outcome)
}

fn init_tracing(config: &kbase_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
