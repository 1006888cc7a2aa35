use std::io::{BufRead, Write};

use kbase_service::{
	Result,
	session::{Ask, Event, Prompt, Sink},
};

/// Reads answers line by line, printing a prompt before each one.
pub struct LinePrompt<R, W> {
	input: R,
	output: W,
}
impl<R, W> LinePrompt<R, W>
where
	R: BufRead,
	W: Write,
{
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}
}
impl<R, W> Prompt for LinePrompt<R, W>
where
	R: BufRead,
	W: Write,
{
	fn ask(&mut self, ask: Ask<'_>) -> Result<Option<String>> {
		write!(self.output, "{}: ", prompt_text(ask))?;
		self.output.flush()?;

		let mut line = String::new();

		if self.input.read_line(&mut line)? == 0 {
			writeln!(self.output)?;

			return Ok(None);
		}

		let trimmed = line.trim_end_matches(['\n', '\r']).len();

		line.truncate(trimmed);

		Ok(Some(line))
	}
}

/// Renders workflow events as plain text.
pub struct ConsoleSink<W> {
	output: W,
}
impl<W> ConsoleSink<W>
where
	W: Write,
{
	pub fn new(output: W) -> Self {
		Self { output }
	}

	pub fn into_inner(self) -> W {
		self.output
	}
}
impl<W> Sink for ConsoleSink<W>
where
	W: Write,
{
	fn emit(&mut self, event: Event<'_>) {
		if let Err(err) = self.output.write_all(render(event).as_bytes()) {
			tracing::warn!(error = %err, "Failed to write console output.");
		}
	}
}

pub fn prompt_text(ask: Ask<'_>) -> String {
	match ask {
		Ask::EntryCount => "How many entries do you want to add".to_string(),
		Ask::Key { ordinal, total } => format!("[{ordinal}/{total}] Key"),
		Ask::Weight { key } => format!("Weight for {key}"),
		Ask::Description { key } => format!("Description for {key}"),
		Ask::Query => "Search".to_string(),
		Ask::Selection { count, return_keyword } =>
			format!("Entry number to edit (1-{count}), or {return_keyword} to return"),
		Ask::NewWeight { key } => format!("New weight for {key}"),
		Ask::NewDescription { key } => format!("New description for {key}"),
	}
}

pub fn render(event: Event<'_>) -> String {
	match event {
		Event::InvalidNumber { raw } => format!("{raw:?} is not a number. Try again.\n"),
		Event::EmptyKey => "The key must not be empty. Try again.\n".to_string(),
		Event::BatchSaved(report) => format!("Saved {} entries.\n", report.written),
		Event::NoResults { query } => format!("No results for {query}.\n"),
		Event::Results { hits, descriptions, enrichment } => {
			let mut out = String::from("Results:\n");

			for (position, (hit, description)) in hits.iter().zip(descriptions).enumerate() {
				out.push_str(&format!(
					"{}. {} (weight {}, score {})\n   {}\n",
					position + 1,
					hit.key,
					hit.weight,
					hit.score,
					description
				));
			}

			out.push_str(&format!("\nEncyclopedia:\n{enrichment}\n"));

			out
		},
		Event::Entry(view) => {
			let weight = view.weight.map(|weight| weight.to_string()).unwrap_or_default();

			format!(
				"Editing {}\n  weight: {weight}\n  description: {}\n",
				view.key, view.description
			)
		},
		Event::InvalidSelection { index, count } =>
			format!("{index} is not between 1 and {count}.\n"),
		Event::InvalidInput { raw } => format!("{raw:?} is not a valid selection.\n"),
		Event::Returned => "Returning without changes.\n".to_string(),
		Event::Updated { key } => format!("Updated {key}.\n"),
		Event::InputClosed => "Input closed. Nothing was saved.\n".to_string(),
	}
}
