//! Prompt-driven runs of the editor and search workflows.
//!
//! Front ends supply a [`Prompt`] to answer questions and a [`Sink`] to render what happened;
//! the state machine itself lives here so every shell behaves the same way.

use std::str::FromStr;

use crate::{
	BatchReport, EntryInput, EntryView, KbService, Result, SearchHit, SearchOutcome, Selection,
};

/// A question the workflow needs answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ask<'a> {
	EntryCount,
	Key { ordinal: usize, total: usize },
	Weight { key: &'a str },
	Description { key: &'a str },
	Query,
	Selection { count: usize, return_keyword: &'a str },
	NewWeight { key: &'a str },
	NewDescription { key: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
	InvalidNumber { raw: &'a str },
	EmptyKey,
	BatchSaved(BatchReport),
	NoResults { query: &'a str },
	/// `descriptions` is aligned with `hits`, placeholders included.
	Results { hits: &'a [SearchHit], descriptions: &'a [&'a str], enrichment: &'a str },
	Entry(&'a EntryView),
	InvalidSelection { index: i64, count: usize },
	InvalidInput { raw: &'a str },
	Returned,
	Updated { key: &'a str },
	InputClosed,
}

pub trait Prompt {
	/// Returns `None` once the input source is exhausted.
	fn ask(&mut self, ask: Ask<'_>) -> Result<Option<String>>;
}

pub trait Sink {
	fn emit(&mut self, event: Event<'_>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRun {
	Saved(BatchReport),
	InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRun {
	NoResults,
	Returned,
	/// The selection was out of range or not a number. Nothing was written.
	Rejected(Selection),
	Updated { key: String },
	InputClosed,
}

impl KbService {
	/// Collects one batch of entries and saves it. Closing the input mid-batch saves nothing.
	pub fn run_editor<P, S>(&mut self, prompt: &mut P, sink: &mut S) -> Result<EditorRun>
	where
		P: Prompt + ?Sized,
		S: Sink + ?Sized,
	{
		self.reload()?;

		let Some(total) = ask_number::<usize, _, _>(prompt, sink, Ask::EntryCount)? else {
			return Ok(closed(sink, EditorRun::InputClosed));
		};
		let mut entries = Vec::new();

		for ordinal in 1..=total {
			let Some(entry) = ask_entry(prompt, sink, ordinal, total)? else {
				return Ok(closed(sink, EditorRun::InputClosed));
			};

			entries.push(entry);
		}

		let report = self.apply_batch(entries)?;

		sink.emit(Event::BatchSaved(report));

		Ok(EditorRun::Saved(report))
	}

	/// Runs one query, shows the hits, and optionally re-edits the chosen entry.
	pub async fn run_search<P, S>(&mut self, prompt: &mut P, sink: &mut S) -> Result<SearchRun>
	where
		P: Prompt + ?Sized,
		S: Sink + ?Sized,
	{
		self.reload()?;

		let Some(query) = prompt.ask(Ask::Query)? else {
			return Ok(closed(sink, SearchRun::InputClosed));
		};
		let (hits, enrichment) = match self.search(&query).await {
			SearchOutcome::NoResults => {
				sink.emit(Event::NoResults { query: &query });

				return Ok(SearchRun::NoResults);
			},
			SearchOutcome::Results { hits, enrichment } => (hits, enrichment),
		};

		let descriptions: Vec<&str> = hits.iter().map(|hit| self.describe(&hit.key)).collect();

		sink.emit(Event::Results {
			hits: &hits,
			descriptions: &descriptions,
			enrichment: &enrichment,
		});

		let ask = Ask::Selection {
			count: hits.len(),
			return_keyword: &self.cfg.display.return_keyword,
		};
		let Some(raw) = prompt.ask(ask)? else {
			return Ok(closed(sink, SearchRun::InputClosed));
		};
		let key = match self.select(&hits, &raw) {
			Selection::Return => {
				sink.emit(Event::Returned);

				return Ok(SearchRun::Returned);
			},
			Selection::Chosen { key, .. } => key,
			Selection::InvalidSelection { index, len } => {
				sink.emit(Event::InvalidSelection { index, count: len });

				return Ok(SearchRun::Rejected(Selection::InvalidSelection { index, len }));
			},
			Selection::InvalidInput { raw } => {
				sink.emit(Event::InvalidInput { raw: &raw });

				return Ok(SearchRun::Rejected(Selection::InvalidInput { raw }));
			},
		};

		sink.emit(Event::Entry(&self.entry_view(&key)));

		let Some(weight) = ask_number::<i64, _, _>(prompt, sink, Ask::NewWeight { key: &key })?
		else {
			return Ok(closed(sink, SearchRun::InputClosed));
		};
		let Some(description) = prompt.ask(Ask::NewDescription { key: &key })? else {
			return Ok(closed(sink, SearchRun::InputClosed));
		};

		self.re_edit(&key, weight, &description)?;

		sink.emit(Event::Updated { key: &key });

		Ok(SearchRun::Updated { key })
	}
}

fn ask_entry<P, S>(
	prompt: &mut P,
	sink: &mut S,
	ordinal: usize,
	total: usize,
) -> Result<Option<EntryInput>>
where
	P: Prompt + ?Sized,
	S: Sink + ?Sized,
{
	let key = loop {
		let Some(raw) = prompt.ask(Ask::Key { ordinal, total })? else {
			return Ok(None);
		};

		if !raw.is_empty() {
			break raw;
		}

		sink.emit(Event::EmptyKey);
	};
	let Some(weight) = ask_number::<i64, _, _>(prompt, sink, Ask::Weight { key: &key })? else {
		return Ok(None);
	};
	let Some(description) = prompt.ask(Ask::Description { key: &key })? else {
		return Ok(None);
	};

	Ok(Some(EntryInput { key, weight, description }))
}

/// Asks until the answer parses as `T`.
fn ask_number<T, P, S>(prompt: &mut P, sink: &mut S, ask: Ask<'_>) -> Result<Option<T>>
where
	T: FromStr,
	P: Prompt + ?Sized,
	S: Sink + ?Sized,
{
	loop {
		let Some(raw) = prompt.ask(ask)? else {
			return Ok(None);
		};

		match raw.trim().parse::<T>() {
			Ok(value) => return Ok(Some(value)),
			Err(_) => sink.emit(Event::InvalidNumber { raw: &raw }),
		}
	}
}

fn closed<S, T>(sink: &mut S, run: T) -> T
where
	S: Sink + ?Sized,
{
	sink.emit(Event::InputClosed);

	run
}
