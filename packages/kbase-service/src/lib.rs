pub mod editor;
pub mod reedit;
pub mod search;
pub mod session;

mod error;

pub use editor::{BatchReport, EntryInput};
pub use error::{Error, Result};
pub use kbase_domain::{SearchHit, Selection};
pub use search::SearchOutcome;

use std::{future::Future, pin::Pin, sync::Arc};

use serde::Serialize;

use kbase_config::{Config, EncyclopediaProviderConfig};
use kbase_providers::encyclopedia;
use kbase_storage::Store;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Supplies the summary paragraph shown next to search results.
///
/// Implementations never fail: transport problems come back as sentinel text.
pub trait Enricher
where
	Self: Send + Sync,
{
	fn lookup<'a>(
		&'a self,
		cfg: &'a EncyclopediaProviderConfig,
		query: &'a str,
	) -> BoxFuture<'a, String>;
}

/// What the user sees about one entry before re-editing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
	pub key: String,
	pub weight: Option<i64>,
	/// The stored description, or the configured placeholder.
	pub description: String,
	pub has_description: bool,
}

pub struct KbService {
	pub cfg: Config,
	pub store: Store,
	pub enricher: Arc<dyn Enricher>,
}
impl KbService {
	/// Opens the configured store and picks the enricher matching the provider settings.
	pub fn open(cfg: Config) -> Result<Self> {
		let store = Store::open(&cfg.storage)?;
		let enricher: Arc<dyn Enricher> = if cfg.providers.encyclopedia.enabled {
			Arc::new(DefaultEnricher)
		} else {
			Arc::new(DisabledEnricher)
		};

		Ok(Self::with_enricher(cfg, store, enricher))
	}

	pub fn with_enricher(cfg: Config, store: Store, enricher: Arc<dyn Enricher>) -> Self {
		Self { cfg, store, enricher }
	}

	/// Re-reads both mappings so a run starts from what is on disk.
	pub fn reload(&mut self) -> Result<()> {
		self.store.reload()?;

		Ok(())
	}

	pub fn select(&self, hits: &[SearchHit], raw: &str) -> Selection {
		kbase_domain::parse_selection(raw, &self.cfg.display.return_keyword, hits)
	}

	/// The stored description of `key`, or the placeholder when none was written.
	pub fn describe(&self, key: &str) -> &str {
		self.store.description(key).unwrap_or(&self.cfg.display.missing_description)
	}

	pub fn entry_view(&self, key: &str) -> EntryView {
		EntryView {
			key: key.to_string(),
			weight: self.store.weight(key),
			description: self.describe(key).to_string(),
			has_description: self.store.description(key).is_some(),
		}
	}
}

pub struct DefaultEnricher;
impl Enricher for DefaultEnricher {
	fn lookup<'a>(
		&'a self,
		cfg: &'a EncyclopediaProviderConfig,
		query: &'a str,
	) -> BoxFuture<'a, String> {
		Box::pin(encyclopedia::lookup(cfg, query))
	}
}

/// Used when `providers.encyclopedia.enabled` is false; answers without network I/O.
pub struct DisabledEnricher;
impl Enricher for DisabledEnricher {
	fn lookup<'a>(
		&'a self,
		_cfg: &'a EncyclopediaProviderConfig,
		_query: &'a str,
	) -> BoxFuture<'a, String> {
		Box::pin(async { encyclopedia::NOT_FOUND.to_string() })
	}
}
