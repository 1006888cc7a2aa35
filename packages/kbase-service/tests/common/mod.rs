#![allow(dead_code)]

use std::{
	env, fs,
	path::PathBuf,
	sync::{
		Arc,
		atomic::{AtomicU64, AtomicUsize, Ordering},
	},
	time::{SystemTime, UNIX_EPOCH},
};

use kbase_config::{Config, EncyclopediaProviderConfig};
use kbase_service::{BoxFuture, Enricher, KbService};
use kbase_storage::Store;

pub const SUMMARY: &str = "金属は電気をよく通す。";

pub struct SpyEnricher {
	calls: Arc<AtomicUsize>,
	reply: String,
}
impl SpyEnricher {
	pub fn new(reply: &str) -> Self {
		Self { calls: Arc::new(AtomicUsize::new(0)), reply: reply.to_string() }
	}

	pub fn counter(&self) -> Arc<AtomicUsize> {
		self.calls.clone()
	}
}
impl Enricher for SpyEnricher {
	fn lookup<'a>(
		&'a self,
		_cfg: &'a EncyclopediaProviderConfig,
		_query: &'a str,
	) -> BoxFuture<'a, String> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let reply = self.reply.clone();

		Box::pin(async move { reply })
	}
}

pub struct Fixture {
	pub dir: PathBuf,
	pub service: KbService,
	pub enrich_calls: Arc<AtomicUsize>,
}
impl Fixture {
	pub fn new() -> Self {
		Self::with_reply(SUMMARY)
	}

	pub fn with_reply(reply: &str) -> Self {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("System time must be valid.")
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let dir = env::temp_dir().join(format!("kbase_service_test_{nanos}_{pid}_{ordinal}"));

		fs::create_dir_all(&dir).expect("Failed to create temp dir.");

		let cfg = test_config(&dir);
		let store = Store::open(&cfg.storage).expect("Failed to open store.");
		let enricher = SpyEnricher::new(reply);
		let enrich_calls = enricher.counter();
		let service = KbService::with_enricher(cfg, store, Arc::new(enricher));

		Self { dir, service, enrich_calls }
	}

	pub fn enrich_calls(&self) -> usize {
		self.enrich_calls.load(Ordering::SeqCst)
	}

	/// What a fresh process would see on disk.
	pub fn reopen(&self) -> Store {
		Store::open(&self.service.cfg.storage).expect("Failed to reopen store.")
	}
}
impl Drop for Fixture {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.dir);
	}
}

pub fn test_config(dir: &std::path::Path) -> Config {
	let mut cfg = Config::default();

	cfg.storage.weights_path = dir.join("elements.json").display().to_string();
	cfg.storage.descriptions_path = dir.join("descriptions.json").display().to_string();
	cfg.providers.encyclopedia.api_base = "http://127.0.0.1:9".to_string();

	cfg
}
