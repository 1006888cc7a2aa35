use serde::Serialize;

use crate::{BoxFuture, KbService, SearchHit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
	NoResults,
	Results { hits: Vec<SearchHit>, enrichment: String },
}
impl SearchOutcome {
	pub fn hits(&self) -> &[SearchHit] {
		match self {
			Self::NoResults => &[],
			Self::Results { hits, .. } => hits.as_slice(),
		}
	}
}

impl KbService {
	/// The hits a search for `query` displays, without enrichment.
	pub fn rank(&self, query: &str) -> Vec<SearchHit> {
		let mut hits = kbase_domain::search(query, self.store.weights());
		let limit = self.cfg.display.max_results;

		if limit > 0 {
			hits.truncate(limit);
		}

		hits
	}

	/// Looks up the summary for `query` without borrowing the service.
	///
	/// Lets callers that share the service behind a lock release it before the network call.
	pub fn enrichment(&self, query: &str) -> BoxFuture<'static, String> {
		let enricher = self.enricher.clone();
		let cfg = self.cfg.providers.encyclopedia.clone();
		let query = query.to_string();

		Box::pin(async move { enricher.lookup(&cfg, &query).await })
	}

	/// Ranks the stored keys against `query`.
	///
	/// The enricher is only consulted when at least one key matched.
	pub async fn search(&self, query: &str) -> SearchOutcome {
		let hits = self.rank(query);

		if hits.is_empty() {
			tracing::info!(query, "Search found no matching keys.");

			return SearchOutcome::NoResults;
		}

		let enrichment = self.enrichment(query).await;

		tracing::info!(query, hits = hits.len(), "Search completed.");

		SearchOutcome::Results { hits, enrichment }
	}
}
