use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scorer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	pub key: String,
	pub weight: i64,
	pub score: u32,
}

/// Scores every key against `query` and returns the matching ones, best first.
///
/// Keys scoring zero are dropped. Equal scores keep ascending key order because the sort is
/// stable over the map's iteration order.
pub fn search(query: &str, weights: &BTreeMap<String, i64>) -> Vec<SearchHit> {
	let mut hits: Vec<SearchHit> = weights
		.iter()
		.filter_map(|(key, weight)| {
			let score = scorer::score(query, key);

			(score > 0).then(|| SearchHit { key: key.clone(), weight: *weight, score })
		})
		.collect();

	hits.sort_by(|a, b| b.score.cmp(&a.score));

	hits
}
