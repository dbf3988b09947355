//! In-memory filter over the loaded advocate collection.
//!
//! Matching is a case-insensitive substring test across every column in
//! [`FIELDS`]; a record is kept when any column matches. The result is always
//! a subsequence of the input in input order. An empty query is the identity:
//! the full collection is returned as the same allocation, not rebuilt.
//!
//! [`filter_advocates`] is the pure function; [`FilterEngine`] wraps it with a
//! last-inputs cache so unchanged `(collection, query)` pairs do not rescan.

use std::sync::Arc;

use crate::model::Advocate;
use crate::search::fields::FIELDS;

/// Keep every advocate with at least one column containing `query`.
///
/// The query is lower-cased once per call; field values are lower-cased per
/// comparison. No trimming: a whitespace-only query is a literal needle.
pub fn filter_advocates(advocates: &Arc<Vec<Advocate>>, query: &str) -> Arc<Vec<Advocate>> {
    if query.is_empty() {
        return Arc::clone(advocates);
    }

    let needle = query.to_lowercase();
    let matched: Vec<Advocate> = advocates
        .iter()
        .filter(|advocate| matches(advocate, &needle))
        .cloned()
        .collect();

    tracing::debug!(
        query,
        matched = matched.len(),
        total = advocates.len(),
        "filter"
    );

    Arc::new(matched)
}

/// True when any column of `advocate` contains the lower-cased `needle`.
fn matches(advocate: &Advocate, needle: &str) -> bool {
    FIELDS
        .iter()
        .any(|field| field.value(advocate).contains(needle))
}

/// Caches the most recent `(collection, query)` pair and its result.
///
/// The collection is compared by pointer, the query by value; either changing
/// triggers a recompute. The cache is purely a performance layer; the value
/// returned is always what [`filter_advocates`] would produce.
#[derive(Default)]
pub struct FilterEngine {
    cached: Option<CacheEntry>,
}

struct CacheEntry {
    collection: Arc<Vec<Advocate>>,
    query: String,
    result: Arc<Vec<Advocate>>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `advocates` by `query`, reusing the cached result when both
    /// inputs are unchanged.
    pub fn filter(&mut self, advocates: &Arc<Vec<Advocate>>, query: &str) -> Arc<Vec<Advocate>> {
        if let Some(entry) = &self.cached
            && Arc::ptr_eq(&entry.collection, advocates)
            && entry.query == query
        {
            return Arc::clone(&entry.result);
        }

        let result = filter_advocates(advocates, query);
        self.cached = Some(CacheEntry {
            collection: Arc::clone(advocates),
            query: query.to_string(),
            result: Arc::clone(&result),
        });
        result
    }
}
