//! Suggestions for many queries at once.

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::tree::RadixTree;

impl RadixTree {
    /// Union of [`suggest`](Self::suggest) over every query, deduplicated and
    /// sorted lexicographically.
    ///
    /// Each query is completed independently on the rayon global pool; all of
    /// them finish before anything is merged, so the result does not depend on
    /// scheduling.
    pub fn suggest_batch<Q>(&self, queries: &[Q]) -> Vec<String>
    where
        Q: AsRef<str> + Sync,
    {
        debug!("suggesting for {} queries", queries.len());

        let per_query: Vec<Vec<String>> = queries
            .par_iter()
            .map(|query| self.suggest(query.as_ref()))
            .collect();

        let mut unique = AHashSet::new();
        for suggestions in per_query {
            unique.extend(suggestions);
        }

        let mut merged: Vec<String> = unique.into_iter().collect();
        merged.sort_unstable();
        merged
    }

    /// [`suggest_batch`](Self::suggest_batch) on a caller-provided pool.
    pub fn suggest_batch_in<Q>(&self, pool: &ThreadPool, queries: &[Q]) -> Vec<String>
    where
        Q: AsRef<str> + Sync,
    {
        pool.install(|| self.suggest_batch(queries))
    }
}
