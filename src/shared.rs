//! A lock-guarded tree for callers that insert from several threads.

use parking_lot::RwLock;

use crate::dictionary::{DictionaryError, WordSource};
use crate::tree::RadixTree;

/// [`RadixTree`] behind a reader-writer lock.
///
/// Inserts take the write lock; every query takes the read lock, so queries
/// run alongside each other but never alongside an insert.
#[derive(Debug, Default)]
pub struct SharedRadixTree {
    inner: RwLock<RadixTree>,
}

impl SharedRadixTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source<S: WordSource>(source: S) -> Result<Self, DictionaryError> {
        RadixTree::from_source(source).map(Self::from)
    }

    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.inner.read().contains(query)
    }

    pub fn suggest(&self, query: &str) -> Vec<String> {
        self.inner.read().suggest(query)
    }

    pub fn suggest_batch<Q>(&self, queries: &[Q]) -> Vec<String>
    where
        Q: AsRef<str> + Sync,
    {
        self.inner.read().suggest_batch(queries)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copies the current contents out from under the lock.
    pub fn snapshot(&self) -> RadixTree {
        self.inner.read().clone()
    }

    pub fn into_inner(self) -> RadixTree {
        self.inner.into_inner()
    }
}

impl From<RadixTree> for SharedRadixTree {
    fn from(tree: RadixTree) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }
}
