//! # radix-suggest
//!
//! A compressed prefix tree (radix tree) over strings with exact search and
//! prefix autocomplete.
//!
//! Chains of single-child nodes are merged into multi-character labels, and
//! labels are split on insert when a new word diverges partway through one.
//! Suggestions for a batch of queries are computed in parallel and merged into
//! one sorted, deduplicated list.
//!
//! ## Example
//!
//! ```rust
//! use radix_suggest::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("team");
//! tree.insert("test");
//! tree.insert("toast");
//!
//! assert!(tree.contains("test"));
//! assert!(!tree.contains("te"));
//! assert_eq!(tree.suggest("te"), ["team", "test"]);
//! assert_eq!(tree.suggest_batch(&["to", "tes"]), ["test", "toast"]);
//! ```

#![deny(unsafe_code)]

mod batch;
pub mod config;
pub mod dictionary;
mod matcher;
mod node;
mod shared;
mod tree;

pub use config::Config;
pub use dictionary::{DictionaryError, FileDictionary, WordSource};
pub use node::Node;
pub use shared::SharedRadixTree;
pub use tree::{RadixTree, Words};

#[cfg(test)]
mod proptests;
