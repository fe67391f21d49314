use log::{debug, trace};

use crate::dictionary::{DictionaryError, WordSource};
use crate::matcher::{self, Stop};
use crate::node::Node;

/// A compressed prefix tree over strings.
///
/// Mutation takes `&mut self` and every query takes `&self`, so a shared tree
/// can be read from many threads at once but never while it is being written.
/// Wrap it in [`SharedRadixTree`](crate::SharedRadixTree) when writers and
/// readers need to interleave.
#[derive(Clone, Debug)]
pub struct RadixTree {
    pub(crate) root: Node,
    count: usize,
}

impl RadixTree {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            count: 0,
        }
    }

    /// Builds a tree from every word a source yields, in order.
    ///
    /// A source that cannot produce its words fails here, before any tree
    /// exists.
    pub fn from_source<S: WordSource>(source: S) -> Result<Self, DictionaryError> {
        let words = source.into_words()?;
        let read = words.len();
        let tree: Self = words.into_iter().collect();
        debug!(
            "built radix tree: {} words read, {} stored, {} nodes",
            read,
            tree.len(),
            tree.node_count()
        );
        Ok(tree)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Adds `word` to the tree.
    ///
    /// Returns `true` if the word was not already present. The empty string
    /// is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let loc = matcher::locate(&self.root, word);
        let node = matcher::node_at_mut(&mut self.root, &loc.path);

        let inserted = match loc.stop {
            Stop::AtNode if loc.rest.is_empty() => {
                // The word ends exactly on an existing node.
                if node.is_root || node.is_word {
                    false
                } else {
                    node.is_word = true;
                    true
                }
            }
            Stop::AtNode => {
                node.children.push(Node::leaf(loc.rest, word));
                true
            }
            Stop::InLabel(at) => {
                trace!("splitting {:?} after {} bytes for {:?}", node.label, at, word);
                node.split_at(at);

                let tail = &loc.rest[at..];
                if tail.is_empty() {
                    node.is_word = true;
                } else {
                    node.children.push(Node::leaf(tail, word));
                }
                true
            }
        };

        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Exact membership test.
    pub fn contains(&self, query: &str) -> bool {
        let loc = matcher::locate(&self.root, query);
        loc.stop == Stop::AtNode
            && loc.rest.is_empty()
            && matcher::node_at(&self.root, &loc.path).is_word
    }

    /// Every stored word starting with `query`, in child insertion order.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        self.suggestions(query).collect()
    }

    /// Lazy form of [`suggest`](Self::suggest).
    pub fn suggestions(&self, query: &str) -> Words<'_> {
        let loc = matcher::locate(&self.root, query);
        let node = matcher::node_at(&self.root, &loc.path);

        match loc.stop {
            Stop::AtNode if loc.rest.is_empty() => Words::new(node, query.to_owned()),
            Stop::AtNode => Words::empty(),
            // The query ends inside this node's label: every word below it
            // completes the query, starting from the node's full prefix.
            Stop::InLabel(at) if at == loc.rest.len() => {
                debug_assert_eq!(node.prefix, format!("{}{}", loc.prefix, node.label));
                Words::new(node, node.prefix.clone())
            }
            Stop::InLabel(_) => Words::empty(),
        }
    }

    /// Every stored word, depth-first in child insertion order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for RadixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RadixTree {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut tree = Self::new();
        tree.extend(words);
        tree
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first walk over the words of a subtree.
///
/// Clones continue independently from the current position. Calling
/// [`RadixTree::iter`] or [`RadixTree::suggestions`] again starts over.
#[derive(Clone)]
pub struct Words<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl<'a> Words<'a> {
    fn new(node: &'a Node, prefix: String) -> Self {
        Self {
            stack: vec![(node, prefix)],
        }
    }

    fn empty() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            // Reverse so the first child is popped first.
            for child in node.children.iter().rev() {
                self.stack.push((child, format!("{}{}", word, child.label)));
            }
            if node.is_word {
                return Some(word);
            }
        }
        None
    }
}
