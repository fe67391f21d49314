/// Label carried by the root. It never contributes to a stored word.
pub(crate) const ROOT_LABEL: &str = "*";

/// A vertex in the radix tree.
///
/// `label` is the fragment this node adds to every word passing through it.
/// `prefix` caches the concatenation of labels from the root down to and
/// including this node, so suggestion traversal can start mid-tree without
/// walking back up.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) prefix: String,
    pub(crate) children: Vec<Node>,
    pub(crate) is_word: bool,
    pub(crate) is_root: bool,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            label: ROOT_LABEL.to_owned(),
            prefix: String::new(),
            children: Vec::new(),
            is_word: false,
            is_root: true,
        }
    }

    /// A word-boundary leaf spelling `prefix`, whose last `label.len()` bytes
    /// are `label`.
    pub(crate) fn leaf(label: &str, prefix: &str) -> Self {
        debug_assert!(!label.is_empty());
        debug_assert!(prefix.ends_with(label));
        Self {
            label: label.to_owned(),
            prefix: prefix.to_owned(),
            children: Vec::new(),
            is_word: true,
            is_root: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full root-to-node string. Empty for the root.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Children in the order they were first created.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Splits this node's label after `at` bytes.
    ///
    /// The node keeps the head of its label and becomes a plain branch point;
    /// the tail moves into a single new child that inherits the old word flag
    /// and every existing child. `at` must lie on a char boundary strictly
    /// inside the label.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        debug_assert!(self.label.is_char_boundary(at));

        let tail = Node {
            label: self.label[at..].to_owned(),
            prefix: std::mem::take(&mut self.prefix),
            children: std::mem::take(&mut self.children),
            is_word: self.is_word,
            is_root: false,
        };

        self.label.truncate(at);
        self.prefix = tail.prefix[..tail.prefix.len() - tail.label.len()].to_owned();
        self.is_word = false;
        self.children.push(tail);
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
