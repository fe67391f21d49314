//! Longest-common-prefix walk shared by insertion, search and suggestion.

use smallvec::SmallVec;

use crate::node::Node;

/// Child indices from the root to a node.
pub(crate) type Path = SmallVec<[usize; 8]>;

/// Where the walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    /// No child of the reached node shares a leading character with the
    /// remaining query. The remainder may be empty.
    AtNode,
    /// The remaining query diverges from, or ends inside, the reached node's
    /// label after this many bytes.
    InLabel(usize),
}

/// Result of walking a query down from the root.
#[derive(Clone, Debug)]
pub(crate) struct Location<'q> {
    pub(crate) path: Path,
    pub(crate) stop: Stop,
    /// Query not yet consumed by a full label match. For [`Stop::InLabel`]
    /// this still includes the bytes that matched the reached node's label.
    pub(crate) rest: &'q str,
    /// Query consumed by full label matches on the way down.
    pub(crate) prefix: &'q str,
}

/// Byte length of the longest common prefix of `a` and `b`, counted in whole
/// chars so the result is always a char boundary of both.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|&((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        // One string is a prefix of the other.
        .unwrap_or(a.len().min(b.len()))
}

/// Walks `query` down from `root`.
///
/// Children are scanned in insertion order and the first one sharing a
/// non-empty common prefix with the remaining query is taken; sibling labels
/// never share a first char, so at most one can. Fully matched labels are
/// descended into transparently.
pub(crate) fn locate<'q>(root: &Node, query: &'q str) -> Location<'q> {
    let mut node = root;
    let mut path = Path::new();
    let mut consumed = 0;

    loop {
        let rest = &query[consumed..];
        let hit = node.children.iter().enumerate().find_map(|(idx, child)| {
            let len = common_prefix_len(&child.label, rest);
            (len > 0).then_some((idx, len))
        });

        let Some((idx, len)) = hit else {
            return Location {
                path,
                stop: Stop::AtNode,
                rest,
                prefix: &query[..consumed],
            };
        };

        let child = &node.children[idx];
        path.push(idx);

        if len < child.label.len() {
            return Location {
                path,
                stop: Stop::InLabel(len),
                rest,
                prefix: &query[..consumed],
            };
        }

        consumed += len;
        node = child;
    }
}

pub(crate) fn node_at<'n>(root: &'n Node, path: &[usize]) -> &'n Node {
    path.iter().fold(root, |node, &idx| &node.children[idx])
}

pub(crate) fn node_at_mut<'n>(root: &'n mut Node, path: &[usize]) -> &'n mut Node {
    path.iter().fold(root, |node, &idx| &mut node.children[idx])
}
