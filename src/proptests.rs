use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

fn validate_tree(t: &RadixTree) {
    let root = t.root();
    assert!(root.is_root());
    assert!(!root.is_word(), "root must never be a word");

    let mut stack: Vec<&Node> = vec![root];
    let mut word_count = 0usize;
    while let Some(node) = stack.pop() {
        if node.is_word() {
            word_count += 1;
        }

        if !node.is_root() {
            assert!(!node.label().is_empty(), "empty label under {:?}", node.prefix());
            assert!(
                node.is_word() || node.children().len() != 1,
                "unmerged chain at {:?}",
                node.prefix()
            );
        }

        let mut firsts = BTreeSet::new();
        for child in node.children() {
            assert!(!child.is_root(), "root flag below the root");
            let first = child.label().chars().next().expect("non-empty label");
            assert!(
                firsts.insert(first),
                "siblings under {:?} share leading {first:?}",
                node.prefix()
            );
            assert_eq!(
                child.prefix(),
                format!("{}{}", node.prefix(), child.label()),
                "stale prefix cache"
            );
            stack.push(child);
        }
    }

    assert_eq!(word_count, t.len(), "word boundaries must match RadixTree::len");
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet forces shared prefixes and splits; 'é' exercises
    // multi-byte labels.
    "[abcé]{0,6}"
}

fn expected_suggestions(model: &BTreeSet<String>, prefix: &str) -> Vec<String> {
    model
        .range(prefix.to_owned()..)
        .take_while(|w| w.starts_with(prefix))
        .cloned()
        .collect()
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 3)]
    Contains(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 2)]
    Suggest(#[proptest(strategy = "word_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=300)) {
        let mut t = RadixTree::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let expected = !word.is_empty() && m.insert(word.clone());
                    prop_assert_eq!(t.insert(&word), expected);
                }
                Op::Contains(word) => {
                    prop_assert_eq!(t.contains(&word), m.contains(&word));
                }
                Op::Suggest(prefix) => {
                    let got = t.suggest(&prefix);
                    for w in &got {
                        prop_assert!(w.starts_with(prefix.as_str()));
                    }
                    prop_assert_eq!(sorted(got), expected_suggestions(&m, &prefix));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let all: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(sorted(t.iter().collect()), all);
    }

    #[test]
    fn prop_suggest_completeness(words in prop::collection::vec(word_strategy(), 0..60)) {
        let t: RadixTree = words.iter().collect();
        validate_tree(&t);

        for word in words.iter().filter(|w| !w.is_empty()) {
            for (end, _) in word.char_indices().skip(1).chain([(word.len(), ' ')]) {
                let prefix = &word[..end];
                prop_assert!(
                    t.suggest(prefix).contains(word),
                    "{:?} missing from suggestions for {:?}", word, prefix
                );
            }
        }
    }

    #[test]
    fn prop_batch_is_union_of_singles(
        words in prop::collection::vec(word_strategy(), 0..60),
        queries in prop::collection::vec(word_strategy(), 0..12)
    ) {
        let t: RadixTree = words.iter().collect();

        let mut expected: Vec<String> = queries.iter().flat_map(|q| t.suggest(q)).collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(t.suggest_batch(&queries), expected);
    }

    #[test]
    fn prop_insert_idempotent(words in prop::collection::vec(word_strategy(), 0..60)) {
        let once: RadixTree = words.iter().collect();
        let twice: RadixTree = words.iter().chain(words.iter()).collect();

        validate_tree(&twice);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.iter().collect::<Vec<_>>(), twice.iter().collect::<Vec<_>>());
        for q in ["", "a", "ab", "é", "cab"] {
            prop_assert_eq!(once.suggest(q), twice.suggest(q));
        }
    }
}

/// Visits every ordering of `words` by in-place swaps (Heap's algorithm).
fn visit_orderings<'a>(words: &[&'a str], mut visit: impl FnMut(&[&'a str])) {
    let mut order = words.to_vec();
    let mut counters = vec![0usize; order.len()];
    visit(&order);

    let mut k = 1;
    while k < order.len() {
        if counters[k] < k {
            let j = if k % 2 == 0 { 0 } else { counters[k] };
            order.swap(j, k);
            visit(&order);
            counters[k] += 1;
            k = 1;
        } else {
            counters[k] = 0;
            k += 1;
        }
    }
}

#[test]
fn exhaustive_insert_order_small_set() {
    let words = ["a", "ab", "abc", "b", "ba", "abd"];

    let mut seen = BTreeSet::new();
    visit_orderings(&words, |perm| {
        seen.insert(perm.to_vec());
        let t: RadixTree = perm.iter().collect();
        validate_tree(&t);

        assert_eq!(
            sorted(t.iter().collect()),
            ["a", "ab", "abc", "abd", "b", "ba"]
        );
        for w in words {
            assert!(t.contains(w), "{w:?} lost for order {perm:?}");
        }
        assert!(!t.contains("abe"));
        // a, b, b->a, a->b, ab->c, ab->d
        assert_eq!(t.node_count(), 7, "order {perm:?}");
        assert_eq!(sorted(t.suggest("ab")), ["ab", "abc", "abd"]);
    });
    assert_eq!(seen.len(), 720, "every insertion order visited once");
}

#[test]
fn randomized_against_model() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut t = RadixTree::new();
    let mut m: BTreeSet<String> = BTreeSet::new();

    for _ in 0..20_000 {
        let len = rng.gen_range(1..10);
        let word: String = (0..len).map(|_| rng.gen_range(b'a'..=b'e') as char).collect();

        if rng.gen_bool(0.6) {
            assert_eq!(t.insert(&word), m.insert(word.clone()));
        } else {
            assert_eq!(t.contains(&word), m.contains(&word), "contains({word:?})");
        }
    }

    validate_tree(&t);
    assert_eq!(t.len(), m.len());
    for prefix in ["a", "ab", "cde", "eeee"] {
        assert_eq!(sorted(t.suggest(prefix)), expected_suggestions(&m, prefix));
    }
}
