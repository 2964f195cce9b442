extern crate bincode;
extern crate rand;
extern crate red_black_collections;
extern crate serde_test;

use rand::Rng;
use red_black_collections::Color::{Black as B, Red as R};
use red_black_collections::{Color, NodeRef, RedBlackSet};
use serde_test::{assert_tokens, Token};
use std::collections::BTreeSet;

const VALUES: [u32; 11] = [13, 8, 17, 1, 11, 9, 15, 25, 6, 22, 27];

fn fixture() -> RedBlackSet<u32> {
    let mut set = RedBlackSet::new();
    set.add_range(VALUES.iter().cloned());
    set
}

// Pre-order walk that records every value with its color. A pre-order listing of a binary
// search tree determines its shape, so this is a complete fingerprint of the tree.
fn colored_preorder(set: &RedBlackSet<u32>) -> Vec<(u32, Color)> {
    fn walk(node: Option<NodeRef<'_, u32>>, out: &mut Vec<(u32, Color)>) {
        if let Some(node) = node {
            out.push((*node.value(), node.color()));
            walk(node.left(), out);
            walk(node.right(), out);
        }
    }
    let mut out = Vec::new();
    walk(set.root_node(), &mut out);
    out
}

// Returns the black height of `node`, panicking if a red black tree property or a parent link
// is broken.
fn black_height(node: Option<NodeRef<'_, u32>>) -> usize {
    let node = match node {
        None => return 0,
        Some(node) => node,
    };
    for child in node.left().iter().chain(node.right().iter()) {
        assert_eq!(child.parent().map(|parent| *parent.value()), Some(*node.value()));
        if node.is_red() {
            assert!(child.is_black(), "red node {} has a red child", node.value());
        }
    }
    let left = black_height(node.left());
    let right = black_height(node.right());
    assert_eq!(left, right, "uneven black height under {}", node.value());
    if node.is_black() {
        left + 1
    } else {
        left
    }
}

fn check_invariants(set: &RedBlackSet<u32>) {
    if let Some(root) = set.root_node() {
        assert!(root.is_root());
        assert!(root.is_black());
    }
    black_height(set.root_node());

    let values = set.inorder().cloned().collect::<Vec<u32>>();
    assert_eq!(values.len(), set.len());
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_fixture_shape() {
    let set = fixture();
    let root = set.root_node().unwrap();
    assert_eq!(*root.value(), 13);
    assert_eq!(root.color(), Color::Black);

    let left = root.left().unwrap();
    assert_eq!(*left.value(), 8);
    assert_eq!(left.color(), Color::Red);

    let left_left = left.left().unwrap();
    assert_eq!(*left_left.value(), 1);
    assert!(left_left.is_black());
    assert!(!left_left.is_leaf());

    let left_right = left.right().unwrap();
    assert_eq!(*left_right.value(), 11);
    assert!(left_right.is_black());
    assert!(!left_right.is_leaf());

    assert_eq!(
        colored_preorder(&set),
        vec![
            (13, B),
            (8, R),
            (1, B),
            (6, R),
            (11, B),
            (9, R),
            (17, R),
            (15, B),
            (25, B),
            (22, R),
            (27, R),
        ],
    );
}

#[test]
fn test_fixture_traversals() {
    let set = fixture();
    assert_eq!(
        set.level_order().cloned().collect::<Vec<u32>>(),
        vec![13, 8, 17, 1, 11, 15, 25, 6, 9, 22, 27],
    );
    assert_eq!(
        set.preorder().cloned().collect::<Vec<u32>>(),
        vec![13, 8, 1, 6, 11, 9, 17, 15, 25, 22, 27],
    );
    assert_eq!(
        set.postorder().cloned().collect::<Vec<u32>>(),
        vec![6, 1, 9, 11, 8, 15, 22, 27, 25, 17, 13],
    );
    assert_eq!(
        set.inorder().cloned().collect::<Vec<u32>>(),
        vec![1, 6, 8, 9, 11, 13, 15, 17, 22, 25, 27],
    );
}

#[test]
fn test_traversals_restart() {
    let set = fixture();
    let first = set.level_order().cloned().collect::<Vec<u32>>();
    let second = set.level_order().cloned().collect::<Vec<u32>>();
    assert_eq!(first, second);
    assert_eq!(set.inorder().count(), set.inorder().count());
}

#[test]
fn test_remove_each_fixture_value() {
    let expected: Vec<(u32, Vec<(u32, Color)>)> = vec![
        (1, vec![(13, B), (8, R), (6, B), (11, B), (9, R), (17, R), (15, B), (25, B), (22, R), (27, R)]),
        (6, vec![(13, B), (8, R), (1, B), (11, B), (9, R), (17, R), (15, B), (25, B), (22, R), (27, R)]),
        (8, vec![(13, B), (9, R), (1, B), (6, R), (11, B), (17, R), (15, B), (25, B), (22, R), (27, R)]),
        (9, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (17, R), (15, B), (25, B), (22, R), (27, R)]),
        (11, vec![(13, B), (8, R), (1, B), (6, R), (9, B), (17, R), (15, B), (25, B), (22, R), (27, R)]),
        (13, vec![(15, B), (8, R), (1, B), (6, R), (11, B), (9, R), (25, R), (17, B), (22, R), (27, B)]),
        (15, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (9, R), (25, R), (17, B), (22, R), (27, B)]),
        (17, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (9, R), (22, R), (15, B), (25, B), (27, R)]),
        (22, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (9, R), (17, R), (15, B), (25, B), (27, R)]),
        (25, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (9, R), (17, R), (15, B), (27, B), (22, R)]),
        (27, vec![(13, B), (8, R), (1, B), (6, R), (11, B), (9, R), (17, R), (15, B), (25, B), (22, R)]),
    ];

    for (value, shape) in expected {
        let mut set = fixture();
        assert!(set.remove(&value), "failed to remove {}", value);
        assert_eq!(set.len(), VALUES.len() - 1);

        let mut sorted = VALUES.to_vec();
        sorted.sort();
        sorted.retain(|other| *other != value);
        assert_eq!(set.inorder().cloned().collect::<Vec<u32>>(), sorted);
        assert_eq!(colored_preorder(&set), shape, "shape after removing {}", value);
        check_invariants(&set);
    }
}

#[test]
fn test_remove_sequence() {
    let mut set = fixture();
    let expected: Vec<(u32, Vec<(u32, Color)>)> = vec![
        (13, vec![(15, B), (8, R), (1, B), (6, R), (11, B), (9, R), (25, R), (17, B), (22, R), (27, B)]),
        (8, vec![(15, B), (9, R), (1, B), (6, R), (11, B), (25, R), (17, B), (22, R), (27, B)]),
        (17, vec![(15, B), (9, R), (1, B), (6, R), (11, B), (25, R), (22, B), (27, B)]),
        (1, vec![(15, B), (9, R), (6, B), (11, B), (25, R), (22, B), (27, B)]),
    ];
    for (value, shape) in expected {
        assert!(set.remove(&value));
        assert_eq!(colored_preorder(&set), shape, "shape after removing {}", value);
    }
}

#[test]
fn test_remove_all() {
    let mut set = fixture();
    for value in VALUES.iter() {
        assert!(set.remove(value));
        check_invariants(&set);
    }
    assert!(set.is_empty());
    assert!(set.root_node().is_none());
    assert!(!set.remove(&13));
}

#[test]
fn test_duplicate_insert_keeps_shape() {
    let mut set = fixture();
    let shape = colored_preorder(&set);
    for value in VALUES.iter() {
        assert!(!set.insert(*value));
    }
    assert_eq!(set.len(), VALUES.len());
    assert_eq!(colored_preorder(&set), shape);
}

#[test]
fn test_empty_boundary() {
    let mut set: RedBlackSet<u32> = RedBlackSet::new();
    assert!(set.min_value().is_err());
    assert_eq!(
        set.max_value().unwrap_err().to_string(),
        "maximum value cannot be determined for an empty tree",
    );
    assert!(!set.remove(&1));
    assert_eq!(set.inorder().next(), None);
    assert_eq!(set.level_order().next(), None);
}

#[test]
fn test_copy_to_round_trip() {
    let set = fixture();
    let mut dest = vec![0; set.len()];
    set.copy_to(&mut dest, 0).unwrap();
    assert_eq!(dest, set.inorder().cloned().collect::<Vec<u32>>());
}

#[test]
fn test_clear() {
    let mut set = fixture();
    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.root_node().is_none());
    assert_eq!(set.inorder().count(), 0);

    set.add_range(VALUES.iter().cloned());
    assert_eq!(colored_preorder(&set), colored_preorder(&fixture()));
}

#[test]
fn test_add_range_ascending() {
    let mut set = RedBlackSet::new();
    set.add_range(0..10_000u32);
    assert_eq!(set.len(), 10_000);
    check_invariants(&set);
}

#[test]
fn test_add_range_descending() {
    let mut set = RedBlackSet::new();
    set.add_range((0..10_000u32).rev());
    assert_eq!(set.len(), 10_000);
    check_invariants(&set);
}

#[test]
fn test_add_range_shuffled() {
    let mut rng = rand::thread_rng();
    let mut values = (0..10_000u32).collect::<Vec<u32>>();
    rng.shuffle(&mut values);

    let mut set = RedBlackSet::new();
    set.add_range(values);
    assert_eq!(set.len(), 10_000);
    assert_eq!(set.min(), Some(&0));
    assert_eq!(set.max(), Some(&9_999));
    check_invariants(&set);
}

#[test]
fn test_random_operations() {
    let mut rng = rand::thread_rng();
    let mut set = RedBlackSet::with_chunk_size(16);
    let mut expected = BTreeSet::new();

    for _ in 0..5_000 {
        let value = rng.gen_range(0, 500u32);
        if rng.gen::<bool>() {
            assert_eq!(set.insert(value), expected.insert(value));
        } else {
            assert_eq!(set.remove(&value), expected.remove(&value));
        }
        assert_eq!(set.len(), expected.len());
        assert_eq!(set.contains(&value), expected.contains(&value));
    }

    check_invariants(&set);
    assert_eq!(
        set.inorder().cloned().collect::<Vec<u32>>(),
        expected.iter().cloned().collect::<Vec<u32>>(),
    );
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());
}

#[test]
fn test_random_removal_keeps_invariants() {
    let mut rng = rand::thread_rng();
    let mut values = (0..1_000u32).collect::<Vec<u32>>();
    rng.shuffle(&mut values);
    let mut set = values.iter().cloned().collect::<RedBlackSet<u32>>();

    rng.shuffle(&mut values);
    for (removed, value) in values.iter().enumerate() {
        assert!(set.remove(value));
        assert_eq!(set.len(), values.len() - removed - 1);
        if removed % 50 == 0 {
            check_invariants(&set);
        }
    }
    assert!(set.is_empty());
}

#[test]
fn test_serde_tokens() {
    let mut set = RedBlackSet::new();
    set.add_range(vec![3u32, 1, 2]);
    assert_tokens(
        &set,
        &[
            Token::Seq { len: Some(3) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_bincode_round_trip() {
    let set = fixture();
    let bytes = bincode::serialize(&set).unwrap();
    let decoded: RedBlackSet<u32> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, set);
    check_invariants(&decoded);
}
