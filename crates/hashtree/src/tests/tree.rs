use claims::{assert_err_eq, assert_none, assert_ok, assert_some_eq};
use rand::seq::SliceRandom;
use rand::thread_rng;

use super::*;
use crate::digest::digest;

fn ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("id{i}")).collect()
}

// ============================================================
// Construction
// ============================================================

#[test]
fn test_build_empty_input_fails() {
    assert_err_eq!(Tree::build(Vec::<String>::new()), TreeError::InvalidInput);
    assert_err_eq!(
        Tree::<u8>::build_with_payloads(Vec::new()),
        TreeError::InvalidInput
    );
}

#[test]
fn test_build_single_leaf_is_root() {
    let tree = assert_ok!(Tree::build(["a"]));
    let root = tree.root().unwrap();

    assert!(root.is_leaf());
    assert_eq!(root.hash(), "a");
    assert_some_eq!(tree.root_hash(), "a");
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn test_build_two_leaves() {
    let tree = Tree::build(["a", "b"]).unwrap();
    let root = tree.root().unwrap();

    assert_eq!(root.hash(), digest("a", "b"));
    assert_eq!(root.left().unwrap().hash(), "a");
    assert_eq!(root.right().unwrap().hash(), "b");
    assert!(root.left().unwrap().is_leaf());
    assert!(root.right().unwrap().is_leaf());
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_build_end_to_end_example() {
    let tree = Tree::build(["f1", "f2", "f3", "f4"]).unwrap();
    let root = tree.root().unwrap();
    let (left, right) = root.children().unwrap();

    let h1 = "813ea375fb2626d0103204351b9c6f703211991a753466042aa3c6ebc0e8b443";
    let h2 = "8862d46b8c837e8651bbb91e5684543a3f6fba97bc005c0bb4dcdb31f1e98a90";

    assert_eq!(left.hash(), h1);
    assert_eq!(right.hash(), h2);
    assert_eq!(h1, digest("f1", "f2"));
    assert_eq!(h2, digest("f3", "f4"));
    assert_eq!(
        root.hash(),
        "f191d5e79c8a84b63dcfab73b795b35b55251cb996bc5ac9acde93d5d5afee10"
    );
    assert_eq!(root.hash(), digest(h1, h2));

    let leaves: Vec<_> = [left, right]
        .into_iter()
        .flat_map(|n| [n.left().unwrap().hash(), n.right().unwrap().hash()])
        .collect();
    assert_eq!(leaves, ["f1", "f2", "f3", "f4"]);
}

#[test]
fn test_build_duplicates_last_identifier_on_odd_count() {
    let odd = Tree::build(["a", "b", "c"]).unwrap();
    let even = Tree::build(["a", "b", "c", "c"]).unwrap();

    assert_eq!(odd.root_hash(), even.root_hash());

    let (_, right) = odd.root().unwrap().children().unwrap();
    assert_eq!(right.hash(), digest("c", "c"));
    assert_eq!(right.left().unwrap().hash(), "c");
    assert_eq!(right.right().unwrap().hash(), "c");

    // Entries still reflect what the caller supplied.
    assert_eq!(odd.leaf_count(), 3);
}

#[test]
fn test_build_pairs_odd_internal_level_with_itself() {
    // 5 ids -> 6 leaves -> 3 internal nodes, the third paired with itself.
    let tree = Tree::build(["a", "b", "c", "d", "e"]).unwrap();

    let ab = digest("a", "b");
    let cd = digest("c", "d");
    let ee = digest("e", "e");
    let abcd = digest(&ab, &cd);
    let eeee = digest(&ee, &ee);

    assert_some_eq!(tree.root_hash(), digest(&abcd, &eeee).as_str());
    assert_eq!(tree.height(), 4);

    let (_, right) = tree.root().unwrap().children().unwrap();
    let (copy_left, copy_right) = right.children().unwrap();
    assert_eq!(copy_left, copy_right);
}

#[test]
fn test_identifier_and_node_duplication_are_distinct_rules() {
    // Node-level duplication repeats a whole subtree, which is not the same
    // as repeating the last identifier once more.
    let five = Tree::build(["a", "b", "c", "d", "e"]).unwrap();
    let six = Tree::build(["a", "b", "c", "d", "e", "e"]).unwrap();
    let eight = Tree::build(["a", "b", "c", "d", "e", "e", "e", "e"]).unwrap();

    assert_eq!(five.root_hash(), six.root_hash());
    assert_eq!(five.root_hash(), eight.root_hash());

    let seven = Tree::build(["a", "b", "c", "d", "e", "e", "e"]).unwrap();
    assert_eq!(seven.root_hash(), eight.root_hash());
}

#[test]
fn test_every_internal_hash_is_digest_of_children() {
    for count in 1..=33 {
        let tree = Tree::build(ids(count)).unwrap();
        let mut pending = vec![tree.root().unwrap()];

        while let Some(node) = pending.pop() {
            if let Some((left, right)) = node.children() {
                assert_eq!(node.hash(), digest(left.hash(), right.hash()));
                assert_eq!(left.height(), right.height(), "levels must be complete");
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    for count in [1, 2, 3, 7, 16, 100] {
        let first = Tree::build(ids(count)).unwrap();
        let second = Tree::build(ids(count)).unwrap();

        assert_eq!(first.root_hash(), second.root_hash());
    }
}

#[test]
fn test_build_is_order_sensitive() {
    let mut rng = thread_rng();
    let original = ids(16);
    let tree = Tree::build(original.clone()).unwrap();

    for _ in 0..20 {
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut rng);

        let shuffled_tree = Tree::build(shuffled.clone()).unwrap();
        if shuffled == original {
            assert_eq!(tree.root_hash(), shuffled_tree.root_hash());
        } else {
            assert_ne!(tree.root_hash(), shuffled_tree.root_hash());
        }
    }

    let swapped = Tree::build(["b", "a"]).unwrap();
    let straight = Tree::build(["a", "b"]).unwrap();
    assert_ne!(swapped.root_hash(), straight.root_hash());
}

#[test]
fn test_height_and_node_count() {
    let cases = [
        // (ids, height, nodes)
        (2, 2, 3),
        (3, 3, 7),
        (4, 3, 7),
        (5, 4, 15),
        (8, 4, 15),
        (9, 5, 31),
    ];

    for (count, height, nodes) in cases {
        let tree = Tree::build(ids(count)).unwrap();
        assert_eq!(tree.height(), height, "height for {count} ids");
        assert_eq!(tree.node_count(), nodes, "node count for {count} ids");
    }
}

#[test]
fn test_large_input_builds_without_recursion() {
    let tree = Tree::build(ids(10_000)).unwrap();

    assert_eq!(tree.leaf_count(), 10_000);
    assert_eq!(tree.height(), 15);
}

// ============================================================
// Entries and payloads
// ============================================================

#[test]
fn test_payloads_are_retained_in_order() {
    let tree = Tree::build_with_payloads([
        ("h1".to_owned(), "docs/a.txt"),
        ("h2".to_owned(), "docs/b.txt"),
        ("h1".to_owned(), "docs/copy-of-a.txt"),
    ])
    .unwrap();

    let ids: Vec<_> = tree.identifiers().collect();
    assert_eq!(ids, ["h1", "h2", "h1"]);
    assert_eq!(tree.entries()[2].1, "docs/copy-of-a.txt");
    assert_some_eq!(tree.payload("h1"), &"docs/a.txt");
    assert_some_eq!(tree.payload("h2"), &"docs/b.txt");
    assert_none!(tree.payload("h3"));
}

#[test]
fn test_payloads_do_not_affect_hashing() {
    let plain = Tree::build(["h1", "h2"]).unwrap();
    let with_payloads =
        Tree::build_with_payloads([("h1".to_owned(), 1_u32), ("h2".to_owned(), 2_u32)]).unwrap();

    assert_eq!(plain.root_hash(), with_payloads.root_hash());
}

#[test]
fn test_empty_tree() {
    let tree = Tree::<()>::empty();

    assert!(tree.is_empty());
    assert_none!(tree.root());
    assert_none!(tree.root_hash());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.leaf_count(), 0);
    assert!(Tree::<String>::default().is_empty());
}

#[test]
fn test_node_display_is_hash() {
    let node = Node::internal(Node::leaf("a"), Node::leaf("b"));

    assert_eq!(node.to_string(), digest("a", "b"));
    assert_eq!(Node::leaf("x").to_string(), "x");
}

#[test]
fn test_trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tree>();
    assert_send_sync::<Tree<String>>();
    assert_send_sync::<Node>();

    let tree = Tree::build(ids(64)).unwrap();
    let other = Tree::build(ids(64)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| tree.compare(&other).map(|m| m.len())))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(0));
        }
    });
}
