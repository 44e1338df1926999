//! Tests for structure modification of forest.

use sylva::{ChildCursor, Cursor, Forest, TreeBuilder};

/// Positions of the nodes of the sample forest, indexed by their values.
type Positions = [ChildCursor; 11];

/// Returns the sample forest and the positions of all nodes.
///
/// ```text
/// 0
/// |-- 1
/// |-- 2
/// |-- 3
/// |   `-- 5
/// |       |-- 6
/// |       `-- 7
/// `-- 4
/// 8
/// |-- 9
/// `-- 10
/// ```
fn sample_forest() -> (Forest<i32>, Positions) {
    let mut forest = Forest::new();
    let mut it = [forest.child_end(); 11];

    it[0] = forest.insert(forest.child_begin(), 0);
    it[8] = forest.insert(forest.child_end(), 8);
    for value in 1..=4 {
        it[value] = forest.insert(it[0].child_end(), value as i32);
    }
    it[5] = forest.insert(it[3].child_end(), 5);
    it[6] = forest.insert(it[5].child_end(), 6);
    it[7] = forest.insert(it[5].child_end(), 7);
    it[9] = forest.insert(it[8].child_end(), 9);
    it[10] = forest.insert(it[8].child_end(), 10);

    (forest, it)
}

/// Returns the values in pre-order.
fn preorder(forest: &Forest<i32>) -> Vec<i32> {
    forest.iter().map(|node| *node.data()).collect()
}

#[test]
fn erase_leaves() {
    let (mut forest, it) = sample_forest();

    assert_eq!(forest.erase(it[6]), it[7]);
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 7, 4, 8, 9, 10]);

    assert_eq!(forest.erase(it[7]), it[5].child_end());
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 4, 8, 9, 10]);

    assert_eq!(forest.erase(it[10]), it[8].child_end());
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 4, 8, 9]);

    assert_eq!(forest.erase(it[9]), it[8].child_end());
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 4, 8]);

    assert_eq!(forest.erase(it[8]), forest.child_end());
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 4]);
}

#[test]
fn erase_subtrees() {
    let (mut forest, it) = sample_forest();

    assert_eq!(forest.erase(it[3]), it[4]);
    assert_eq!(preorder(&forest), [0, 1, 2, 4, 8, 9, 10]);

    assert_eq!(forest.erase(it[8]), forest.child_end());
    assert_eq!(preorder(&forest), [0, 1, 2, 4]);

    assert_eq!(forest.erase(it[0]), forest.child_end());
    assert_eq!(preorder(&forest), []);
    assert!(forest.is_empty());
}

#[test]
fn erase_invalidates_only_the_subtree() {
    let (mut forest, it) = sample_forest();

    forest.erase(it[3]);

    for value in [3, 5, 6, 7] {
        let id = it[value].node().expect("node");
        assert!(!forest.is_alive(id), "node {} should be erased", value);
        assert!(forest.get(it[value]).is_none());
    }
    for value in [0, 1, 2, 4, 8, 9, 10] {
        assert_eq!(forest[it[value]], value as i32);
    }
}

#[test]
fn erase_range() {
    let (mut forest, it) = sample_forest();

    assert_eq!(forest.erase_range(it[1], it[4]), it[4]);
    assert_eq!(preorder(&forest), [0, 4, 8, 9, 10]);

    assert_eq!(forest.erase_range(it[4], it[0].child_end()), it[0].child_end());
    assert_eq!(preorder(&forest), [0, 8, 9, 10]);

    // An empty range is a no-op.
    assert_eq!(forest.erase_range(it[9], it[9]), it[9]);
    assert_eq!(preorder(&forest), [0, 8, 9, 10]);
}

#[test]
#[should_panic]
fn erase_end_position() {
    let (mut forest, _) = sample_forest();
    forest.erase(forest.child_end());
}

#[test]
fn erased_slots_are_reused() {
    let (mut forest, it) = sample_forest();

    forest.erase(it[3]);
    let new = forest.insert(it[4], 30);

    assert_eq!(preorder(&forest), [0, 1, 2, 30, 4, 8, 9, 10]);
    // The new node takes one of the freed slots.
    let erased = [3, 5, 6, 7].map(|value| it[value].node().expect("node"));
    assert!(erased.contains(&new.node().expect("node")));
}

#[test]
fn move_subtree() {
    let (mut forest, it) = sample_forest();

    let new_pos = forest.move_subtree(it[3], it[9]);
    assert_eq!(new_pos, it[8].child_begin(&forest));
    assert_eq!(preorder(&forest), [0, 1, 2, 4, 8, 3, 5, 6, 7, 9, 10]);

    let new_pos = forest.move_subtree(it[0], it[8].child_end());
    let mut last = it[8].child_end();
    last.retreat(&forest);
    assert_eq!(new_pos, last);
    assert_eq!(preorder(&forest), [8, 3, 5, 6, 7, 9, 10, 0, 1, 2, 4]);
}

#[test]
fn move_keeps_cursors_and_shape() {
    let (mut forest, it) = sample_forest();
    let len = forest.len();

    forest
        .try_move(it[5], forest.child_begin())
        .expect("moving to the toplevel should succeed");

    // Cursors to the moved nodes follow them.
    assert_eq!(it[5].parent(&forest), forest.parent_end());
    assert_eq!(it[6].parent(&forest), it[5]);
    assert_eq!(forest[it[7]], 7);

    let moved = forest.subtree(it[5]).map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(moved, [5, 6, 7]);
    assert_eq!(forest.len(), len);
    assert_eq!(preorder(&forest), [5, 6, 7, 0, 1, 2, 3, 4, 8, 9, 10]);
    assert_eq!(forest.children(it[3]).count(), 0);
}

#[test]
fn move_within_the_same_chain() {
    let (mut forest, it) = sample_forest();

    // Before the next sibling: the order does not change.
    forest.move_subtree(it[1], it[2]);
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10]);

    forest.move_subtree(it[1], it[0].child_end());
    assert_eq!(preorder(&forest), [0, 2, 3, 5, 6, 7, 4, 1, 8, 9, 10]);

    forest.move_subtree(it[4], it[2]);
    let children = forest.children(it[0]).map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(children, [4, 2, 3, 1]);
}

#[test]
fn clone_is_deep() {
    let mut forest = Forest::new();
    let it0 = forest.insert(forest.child_begin(), 0);
    for value in [1, 2, 3, 4, 8] {
        forest.insert(it0.child_end(), value);
    }
    let mut it3 = it0.child_begin(&forest);
    it3.advance(&forest);
    it3.advance(&forest);
    let it5 = forest.insert(it3.child_end(), 5);
    forest.insert(it5.child_end(), 6);
    forest.insert(it5.child_end(), 7);
    let mut it8 = it0.child_end();
    it8.retreat(&forest);
    forest.insert(it8.child_end(), 9);
    forest.insert(it8.child_end(), 10);

    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10]);

    let cloned = forest.clone();
    assert_eq!(preorder(&cloned), [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10]);

    let tail = |forest: &Forest<i32>| forest.tail_iter().map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(tail(&cloned), tail(&forest));
    assert_eq!(cloned.depth(), forest.depth());
}

#[test]
fn clone_is_independent() {
    let (mut forest, it) = sample_forest();
    let mut cloned = forest.clone();

    // Mutating the clone does not affect the source.
    let c0 = cloned.child_begin();
    let c3 = cloned
        .children(c0)
        .find(|node| *node.data() == 3)
        .expect("cloned 3 exists")
        .cursor();
    cloned.erase(c3);
    cloned.insert(cloned.child_end(), 11);
    cloned[c0] = 100;

    assert_eq!(preorder(&cloned), [100, 1, 2, 4, 8, 9, 10, 11]);
    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10]);

    // And vice versa.
    forest.move_subtree(it[8], it[0]);
    forest[it[9]] = 90;
    assert_eq!(preorder(&forest), [8, 90, 10, 0, 1, 2, 3, 5, 6, 7, 4]);
    assert_eq!(preorder(&cloned), [100, 1, 2, 4, 8, 9, 10, 11]);
}

#[test]
fn clone_from_replaces_contents() {
    let (source, _) = sample_forest();

    let mut target = Forest::new();
    let old = target.insert(target.child_end(), -1);
    target.insert(old.child_end(), -2);

    target.clone_from(&source);
    assert_eq!(preorder(&target), preorder(&source));
    assert_eq!(target.len(), 11);
}

#[test]
fn clear() {
    let (mut forest, it) = sample_forest();

    forest.clear();
    assert!(forest.is_empty());
    assert_eq!(forest.len(), 0);
    assert!(!forest.is_alive(it[0].node().expect("node")));

    forest.insert(forest.child_end(), 42);
    assert_eq!(preorder(&forest), [42]);
}

#[test]
fn erase_drops_every_value_once() {
    use std::rc::Rc;

    let counter = Rc::new(());
    let mut forest = Forest::new();
    let root = forest.insert(forest.child_end(), Rc::clone(&counter));
    let child = forest.insert(root.child_end(), Rc::clone(&counter));
    forest.insert(child.child_end(), Rc::clone(&counter));
    forest.insert(root.child_end(), Rc::clone(&counter));
    assert_eq!(Rc::strong_count(&counter), 5);

    forest.erase(child);
    assert_eq!(Rc::strong_count(&counter), 3);

    drop(forest);
    assert_eq!(Rc::strong_count(&counter), 1);
}

#[test]
fn builder() {
    let mut forest = Forest::new();
    let root = {
        let mut builder = TreeBuilder::new(&mut forest, 0);
        builder
            .child(1)
            .sibling(2)
            .sibling(3)
            .child(5)
            .child(6)
            .sibling(7)
            .parent()
            .parent()
            .sibling(4);
        assert_eq!(builder.forest().len(), 8);
        assert!(builder.try_parent().is_some());
        assert!(builder.try_parent().is_none());
        assert_eq!(builder.current(), builder.root());
        builder.root()
    };
    TreeBuilder::new(&mut forest, 8).child(9).sibling(10);

    assert_eq!(preorder(&forest), [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10]);
    assert_eq!(root, forest.child_begin());
}

#[test]
fn builder_sibling_of_root_is_toplevel() {
    let mut forest = Forest::new();
    let mut builder = TreeBuilder::new(&mut forest, 0);
    builder.child(1).parent().sibling(2).child(3);
    let second_root = builder.parent().current();
    assert_ne!(second_root, builder.root());
    assert!(builder.try_parent().is_none());

    let toplevel = forest.toplevel().map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(toplevel, [0, 2]);
    assert_eq!(preorder(&forest), [0, 1, 2, 3]);
    assert_eq!(second_root.parent(&forest), forest.parent_end());
}

#[test]
#[should_panic]
fn builder_parent_of_toplevel() {
    let mut forest = Forest::new();
    TreeBuilder::new(&mut forest, 0).parent();
}
