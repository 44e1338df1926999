//! Tests to ensure forests prevent users from making cyclic links.

use sylva::{ChildCursor, Cursor, Forest, StructureError};

/// Returns a forest `root(0(0-0(0-0-0)), 1)` and the positions of its nodes.
fn sample_forest() -> (Forest<&'static str>, [ChildCursor; 5]) {
    let mut forest = Forest::new();
    let root = forest.insert(forest.child_end(), "root");
    let child0 = forest.insert(root.child_end(), "0");
    let child1 = forest.insert(root.child_end(), "1");
    let child00 = forest.insert(child0.child_end(), "0-0");
    let child000 = forest.insert(child00.child_end(), "0-0-0");
    (forest, [root, child0, child1, child00, child000])
}

/// Returns the enter/leave walk of the whole forest.
fn snapshot(forest: &Forest<&'static str>) -> Vec<(&'static str, bool)> {
    forest
        .composition_iter()
        .with_cursors()
        .map(|(cursor, node)| (*node.data(), cursor.state() == Some(sylva::TraversalState::Enter)))
        .collect()
}

/// Asserts the move is rejected and the forest is untouched.
fn assert_rejected(forest: &mut Forest<&'static str>, subtree: ChildCursor, pos: ChildCursor) {
    let before = snapshot(forest);

    assert_eq!(
        forest.try_move(subtree, pos),
        Err(StructureError::AncestorDescendantLoop)
    );
    assert_eq!(snapshot(forest), before);

    assert_eq!(forest.move_subtree(subtree, pos), subtree);
    assert_eq!(snapshot(forest), before);
}

/// Move a node before itself.
#[test]
fn before_itself() {
    let (mut forest, [root, child0, ..]) = sample_forest();
    assert_rejected(&mut forest, root, root);
    assert_rejected(&mut forest, child0, child0);
}

/// Move a node to the end of its own children.
#[test]
fn own_child_end() {
    let (mut forest, [root, child0, _, _, child000]) = sample_forest();
    assert_rejected(&mut forest, root, root.child_end());
    assert_rejected(&mut forest, child0, child0.child_end());
    // Even without any children.
    assert_rejected(&mut forest, child000, child000.child_end());
}

/// Move a node before its child.
#[test]
fn before_child() {
    let (mut forest, [root, child0, child1, child00, _]) = sample_forest();
    assert_rejected(&mut forest, root, child0);
    assert_rejected(&mut forest, root, child1);
    assert_rejected(&mut forest, child0, child00);
}

/// Move a node before its grandchild, or below it.
#[test]
fn into_descendants() {
    let (mut forest, [root, child0, _, child00, child000]) = sample_forest();
    assert_rejected(&mut forest, root, child00);
    assert_rejected(&mut forest, root, child000);
    assert_rejected(&mut forest, child0, child000);
    assert_rejected(&mut forest, child0, child000.child_end());
    assert_rejected(&mut forest, root, child00.child_end());
}

/// Moving a descendant up is not a cycle.
#[test]
fn descendant_to_ancestor_position() {
    let (mut forest, [root, child0, _, _, child000]) = sample_forest();

    let moved = forest
        .try_move(child000, child0)
        .expect("moving a node out of its ancestors should succeed");
    assert_eq!(moved, child000);
    assert_eq!(child000.parent(&forest), root);

    let toplevel = forest.try_move(child0, forest.child_begin());
    assert_eq!(toplevel, Ok(child0));
    assert_eq!(child0.parent(&forest), forest.parent_end());

    let preorder = forest.iter().map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(preorder, ["0", "0-0", "root", "0-0-0", "1"]);
}

/// Moving next to the node itself is not a cycle.
#[test]
fn sibling_positions() {
    let (mut forest, [root, child0, child1, ..]) = sample_forest();

    forest
        .try_move(child1, child0)
        .expect("moving before a sibling should succeed");
    forest
        .try_move(child0, root.child_begin(&forest))
        .expect("moving before a sibling should succeed");

    let children = forest.children(root).map(|node| *node.data()).collect::<Vec<_>>();
    assert_eq!(children, ["0", "1"]);
}

/// The error describes the rejected operation.
#[test]
fn error_message() {
    let message = StructureError::AncestorDescendantLoop.to_string();
    assert_eq!(message, "attempt to make a node the ancestor of itself");
}
