//! Integration tests for leftover anonymous block pruning.

use wren_render::{RenderId, RenderTree};
use wren_style::{DisplayType, RenderStyle, parse_declarations};

fn block(tree: &mut RenderTree) -> RenderId {
    tree.create_object(RenderStyle::new(DisplayType::Block))
        .unwrap()
}

fn children(tree: &RenderTree, id: RenderId) -> Vec<RenderId> {
    tree.children(id).collect()
}

#[test]
fn test_anonymous_block_is_flattened_in_place() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let a = block(&mut tree);
    let x = tree.create_anonymous_block(root);
    let p = block(&mut tree);
    let q = block(&mut tree);
    let d = block(&mut tree);
    tree.add_child(root, a, None);
    tree.add_child(root, x, None);
    tree.add_child(x, p, None);
    tree.add_child(x, q, None);
    tree.add_child(root, d, None);

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(children(&tree, root), vec![a, p, q, d]);
    assert_eq!(tree.parent(p), Some(root));
    assert_eq!(tree.parent(q), Some(root));
    assert_eq!(tree.previous_sibling(p), Some(a));
    assert_eq!(tree.next_sibling(q), Some(d));
    assert!(!tree.contains(x));
    assert_eq!(tree.verify(root), Ok(5));
}

#[test]
fn test_only_child_anonymous_block_fixes_both_ends() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let x = tree.create_anonymous_block(root);
    let p = block(&mut tree);
    let q = block(&mut tree);
    tree.add_child(root, x, None);
    tree.add_child(x, p, None);
    tree.add_child(x, q, None);

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(tree.first_child(root), Some(p));
    assert_eq!(tree.last_child(root), Some(q));
    assert_eq!(tree.previous_sibling(p), None);
    assert_eq!(tree.next_sibling(q), None);
}

#[test]
fn test_empty_anonymous_block_is_removed() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let a = block(&mut tree);
    let x = tree.create_anonymous_block(root);
    let d = block(&mut tree);
    for id in [a, x, d] {
        tree.add_child(root, id, None);
    }

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(children(&tree, root), vec![a, d]);
    assert!(!tree.contains(x));
}

#[test]
fn test_anonymous_block_with_inline_content_stays() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let x = tree.create_anonymous_block(root);
    let text = tree.create_text(RenderStyle::default(), "inline");
    tree.add_child(root, x, None);
    tree.add_child(x, text, None);

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(children(&tree, root), vec![x]);
    assert!(!tree.is_leftover_anonymous_box(x));
}

#[test]
fn test_anonymous_block_with_continuation_stays() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let x = tree.create_anonymous_block(root);
    let next = block(&mut tree);
    tree.add_child(root, x, None);
    tree.add_child(root, next, None);
    tree.set_continuation(x, Some(next));

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(children(&tree, root), vec![x, next]);
}

#[test]
fn test_anonymous_table_cell_is_never_pruned() {
    let mut tree = RenderTree::default();
    let row = tree.create_object(RenderStyle::new(DisplayType::TableRow)).unwrap();
    let inner = block(&mut tree);
    tree.add_child(row, inner, None);
    let cell = tree.parent(inner).unwrap();
    assert!(tree[cell].is_anonymous());

    tree.remove_leftover_anonymous_boxes(row);

    assert_eq!(children(&tree, row), vec![cell]);
    assert!(!tree.is_leftover_anonymous_box(cell));
}

#[test]
fn test_named_blocks_are_untouched() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let a = block(&mut tree);
    tree.add_child(root, a, None);

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(children(&tree, root), vec![a]);
}

#[test]
fn test_cleanup_continues_toward_the_root() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let leftover = tree.create_anonymous_block(root);
    let nested = block(&mut tree);
    tree.add_child(root, leftover, None);
    tree.add_child(root, nested, None);

    tree.remove_leftover_anonymous_boxes(nested);

    assert_eq!(children(&tree, root), vec![nested]);
    assert!(!tree.contains(leftover));
}

#[test]
fn test_flattening_dirties_container() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let x = tree.create_anonymous_block(root);
    let p = block(&mut tree);
    tree.add_child(root, x, None);
    tree.add_child(x, p, None);
    tree.update_layout();

    tree.remove_leftover_anonymous_boxes(root);

    assert!(tree.needs_layout(root));
    assert!(!tree.min_max_known(root));
}

#[test]
fn test_flattened_children_keep_their_layers() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let x = tree.create_anonymous_block(root);
    let positioned = tree
        .create_object(parse_declarations("display: block; position: relative").unwrap())
        .unwrap();
    tree.add_child(root, x, None);
    tree.add_child(x, positioned, None);
    assert!(tree[x].layer().is_none());
    let layer = tree[positioned].layer().unwrap();
    let root_layer = tree[root].layer().unwrap();
    let layers_before = tree.layers().len();

    tree.remove_leftover_anonymous_boxes(root);

    assert_eq!(tree.parent(positioned), Some(root));
    assert_eq!(tree[positioned].layer(), Some(layer));
    assert_eq!(tree.layers().get(layer).unwrap().parent(), Some(root_layer));
    assert_eq!(tree.layers().len(), layers_before);
}
