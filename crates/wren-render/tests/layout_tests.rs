//! Integration tests for closing, intrinsic widths and the layout driver.

use wren_render::{Invalidation, RenderId, RenderTree};
use wren_style::{DisplayType, ImageResource, RenderStyle, WhiteSpace, parse_declarations};

const EPSILON: f32 = 1e-3;

fn block_with_text(tree: &mut RenderTree, content: &str) -> (RenderId, RenderId) {
    let block = tree.create_object(RenderStyle::new(DisplayType::Block)).unwrap();
    let text = tree.create_text(RenderStyle::default(), content);
    tree.add_child(block, text, None);
    (block, text)
}

fn laid_out(log: &[Invalidation]) -> Vec<RenderId> {
    log.iter()
        .filter_map(|record| match record {
            Invalidation::LayoutDone(id) => Some(*id),
            _ => None,
        })
        .collect()
}

// ========== close ==========

#[test]
fn test_close_collapses_white_space() {
    let mut tree = RenderTree::default();
    let text = tree.create_text(RenderStyle::default(), "  hello \n\t world  ");
    tree.close(text);
    assert_eq!(tree[text].text(), Some(" hello world "));
    assert!(tree[text].is_closed());
    assert!(!tree.min_max_known(text));
}

#[test]
fn test_close_respects_pre() {
    let mut tree = RenderTree::default();
    let pre = parse_declarations("white-space: pre").unwrap();
    assert_eq!(pre.white_space, WhiteSpace::Pre);
    let text = tree.create_text(pre, "a  b\n c");
    tree.close(text);
    assert_eq!(tree[text].text(), Some("a  b\n c"));
}

#[test]
fn test_close_twice_is_a_no_op() {
    let mut tree = RenderTree::default();
    let text = tree.create_text(RenderStyle::default(), "x");
    tree.close(text);
    let _ = tree.take_invalidations();
    tree.close(text);
    assert!(tree.take_invalidations().is_empty());
}

#[test]
#[should_panic(expected = "open child")]
fn test_close_with_open_child_panics() {
    let mut tree = RenderTree::default();
    let (block, _) = block_with_text(&mut tree, "x");
    tree.close(block);
}

#[test]
fn test_close_image_adopts_intrinsic_size() {
    let mut tree = RenderTree::default();
    let sized = tree.create_image(
        RenderStyle::default(),
        Some(ImageResource::with_size("a.png", 32.0, 16.0)),
    );
    let unsized_image = tree.create_image(RenderStyle::default(), None);
    tree.close(sized);
    tree.close(unsized_image);

    let sized_data = match tree[sized].kind() {
        wren_render::RenderKind::Image(data) => data.intrinsic_size(),
        other => panic!("expected an image, got {other:?}"),
    };
    assert_eq!(sized_data, (32.0, 16.0));
    let unsized_data = match tree[unsized_image].kind() {
        wren_render::RenderKind::Image(data) => data.intrinsic_size(),
        other => panic!("expected an image, got {other:?}"),
    };
    assert_eq!(unsized_data, (0.0, 0.0));
}

#[test]
fn test_image_resource_can_be_bound_later() {
    let mut tree = RenderTree::default();
    let image = tree.create_image(RenderStyle::default(), None);
    tree.set_image_resource(image, ImageResource::with_size("b.png", 10.0, 5.0));
    tree.close(image);
    tree.calc_min_max_width(image);
    assert!((tree[image].min_max_width().max - 10.0).abs() < EPSILON);
}

#[test]
fn test_close_subtree_closes_bottom_up() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let (block, text) = block_with_text(&mut tree, "x");
    tree.add_child(root, block, None);

    tree.close_subtree(root);

    for id in [root, block, text] {
        assert!(tree[id].is_closed());
    }
}

// ========== min/max widths ==========

#[test]
fn test_text_min_max_uses_words_and_whole_run() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let (block, text) = block_with_text(&mut tree, "hello world");
    tree.add_child(root, block, None);
    tree.close_subtree(root);

    tree.calc_min_max_width(root);

    // 0.6 * 16px per character.
    let widths = tree[text].min_max_width();
    assert!((widths.min - 48.0).abs() < EPSILON);
    assert!((widths.max - 105.6).abs() < EPSILON);
    assert_eq!(tree[block].min_max_width(), widths);
    assert_eq!(tree[root].min_max_width(), widths);
    assert!(tree.min_max_known(root));
}

#[test]
fn test_inline_children_share_a_line() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let a = tree.create_text(RenderStyle::default(), "aaaa");
    let b = tree.create_text(RenderStyle::default(), "bb");
    let (block, _) = block_with_text(&mut tree, "cccccc");
    for id in [a, b, block] {
        tree.add_child(root, id, None);
    }

    tree.calc_min_max_width(root);

    let widths = tree[root].min_max_width();
    assert!((widths.min - 6.0 * 9.6).abs() < EPSILON);
    assert!((widths.max - 6.0 * 9.6).abs() < EPSILON);

    let inline_only = tree.create_object(RenderStyle::new(DisplayType::Block)).unwrap();
    let c = tree.create_text(RenderStyle::default(), "aaaa");
    let d = tree.create_text(RenderStyle::default(), "bbbbb");
    tree.add_child(inline_only, c, None);
    tree.add_child(inline_only, d, None);
    tree.calc_min_max_width(inline_only);
    let widths = tree[inline_only].min_max_width();
    assert!((widths.min - 5.0 * 9.6).abs() < EPSILON);
    assert!((widths.max - 9.0 * 9.6).abs() < EPSILON);
}

#[test]
fn test_min_max_respects_font_size() {
    let mut tree = RenderTree::default();
    let big = parse_declarations("font-size: 20px").unwrap();
    let text = tree.create_text(big, "abcde");
    tree.calc_min_max_width(text);
    assert!((tree[text].min_max_width().max - 60.0).abs() < EPSILON);
}

// ========== layout ==========

#[test]
fn test_layout_visits_children_in_order_and_clears_flags() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let (a, ta) = block_with_text(&mut tree, "a");
    let (b, tb) = block_with_text(&mut tree, "b");
    let (c, tc) = block_with_text(&mut tree, "c");
    for id in [a, b, c] {
        tree.add_child(root, id, None);
    }
    tree.close_subtree(root);
    let _ = tree.take_invalidations();

    tree.update_layout();

    let log = tree.take_invalidations();
    assert_eq!(laid_out(&log), vec![ta, a, tb, b, tc, c, root]);
    for id in [root, a, b, c, ta, tb, tc] {
        assert!(!tree.scheduler().self_or_child_needs_layout(id));
        assert!(tree.min_max_known(id));
    }
}

#[test]
fn test_relayout_only_touches_dirty_path() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let (a, _) = block_with_text(&mut tree, "a");
    let (b, _) = block_with_text(&mut tree, "b");
    tree.add_child(root, a, None);
    tree.add_child(root, b, None);
    tree.update_layout();

    let (d, td) = block_with_text(&mut tree, "d");
    tree.add_child(root, d, None);
    let _ = tree.take_invalidations();
    tree.update_layout();

    assert_eq!(laid_out(&tree.take_invalidations()), vec![td, d, root]);
}

#[test]
fn test_layout_if_needed_on_clean_object_does_nothing() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    tree.update_layout();
    let _ = tree.take_invalidations();

    tree.layout_if_needed(root);
    tree.update_layout();

    assert!(tree.take_invalidations().is_empty());
}

#[test]
#[should_panic(expected = "already laid out")]
fn test_layout_of_clean_object_panics() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    tree.update_layout();
    tree.layout(root);
}

#[test]
#[should_panic(expected = "stale")]
fn test_layout_with_stale_min_max_panics() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    tree.layout(root);
}

#[test]
fn test_layout_does_not_reach_grandchildren_directly() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let (outer, text) = block_with_text(&mut tree, "deep");
    tree.add_child(root, outer, None);
    tree.update_layout();

    tree.mark_needs_layout(text);
    tree.calc_min_max_width(root);
    let _ = tree.take_invalidations();
    tree.layout(root);

    assert_eq!(laid_out(&tree.take_invalidations()), vec![text, outer, root]);
}
