//! Integration tests for `::before` / `::after` content expansion.

use std::rc::Rc;

use wren_render::{RenderId, RenderKind, RenderTree};
use wren_style::{DisplayType, PseudoId, RenderStyle, parse_declarations};

/// A style with `display` and the given pseudo-element declarations.
fn style_with(display: &str, before: Option<&str>, after: Option<&str>) -> Rc<RenderStyle> {
    let mut style = parse_declarations(&format!("display: {display}")).unwrap();
    if let Some(before) = before {
        style.set_pseudo_style(PseudoId::Before, parse_declarations(before).unwrap());
    }
    if let Some(after) = after {
        style.set_pseudo_style(PseudoId::After, parse_declarations(after).unwrap());
    }
    Rc::new(style)
}

fn children(tree: &RenderTree, id: RenderId) -> Vec<RenderId> {
    tree.children(id).collect()
}

fn text_of_wrapper(tree: &RenderTree, wrapper: RenderId) -> Option<String> {
    let text = tree.first_child(wrapper)?;
    tree[text].text().map(str::to_string)
}

#[test]
fn test_before_goes_first_and_after_goes_last() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "<<""#),
            Some(r#"content: ">>""#),
        ))
        .unwrap();
    let body = tree.create_text(RenderStyle::default(), "body");
    tree.add_child(element, body, None);

    tree.update_pseudo_children(element);

    let kids = children(&tree, element);
    assert_eq!(kids.len(), 3);
    assert_eq!(text_of_wrapper(&tree, kids[0]).as_deref(), Some("<<"));
    assert_eq!(kids[1], body);
    assert_eq!(text_of_wrapper(&tree, kids[2]).as_deref(), Some(">>"));
    assert_eq!(tree[kids[0]].style().style_type, PseudoId::Before);
    assert_eq!(tree[kids[2]].style().style_type, PseudoId::After);
}

#[test]
fn test_expansion_is_idempotent() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "a""#),
            Some(r#"content: "z""#),
        ))
        .unwrap();
    let body = tree.create_text(RenderStyle::default(), "body");
    tree.add_child(element, body, None);

    tree.update_pseudo_children(element);
    let once = children(&tree, element);
    tree.update_pseudo_children(element);
    let first = tree.first_child(element);
    tree.insert_pseudo_child(element, PseudoId::Before, first);

    assert_eq!(children(&tree, element), once);
}

#[test]
fn test_generated_objects_are_closed() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with("block", Some(r#"content: "x""#), None))
        .unwrap();

    tree.insert_pseudo_child(element, PseudoId::Before, None);

    let wrapper = tree.first_child(element).unwrap();
    let text = tree.first_child(wrapper).unwrap();
    assert!(tree[wrapper].is_closed());
    assert!(tree[text].is_closed());
    assert!(!tree[wrapper].is_anonymous());
}

#[test]
fn test_each_content_item_gets_its_own_box() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "one" url(icon.png) "two""#),
            None,
        ))
        .unwrap();

    tree.insert_pseudo_child(element, PseudoId::Before, None);

    let kids = children(&tree, element);
    assert_eq!(kids.len(), 3);
    assert_eq!(text_of_wrapper(&tree, kids[0]).as_deref(), Some("one"));
    assert!(tree[kids[1]].kind().is_replaced());
    assert_eq!(text_of_wrapper(&tree, kids[2]).as_deref(), Some("two"));
    let RenderKind::Image(image) = tree[kids[1]].kind() else {
        panic!("expected an image");
    };
    assert_eq!(image.resource().unwrap().url, "icon.png");
    assert_eq!(image.intrinsic_size(), (0.0, 0.0));
}

#[test]
fn test_generated_content_never_owns_a_layer() {
    let mut tree = RenderTree::default();
    let root = tree.root();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "x"; position: absolute; overflow: hidden; float: left"#),
            None,
        ))
        .unwrap();
    tree.add_child(root, element, None);
    let layers = tree.layers().len();

    tree.update_pseudo_children(element);

    assert_eq!(tree.layers().len(), layers);
    let wrapper = tree.first_child(element).unwrap();
    let style = tree[wrapper].style();
    assert!(!style.is_positioned());
    assert!(!style.is_floating());
    assert!(!style.has_overflow_clip());
    assert!(tree[wrapper].layer().is_none());
}

#[test]
fn test_inside_inline_flow_content_is_inline() {
    let mut tree = RenderTree::default();
    let span = tree
        .create_object(style_with(
            "inline",
            Some(r#"content: "x"; display: block"#),
            None,
        ))
        .unwrap();

    tree.update_pseudo_children(span);

    let wrapper = tree.first_child(span).unwrap();
    assert_eq!(tree[wrapper].kind(), &RenderKind::Inline);
    assert_eq!(tree[wrapper].style().display, DisplayType::Inline);
}

#[test]
fn test_block_pseudo_in_block_gets_block_wrapper() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "x"; display: block"#),
            None,
        ))
        .unwrap();

    tree.update_pseudo_children(element);

    let wrapper = tree.first_child(element).unwrap();
    assert_eq!(tree[wrapper].kind(), &RenderKind::Block);
}

#[test]
fn test_missing_or_hidden_pseudo_style_is_a_no_op() {
    let mut tree = RenderTree::default();
    let plain = tree
        .create_object(style_with("block", None, None))
        .unwrap();
    let hidden = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "x"; display: none"#),
            None,
        ))
        .unwrap();

    tree.update_pseudo_children(plain);
    tree.update_pseudo_children(hidden);
    tree.insert_pseudo_child(plain, PseudoId::NoPseudo, None);

    assert_eq!(tree.first_child(plain), None);
    assert_eq!(tree.first_child(hidden), None);
}

#[test]
fn test_table_pseudo_display_is_wrapped_like_any_child() {
    let mut tree = RenderTree::default();
    let element = tree
        .create_object(style_with(
            "block",
            Some(r#"content: "x"; display: table-cell"#),
            None,
        ))
        .unwrap();

    tree.update_pseudo_children(element);

    let table = tree.first_child(element).unwrap();
    assert_eq!(tree[table].kind(), &RenderKind::Table);
    assert!(tree[table].is_anonymous());
    assert_eq!(tree.verify(element), Ok(7));
}
