//! Serializable and printable views of a render subtree.

use std::fmt::Write;

use serde::Serialize;

use crate::arena::RenderId;
use crate::object::MinMaxWidth;
use crate::tree::RenderTree;

/// A render object and its subtree, detached from the arena.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot {
    /// Id of the object when the snapshot was taken.
    pub id: RenderId,
    /// Debug name of the object kind (`RenderBlock`, `RenderText`, ...).
    pub name: &'static str,
    /// The `display` keyword of the object's style.
    pub display: String,
    /// Whether the object is an anonymous box.
    pub anonymous: bool,
    /// Processed text of a text object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether the object owns a visual layer.
    pub has_layer: bool,
    /// Whether the object itself still needs layout.
    pub needs_layout: bool,
    /// Cached min/max widths, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max: Option<(f32, f32)>,
    /// Children, first to last.
    pub children: Vec<TreeSnapshot>,
}

impl RenderTree {
    /// Capture `id` and its subtree.
    #[must_use]
    pub fn snapshot(&self, id: RenderId) -> TreeSnapshot {
        let object = &self[id];
        let min_max = self.min_max_known(id).then(|| {
            let MinMaxWidth { min, max } = object.min_max;
            (min, max)
        });
        TreeSnapshot {
            id,
            name: object.kind.render_name(),
            display: object.style.display.to_string(),
            anonymous: object.anonymous,
            text: object.text().map(str::to_string),
            has_layer: object.layer.is_some(),
            needs_layout: self.needs_layout(id),
            min_max,
            children: self.children(id).map(|child| self.snapshot(child)).collect(),
        }
    }

    /// Render `id`'s subtree as an indented outline, one object per line.
    #[must_use]
    pub fn dump(&self, id: RenderId) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, id, 0);
        out
    }

    fn dump_into(&self, out: &mut String, id: RenderId, depth: usize) {
        let object = &self[id];
        let prefix = "  ".repeat(depth);
        let _ = write!(out, "{prefix}{}", object.kind.render_name());
        if object.anonymous {
            out.push_str(" (anonymous)");
        }
        if let Some(text) = object.text() {
            let shown = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
            let _ = write!(out, " \"{shown}\"");
        }
        out.push('\n');
        for child in self.children(id) {
            self.dump_into(out, child, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use wren_style::{DisplayType, RenderStyle};

    use crate::tree::RenderTree;

    #[test]
    fn test_snapshot_mirrors_the_tree() {
        let mut tree = RenderTree::default();
        let root = tree.root();
        let row = tree
            .create_object(RenderStyle::new(DisplayType::TableRow))
            .unwrap();
        tree.add_child(root, row, None);
        let text = tree.create_text(RenderStyle::default(), "a b");
        tree.add_child(row, text, None);

        let snapshot = tree.snapshot(root);
        assert_eq!(snapshot.name, "RenderRoot");
        assert!(snapshot.has_layer);
        assert!(snapshot.needs_layout);
        let table = &snapshot.children[0];
        assert!(table.anonymous);
        assert_eq!(table.display, "table");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["children"][0]["anonymous"], true);
    }

    #[test]
    fn test_dump_outlines_one_object_per_line() {
        let mut tree = RenderTree::default();
        let root = tree.root();
        let block = tree
            .create_object(RenderStyle::new(DisplayType::Block))
            .unwrap();
        tree.add_child(root, block, None);
        let text = tree.create_text(RenderStyle::default(), "a b");
        tree.add_child(block, text, None);

        assert_eq!(
            tree.dump(root),
            "RenderRoot\n  RenderBlock\n    RenderText \"a\u{00B7}b\"\n"
        );
    }
}
