//! JSON render-tree fixtures.
//!
//! A fixture describes the document root and its descendants:
//!
//! ```json
//! {
//!   "style": "display: block",
//!   "children": [
//!     { "style": "display: table-row", "children": [{ "text": "cell" }] },
//!     { "style": "display: block", "before": "content: \"> \"" },
//!     { "anonymous": true, "children": [{ "style": "display: block" }] }
//!   ]
//! }
//! ```
//!
//! Styles are declaration lists applied on top of the parent's inherited
//! properties. `before` / `after` are the declaration lists of the node's
//! `::before` / `::after` styles.

use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use wren_common::warn_once;
use wren_render::{RenderId, RenderTree};
use wren_style::{DisplayType, ImageResource, PseudoId, RenderStyle, StyleError};

/// Why a fixture could not be turned into a render tree.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
    /// The fixture is not valid JSON for [`FixtureNode`].
    #[error("malformed fixture: {0}")]
    Json(#[from] serde_json::Error),
    /// A style declaration list was rejected.
    #[error("bad style at {path}: {source}")]
    Style {
        /// Child-index path of the offending node, e.g. `root/0/2`.
        path: String,
        /// The parser's complaint.
        source: StyleError,
    },
    /// A node asked to be both text and an image.
    #[error("node at {0} cannot be both text and an image")]
    TextAndImage(String),
    /// A text or image node listed children.
    #[error("node at {0} is a text or image leaf and cannot have children")]
    LeafWithChildren(String),
}

/// An image leaf of a fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureImage {
    /// Image URL.
    pub url: String,
    /// Intrinsic width in px.
    pub width: Option<f32>,
    /// Intrinsic height in px.
    pub height: Option<f32>,
}

/// One node of a fixture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureNode {
    /// Declaration list for the node's own style.
    pub style: Option<String>,
    /// Makes the node a text run with this content.
    pub text: Option<String>,
    /// Makes the node a replaced image.
    pub image: Option<FixtureImage>,
    /// Makes the node an anonymous block box.
    pub anonymous: bool,
    /// Declaration list of the `::before` style.
    pub before: Option<String>,
    /// Declaration list of the `::after` style.
    pub after: Option<String>,
    /// Child nodes in document order.
    pub children: Vec<FixtureNode>,
}

impl FixtureNode {
    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a valid fixture.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build a render tree from this fixture, which describes the root.
    ///
    /// Every node is added through the container policy, so misplaced table
    /// parts come out wrapped in anonymous table boxes. Generated content is
    /// expanded and every object is closed.
    ///
    /// # Errors
    ///
    /// Fails on the first node with a rejected style, conflicting content,
    /// or a text or image leaf that lists children.
    pub fn build(&self) -> Result<RenderTree, FixtureError> {
        let path = String::from("root");
        let style = self.style_for(RenderStyle::new(DisplayType::Block), &path)?;
        let mut tree = RenderTree::new(style);
        let root = tree.root();
        for (index, child) in self.children.iter().enumerate() {
            child.build_into(&mut tree, root, &format!("{path}/{index}"))?;
        }
        tree.update_pseudo_children(root);
        tree.close_subtree(root);
        Ok(tree)
    }

    fn build_into(
        &self,
        tree: &mut RenderTree,
        parent: RenderId,
        path: &str,
    ) -> Result<(), FixtureError> {
        let Some(id) = self.create(tree, parent, path)? else {
            warn_once("Fixture", &format!("node at {path} has display: none and was skipped"));
            return Ok(());
        };
        tree.add_child(parent, id, None);
        for (index, child) in self.children.iter().enumerate() {
            child.build_into(tree, id, &format!("{path}/{index}"))?;
        }
        if tree[id].kind().can_have_children() {
            tree.update_pseudo_children(id);
        }
        Ok(())
    }

    fn create(
        &self,
        tree: &mut RenderTree,
        parent: RenderId,
        path: &str,
    ) -> Result<Option<RenderId>, FixtureError> {
        let is_leaf = self.text.is_some() || self.image.is_some();
        if is_leaf && !self.children.is_empty() {
            return Err(FixtureError::LeafWithChildren(path.to_string()));
        }
        if self.anonymous {
            let ignored = [
                ("style", self.style.is_some()),
                ("before", self.before.is_some()),
                ("after", self.after.is_some()),
                ("text", self.text.is_some()),
                ("image", self.image.is_some()),
            ];
            for (field, _) in ignored.iter().filter(|(_, set)| *set) {
                warn_once(
                    "Fixture",
                    &format!("anonymous node at {path} ignores its '{field}'"),
                );
            }
            return Ok(Some(tree.create_anonymous_block(parent)));
        }
        let style = self.style_for(RenderStyle::inherit_from(tree[parent].style()), path)?;
        match (&self.text, &self.image) {
            (Some(_), Some(_)) => Err(FixtureError::TextAndImage(path.to_string())),
            (Some(text), None) => Ok(Some(tree.create_text(style, text.as_str()))),
            (None, Some(image)) => {
                let resource = match (image.width, image.height) {
                    (Some(width), Some(height)) => {
                        ImageResource::with_size(image.url.as_str(), width, height)
                    }
                    _ => ImageResource::new(image.url.as_str()),
                };
                Ok(Some(tree.create_image(style, Some(resource))))
            }
            (None, None) => Ok(tree.create_object(style)),
        }
    }

    /// The node's computed style: `base`, then the node's declarations, with
    /// the pseudo-element styles attached.
    fn style_for(&self, base: RenderStyle, path: &str) -> Result<Rc<RenderStyle>, FixtureError> {
        let bad_style = |source| FixtureError::Style {
            path: path.to_string(),
            source,
        };
        let mut style = base;
        if let Some(declarations) = &self.style {
            style.apply_declarations(declarations).map_err(bad_style)?;
        }
        let pseudo_declarations = [(PseudoId::Before, &self.before), (PseudoId::After, &self.after)];
        for (pseudo, declarations) in pseudo_declarations {
            if let Some(declarations) = declarations {
                let mut pseudo_style = RenderStyle::inherit_from(&style);
                pseudo_style.apply_declarations(declarations).map_err(bad_style)?;
                style.set_pseudo_style(pseudo, pseudo_style);
            }
        }
        Ok(Rc::new(style))
    }
}
