//! The render tree: arena, root, and object factories.
//!
//! All objects of one document live in a single [`RenderArena`] owned by the
//! [`RenderTree`]. The tree also owns the collaborators that mutation talks
//! to: the [`LayerTree`], the [`LayoutScheduler`] and the selection.

use std::ops::Index;
use std::rc::Rc;

use wren_style::{DisplayType, ImageResource, RenderStyle};

use crate::arena::{RenderArena, RenderId};
use crate::layer::LayerTree;
use crate::object::{ImageData, RenderKind, RenderObject, TextData};
use crate::scheduler::LayoutScheduler;
use crate::selection::Selection;

/// A document's render tree.
#[derive(Debug)]
pub struct RenderTree {
    pub(crate) arena: RenderArena<RenderObject>,
    pub(crate) root: RenderId,
    pub(crate) layers: LayerTree,
    pub(crate) scheduler: LayoutScheduler,
    pub(crate) selection: Option<Selection>,
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new(RenderStyle::new(DisplayType::Block))
    }
}

impl Index<RenderId> for RenderTree {
    type Output = RenderObject;

    fn index(&self, id: RenderId) -> &RenderObject {
        let Some(object) = self.arena.get(id) else {
            panic!("render id {id:?} does not resolve (stale or foreign)");
        };
        object
    }
}

impl RenderTree {
    /// A tree holding just the document root, styled with `root_style`.
    #[must_use]
    pub fn new(root_style: impl Into<Rc<RenderStyle>>) -> Self {
        let mut arena = RenderArena::new();
        let root = arena.alloc(RenderObject::new(RenderKind::Root, root_style.into(), false));
        let mut tree = Self {
            arena,
            root,
            layers: LayerTree::default(),
            scheduler: LayoutScheduler::default(),
            selection: None,
        };
        let layer = tree.layers.create(root);
        tree.object_mut(root).layer = Some(layer);
        tree.mark_needs_layout_and_min_max(root);
        tree
    }

    /// The document root.
    #[must_use]
    pub const fn root(&self) -> RenderId {
        self.root
    }

    /// Number of live objects.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether every object, root included, has been released.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The arena backing this tree.
    #[must_use]
    pub const fn arena(&self) -> &RenderArena<RenderObject> {
        &self.arena
    }

    /// Whether `id` resolves to a live object of this tree.
    #[must_use]
    pub fn contains(&self, id: RenderId) -> bool {
        self.arena.contains(id)
    }

    /// Resolve `id` without panicking.
    #[must_use]
    pub fn get(&self, id: RenderId) -> Option<&RenderObject> {
        self.arena.get(id)
    }

    pub(crate) fn object_mut(&mut self, id: RenderId) -> &mut RenderObject {
        let Some(object) = self.arena.get_mut(id) else {
            panic!("render id {id:?} does not resolve (stale or foreign)");
        };
        object
    }

    fn alloc(&mut self, kind: RenderKind, style: Rc<RenderStyle>, anonymous: bool) -> RenderId {
        let wants_layer = kind.is_root() || style.requires_layer();
        let id = self.arena.alloc(RenderObject::new(kind, style, anonymous));
        if wants_layer {
            let layer = self.layers.create(id);
            self.object_mut(id).layer = Some(layer);
        }
        self.mark_needs_layout_and_min_max(id);
        id
    }

    // ---------------------------------------------------------------------
    // Factories
    // ---------------------------------------------------------------------

    /// Create the object a box with `style` generates, unattached.
    ///
    /// Returns `None` for `display: none`, which generates no box.
    pub fn create_object(&mut self, style: impl Into<Rc<RenderStyle>>) -> Option<RenderId> {
        let style = style.into();
        let kind = RenderKind::for_display(style.display)?;
        Some(self.alloc(kind, style, false))
    }

    /// Create a flow box for generated content: an inline flow when `style`
    /// is inline, a block flow otherwise (whatever table display it names).
    pub fn create_flow(&mut self, style: impl Into<Rc<RenderStyle>>) -> RenderId {
        let style = style.into();
        let kind = if style.display == DisplayType::Inline {
            RenderKind::Inline
        } else {
            RenderKind::Block
        };
        self.alloc(kind, style, false)
    }

    /// Create a text object carrying `text`, unattached.
    pub fn create_text(
        &mut self,
        style: impl Into<Rc<RenderStyle>>,
        text: impl Into<String>,
    ) -> RenderId {
        let original = text.into();
        let data = TextData {
            text: original.clone(),
            original,
        };
        self.alloc(RenderKind::Text(data), style.into(), false)
    }

    /// Create a replaced image object, optionally bound to `resource`.
    pub fn create_image(
        &mut self,
        style: impl Into<Rc<RenderStyle>>,
        resource: Option<ImageResource>,
    ) -> RenderId {
        let data = ImageData {
            resource,
            intrinsic_size: (0.0, 0.0),
        };
        self.alloc(RenderKind::Image(data), style.into(), false)
    }

    /// [§ 17.2.1 Anonymous table objects](https://www.w3.org/TR/CSS2/tables.html#anonymous-boxes)
    ///
    /// "Anonymous boxes inherit from their parent"; the display is forced to
    /// the structural role the box fills.
    pub(crate) fn create_anonymous(
        &mut self,
        parent: RenderId,
        kind: RenderKind,
        display: DisplayType,
    ) -> RenderId {
        let style = RenderStyle::inherit_from(&self[parent].style).with_display(display);
        self.alloc(kind, Rc::new(style), true)
    }

    /// Create an anonymous block box inheriting from `parent`'s style,
    /// unattached.
    pub fn create_anonymous_block(&mut self, parent: RenderId) -> RenderId {
        self.create_anonymous(parent, RenderKind::Block, DisplayType::Block)
    }

    /// Bind an image object to the resource it shows.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an image.
    pub fn set_image_resource(&mut self, id: RenderId, resource: ImageResource) {
        let RenderKind::Image(data) = &mut self.object_mut(id).kind else {
            panic!("set_image_resource: {id:?} is not an image");
        };
        data.resource = Some(resource);
        self.mark_needs_layout_and_min_max(id);
    }

    /// Link `id` to the box that continues it after a split, or unlink it.
    ///
    /// The reference does not own the continuation.
    pub fn set_continuation(&mut self, id: RenderId, continuation: Option<RenderId>) {
        self.object_mut(id).continuation = continuation;
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// The parent of `id`.
    #[must_use]
    pub fn parent(&self, id: RenderId) -> Option<RenderId> {
        self[id].parent
    }

    /// The first child of `id`.
    #[must_use]
    pub fn first_child(&self, id: RenderId) -> Option<RenderId> {
        self[id].first_child
    }

    /// The last child of `id`.
    #[must_use]
    pub fn last_child(&self, id: RenderId) -> Option<RenderId> {
        self[id].last_child
    }

    /// The next sibling of `id`.
    #[must_use]
    pub fn next_sibling(&self, id: RenderId) -> Option<RenderId> {
        self[id].next_sibling
    }

    /// The previous sibling of `id`.
    #[must_use]
    pub fn previous_sibling(&self, id: RenderId) -> Option<RenderId> {
        self[id].prev_sibling
    }

    /// Iterate over the children of `id`, first to last.
    #[must_use]
    pub fn children(&self, id: RenderId) -> Children<'_> {
        Children {
            tree: self,
            next: self[id].first_child,
        }
    }

    /// Iterate over the ancestors of `id`, from parent to the top.
    #[must_use]
    pub fn ancestors(&self, id: RenderId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self[id].parent,
        }
    }

    /// The topmost ancestor of `id` (or `id` itself when unlinked).
    #[must_use]
    pub fn top(&self, id: RenderId) -> RenderId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Whether any child of `id` is inline-level.
    #[must_use]
    pub fn has_inline_children(&self, id: RenderId) -> bool {
        self.children(id).any(|child| self[child].is_inline_level())
    }
}

/// Iterator over the children of an object.
pub struct Children<'a> {
    tree: &'a RenderTree,
    next: Option<RenderId>,
}

impl Iterator for Children<'_> {
    type Item = RenderId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree[id].next_sibling;
        Some(id)
    }
}

/// Iterator over the ancestors of an object.
pub struct Ancestors<'a> {
    tree: &'a RenderTree,
    current: Option<RenderId>,
}

impl Iterator for Ancestors<'_> {
    type Item = RenderId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree[id].parent;
        Some(id)
    }
}
