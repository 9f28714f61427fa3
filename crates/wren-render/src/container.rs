//! Structural mutation of container child lists.
//!
//! The primitives ([`RenderTree::append_child_node`],
//! [`RenderTree::insert_child_node`], [`RenderTree::remove_child_node`]) only
//! splice links and report to the layer tree and the scheduler.
//! [`RenderTree::add_child`] sits on top of them and decides where a new child
//! actually goes, synthesizing anonymous table boxes when the child's
//! `display` cannot live directly in the container.

use wren_common::warn_once;
use wren_style::{DisplayType, TableParent};

use crate::arena::RenderId;
use crate::object::RenderKind;
use crate::tree::RenderTree;

/// Whether a container of `kind` can hold a child needing `parent`.
const fn accepts(kind: &RenderKind, parent: TableParent) -> bool {
    match parent {
        TableParent::Table => kind.is_table(),
        TableParent::Section => kind.is_table_section(),
        TableParent::Row => kind.is_table_row(),
    }
}

impl RenderTree {
    /// Link `child` as the last child of `container`.
    ///
    /// # Panics
    ///
    /// Panics if `child` already has a parent or `container` cannot have
    /// children.
    pub fn append_child_node(&mut self, container: RenderId, child: RenderId) {
        assert!(
            self[child].parent.is_none(),
            "append_child_node: {child:?} is already linked"
        );
        assert!(
            self[container].kind.can_have_children(),
            "append_child_node: {} cannot have children",
            self[container].kind.render_name()
        );

        let last = self[container].last_child;
        {
            let object = self.object_mut(child);
            object.parent = Some(container);
            object.prev_sibling = last;
            object.next_sibling = None;
        }
        match last {
            Some(last) => self.object_mut(last).next_sibling = Some(child),
            None => self.object_mut(container).first_child = Some(child),
        }
        self.object_mut(container).last_child = Some(child);

        self.after_link(container, child);
    }

    /// Link `child` into `container` just before `before`.
    ///
    /// `before` may sit inside anonymous boxes of `container`; it is lifted
    /// to the direct child that wraps it. `None` appends.
    ///
    /// # Panics
    ///
    /// Panics if `child` already has a parent or if `before` is not inside
    /// `container`.
    pub fn insert_child_node(
        &mut self,
        container: RenderId,
        child: RenderId,
        before: Option<RenderId>,
    ) {
        let Some(before) = before else {
            self.append_child_node(container, child);
            return;
        };
        assert!(
            self[child].parent.is_none(),
            "insert_child_node: {child:?} is already linked"
        );
        let before = self.direct_child(container, before);

        let prev = self[before].prev_sibling;
        {
            let object = self.object_mut(child);
            object.parent = Some(container);
            object.prev_sibling = prev;
            object.next_sibling = Some(before);
        }
        self.object_mut(before).prev_sibling = Some(child);
        match prev {
            Some(prev) => self.object_mut(prev).next_sibling = Some(child),
            None => self.object_mut(container).first_child = Some(child),
        }

        self.after_link(container, child);
    }

    /// Lift `descendant` through anonymous ancestors until it is a direct
    /// child of `container`.
    ///
    /// # Panics
    ///
    /// Panics if that never happens.
    pub(crate) fn direct_child(&self, container: RenderId, descendant: RenderId) -> RenderId {
        let mut current = descendant;
        while let Some(parent) = self[current].parent
            && parent != container
            && self[parent].anonymous
        {
            current = parent;
        }
        assert_eq!(
            self[current].parent,
            Some(container),
            "insert_child_node: {descendant:?} is not a child of {container:?}"
        );
        current
    }

    fn after_link(&mut self, container: RenderId, child: RenderId) {
        let layer = self.enclosing_layer(container);
        self.add_layers(child, layer);
        self.mark_needs_layout_and_min_max(child);
        debug_assert_eq!(self.verify_children(container).err(), None);
    }

    /// Add `new_child` to `container` before `before`, wrapping it in
    /// anonymous table boxes where its `display` requires a table ancestor.
    ///
    /// [§ 17.2.1 Anonymous table objects](https://www.w3.org/TR/CSS2/tables.html#anonymous-boxes)
    ///
    /// "If a child C of a 'table-row' parent is not a 'table-cell', then
    /// generate an anonymous 'table-cell' box around C and all consecutive
    /// siblings of C that are not 'table-cell' boxes."
    ///
    /// # Panics
    ///
    /// Panics if `container` is a text or image object, if `new_child` is
    /// already linked, or if `before` is not inside `container`.
    pub fn add_child(&mut self, container: RenderId, new_child: RenderId, before: Option<RenderId>) {
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[RENDER] add_child {} {container:?} <- {} {new_child:?} before {before:?}",
            self[container].kind.render_name(),
            self[new_child].kind.render_name(),
        );

        match self[container].kind {
            RenderKind::Table => self.add_child_to_table(container, new_child, before),
            RenderKind::TableSection => self.add_child_to_section(container, new_child, before),
            RenderKind::TableRow => self.add_child_to_row(container, new_child, before),
            _ => self.add_child_to_flow(container, new_child, before),
        }
    }

    /// The policy every non-table container follows.
    pub(crate) fn add_child_to_flow(
        &mut self,
        container: RenderId,
        new_child: RenderId,
        before: Option<RenderId>,
    ) {
        assert!(
            self[container].kind.can_have_children(),
            "add_child: {} cannot have children",
            self[container].kind.render_name()
        );

        let needs_table = self.needs_table_wrapper(container, new_child);
        if needs_table {
            let anchor = before.or(self[container].last_child);
            let table = match anchor {
                Some(anchor) if self[anchor].anonymous && self[anchor].kind.is_table() => anchor,
                _ => {
                    let table =
                        self.create_anonymous(container, RenderKind::Table, DisplayType::Table);
                    // Appending with children present puts the table ahead of
                    // the last child.
                    self.add_child(container, table, anchor);
                    table
                }
            };
            self.add_child(table, new_child, None);
        } else {
            self.insert_child_node(container, new_child, before);
        }

        self.mark_needs_layout_and_min_max(new_child);
    }

    fn needs_table_wrapper(&self, container: RenderId, new_child: RenderId) -> bool {
        let child = &self[new_child];
        if child.kind.is_text() || child.kind.is_replaced() {
            return false;
        }
        let display = child.style.display;
        if display == DisplayType::None {
            warn_once(
                "Render",
                &format!("{} with display: none added to the render tree", child.kind.render_name()),
            );
            return false;
        }
        let Some(required) = display.required_table_parent() else {
            return false;
        };
        let parent = &self[container];
        if accepts(&parent.kind, required) {
            return false;
        }
        // An empty cell takes a `table-cell` child as is, unless that child
        // is a real cell box.
        let empty_cell_exception = required == TableParent::Row
            && parent.kind.is_table_cell()
            && parent.first_child.is_none()
            && !child.kind.is_table_cell();
        !empty_cell_exception
    }

    /// Unlink `old_child` from `container` and return it.
    ///
    /// The child keeps its subtree; call [`RenderTree::detach`] to release
    /// it, or link it somewhere else.
    ///
    /// # Panics
    ///
    /// Panics if `old_child` is not a child of `container`.
    #[must_use = "the removed child must be detached or re-linked"]
    pub fn remove_child_node(&mut self, container: RenderId, old_child: RenderId) -> RenderId {
        assert_eq!(
            self[old_child].parent,
            Some(container),
            "remove_child_node: {old_child:?} is not a child of {container:?}"
        );

        let layer = self.enclosing_layer(container);
        self.remove_layers(old_child, layer);

        if self.is_selection_border(old_child) && self.top(old_child) == self.root {
            self.clear_selection();
        }

        let (prev, next) = {
            let object = self.object_mut(old_child);
            let links = (object.prev_sibling, object.next_sibling);
            object.parent = None;
            object.prev_sibling = None;
            object.next_sibling = None;
            links
        };
        match prev {
            Some(prev) => self.object_mut(prev).next_sibling = next,
            None => self.object_mut(container).first_child = next,
        }
        match next {
            Some(next) => self.object_mut(next).prev_sibling = prev,
            None => self.object_mut(container).last_child = prev,
        }

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[RENDER] removed {} {old_child:?} from {container:?}",
            self[old_child].kind.render_name()
        );

        self.mark_needs_layout_and_min_max(container);
        debug_assert_eq!(self.verify_children(container).err(), None);
        old_child
    }

    /// [`RenderTree::remove_child_node`], then schedule `container` for
    /// layout again.
    ///
    /// # Panics
    ///
    /// Panics if `old_child` is not a child of `container`.
    #[must_use = "the removed child must be detached or re-linked"]
    pub fn remove_child(&mut self, container: RenderId, old_child: RenderId) -> RenderId {
        let removed = self.remove_child_node(container, old_child);
        self.mark_needs_layout(container);
        removed
    }

    /// Release `id` and its whole subtree back to the arena.
    ///
    /// Dirty state, layers and selection endpoints inside the subtree go
    /// with it. A continuation is released along with its owner only when
    /// nothing else holds it in a tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` is still linked to a parent.
    pub fn detach(&mut self, id: RenderId) {
        assert!(
            self[id].parent.is_none(),
            "detach: {id:?} is still linked; remove it first"
        );

        let mut worklist = vec![id];
        while let Some(current) = worklist.pop() {
            if !self.contains(current) {
                continue;
            }
            worklist.extend(self.children(current));
            if self.is_selection_border(current) {
                self.clear_selection();
            }
            self.forget_dirty_state(current);
            let Some(object) = self.arena.free(current) else {
                continue;
            };
            if let Some(layer) = object.layer {
                self.layers.destroy(layer);
            }
            if let Some(continuation) = object.continuation
                && self.get(continuation).is_some_and(|c| c.parent.is_none())
            {
                worklist.push(continuation);
            }
        }
    }

    /// Unlink `id` from its parent if it has one, then release its subtree.
    pub fn destroy_subtree(&mut self, id: RenderId) {
        if let Some(parent) = self[id].parent {
            let removed = self.remove_child(parent, id);
            self.detach(removed);
        } else {
            self.detach(id);
        }
    }

    /// Release every object, the root included.
    pub fn teardown(&mut self) {
        let root = self.root;
        if self.contains(root) {
            self.detach(root);
        }
    }
}
