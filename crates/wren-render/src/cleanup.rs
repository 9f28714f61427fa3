//! Pruning of leftover anonymous block boxes.
//!
//! [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
//!
//! An anonymous block exists to hold inline content next to block siblings.
//! Once mutations leave one with no inline children (and no continuation
//! tying it to a split inline), it has no reason to exist: its children move
//! up into its parent in its place and the box is released.

use crate::arena::RenderId;
use crate::tree::RenderTree;

impl RenderTree {
    /// Whether `id` is an anonymous block box that no longer earns its keep.
    #[must_use]
    pub fn is_leftover_anonymous_box(&self, id: RenderId) -> bool {
        let object = &self[id];
        object.anonymous
            && object.kind.is_render_block()
            && !object.kind.is_table_cell()
            && object.continuation.is_none()
            && !self.has_inline_children(id)
    }

    /// Flatten leftover anonymous blocks among `container`'s children, then
    /// do the same for each ancestor up to the top of the tree.
    pub fn remove_leftover_anonymous_boxes(&mut self, container: RenderId) {
        let mut worklist = vec![container];
        while let Some(current) = worklist.pop() {
            let mut child = self[current].first_child;
            while let Some(candidate) = child {
                child = self[candidate].next_sibling;
                if self.is_leftover_anonymous_box(candidate) {
                    self.flatten_anonymous_box(current, candidate);
                }
            }
            if let Some(parent) = self[current].parent {
                worklist.push(parent);
            }
        }
    }

    /// Move `anonymous`'s children into `container` at its position, then
    /// release it.
    fn flatten_anonymous_box(&mut self, container: RenderId, anonymous: RenderId) {
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[RENDER] flattening anonymous {} {anonymous:?} into {container:?}",
            self[anonymous].kind.render_name()
        );

        // The moved children keep their enclosing layer.
        debug_assert!(
            self[anonymous].layer.is_none(),
            "anonymous {anonymous:?} owns a layer"
        );
        let moved: Vec<RenderId> = self.children(anonymous).collect();
        for &child in &moved {
            self.object_mut(child).parent = Some(container);
        }

        let (prev, next) = {
            let object = self.object_mut(anonymous);
            let links = (object.prev_sibling, object.next_sibling);
            object.parent = None;
            object.prev_sibling = None;
            object.next_sibling = None;
            object.first_child = None;
            object.last_child = None;
            links
        };
        // The children's own sibling links stay; only the ends are rewired.
        let (head, tail) = match (moved.first(), moved.last()) {
            (Some(&first), Some(&last)) => {
                self.object_mut(first).prev_sibling = prev;
                self.object_mut(last).next_sibling = next;
                (Some(first), Some(last))
            }
            _ => (next, prev),
        };
        match prev {
            Some(prev) => self.object_mut(prev).next_sibling = head,
            None => self.object_mut(container).first_child = head,
        }
        match next {
            Some(next) => self.object_mut(next).prev_sibling = tail,
            None => self.object_mut(container).last_child = tail,
        }

        self.detach(anonymous);
        self.mark_needs_layout_and_min_max(container);
        debug_assert_eq!(self.verify_children(container).err(), None);
    }
}
