//! Dirty-state tracking for layout and intrinsic widths.
//!
//! Render objects do not carry their own dirty flags. Mutations report to a
//! [`LayoutScheduler`] owned by the tree, which keeps three sets:
//!
//! - objects that need layout themselves,
//! - objects with a descendant that needs layout,
//! - objects whose min/max widths are stale.
//!
//! Every report is also appended to an [`Invalidation`] log so callers can
//! see exactly what a mutation dirtied without walking the tree.

use std::collections::HashSet;

use serde::Serialize;

use crate::arena::RenderId;
use crate::tree::RenderTree;

/// One entry of the invalidation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Invalidation {
    /// The object was marked as needing layout.
    NeedsLayout(RenderId),
    /// The object newly has a descendant that needs layout.
    ChildNeedsLayout(RenderId),
    /// The object's min/max widths were invalidated.
    MinMaxDirty(RenderId),
    /// The object finished layout and its layout flags were cleared.
    LayoutDone(RenderId),
}

/// Dirty sets plus the invalidation log.
#[derive(Debug, Default)]
pub struct LayoutScheduler {
    needs_layout: HashSet<RenderId>,
    child_needs_layout: HashSet<RenderId>,
    min_max_dirty: HashSet<RenderId>,
    log: Vec<Invalidation>,
}

impl LayoutScheduler {
    /// Whether `id` itself needs layout.
    #[must_use]
    pub fn needs_layout(&self, id: RenderId) -> bool {
        self.needs_layout.contains(&id)
    }

    /// Whether some descendant of `id` needs layout.
    #[must_use]
    pub fn child_needs_layout(&self, id: RenderId) -> bool {
        self.child_needs_layout.contains(&id)
    }

    /// Whether `id` or a descendant needs layout.
    #[must_use]
    pub fn self_or_child_needs_layout(&self, id: RenderId) -> bool {
        self.needs_layout(id) || self.child_needs_layout(id)
    }

    /// Whether `id`'s min/max widths are up to date.
    #[must_use]
    pub fn min_max_known(&self, id: RenderId) -> bool {
        !self.min_max_dirty.contains(&id)
    }

    /// Everything logged since the last [`LayoutScheduler::take_log`].
    #[must_use]
    pub fn log(&self) -> &[Invalidation] {
        &self.log
    }

    /// Drain the invalidation log.
    pub fn take_log(&mut self) -> Vec<Invalidation> {
        std::mem::take(&mut self.log)
    }

    fn set_needs_layout(&mut self, id: RenderId) {
        let _ = self.needs_layout.insert(id);
        self.log.push(Invalidation::NeedsLayout(id));
    }

    /// Returns whether the flag was newly set.
    fn set_child_needs_layout(&mut self, id: RenderId) -> bool {
        let newly = self.child_needs_layout.insert(id);
        if newly {
            self.log.push(Invalidation::ChildNeedsLayout(id));
        }
        newly
    }

    fn set_min_max_dirty(&mut self, id: RenderId) {
        let _ = self.min_max_dirty.insert(id);
        self.log.push(Invalidation::MinMaxDirty(id));
    }

    /// Returns whether the flag was newly set.
    fn propagate_min_max_dirty(&mut self, id: RenderId) -> bool {
        let newly = self.min_max_dirty.insert(id);
        if newly {
            self.log.push(Invalidation::MinMaxDirty(id));
        }
        newly
    }

    fn clear_layout(&mut self, id: RenderId) {
        let _ = self.needs_layout.remove(&id);
        let _ = self.child_needs_layout.remove(&id);
        self.log.push(Invalidation::LayoutDone(id));
    }

    fn set_min_max_known(&mut self, id: RenderId) {
        let _ = self.min_max_dirty.remove(&id);
    }

    fn forget(&mut self, id: RenderId) {
        let _ = self.needs_layout.remove(&id);
        let _ = self.child_needs_layout.remove(&id);
        let _ = self.min_max_dirty.remove(&id);
    }
}

impl RenderTree {
    /// The scheduler holding this tree's dirty state.
    #[must_use]
    pub const fn scheduler(&self) -> &LayoutScheduler {
        &self.scheduler
    }

    /// Drain the invalidation log.
    pub fn take_invalidations(&mut self) -> Vec<Invalidation> {
        self.scheduler.take_log()
    }

    /// Whether `id` itself needs layout.
    #[must_use]
    pub fn needs_layout(&self, id: RenderId) -> bool {
        self.scheduler.needs_layout(id)
    }

    /// Whether `id`'s min/max widths are up to date.
    #[must_use]
    pub fn min_max_known(&self, id: RenderId) -> bool {
        self.scheduler.min_max_known(id)
    }

    /// Mark `id` as needing layout and flag every ancestor as having a
    /// dirty descendant.
    pub fn mark_needs_layout(&mut self, id: RenderId) {
        self.scheduler.set_needs_layout(id);
        let mut ancestor = self[id].parent;
        while let Some(a) = ancestor {
            if !self.scheduler.set_child_needs_layout(a) {
                break;
            }
            ancestor = self[a].parent;
        }
    }

    /// Invalidate `id`'s min/max widths and those of its ancestors.
    pub fn mark_min_max_dirty(&mut self, id: RenderId) {
        self.scheduler.set_min_max_dirty(id);
        let mut ancestor = self[id].parent;
        while let Some(a) = ancestor {
            if !self.scheduler.propagate_min_max_dirty(a) {
                break;
            }
            ancestor = self[a].parent;
        }
    }

    /// Both [`RenderTree::mark_needs_layout`] and
    /// [`RenderTree::mark_min_max_dirty`].
    pub fn mark_needs_layout_and_min_max(&mut self, id: RenderId) {
        self.mark_needs_layout(id);
        self.mark_min_max_dirty(id);
    }

    pub(crate) fn clear_needs_layout(&mut self, id: RenderId) {
        self.scheduler.clear_layout(id);
    }

    pub(crate) fn set_min_max_known(&mut self, id: RenderId) {
        self.scheduler.set_min_max_known(id);
    }

    pub(crate) fn forget_dirty_state(&mut self, id: RenderId) {
        self.scheduler.forget(id);
    }
}
