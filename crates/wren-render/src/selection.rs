//! The active text selection.
//!
//! Endpoints are stored as render object ids. Removing an endpoint object
//! from the document would leave the selection pointing at a released slot,
//! so removal clears the selection instead (see
//! [`RenderTree::remove_child_node`]).

use crate::arena::RenderId;
use crate::tree::RenderTree;

/// One end of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPoint {
    /// The object the endpoint sits in.
    pub object: RenderId,
    /// Character offset inside `object`.
    pub offset: usize,
}

impl SelectionPoint {
    /// An endpoint at `offset` inside `object`.
    #[must_use]
    pub const fn new(object: RenderId, offset: usize) -> Self {
        Self { object, offset }
    }
}

/// A selected range between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection starts.
    pub start: SelectionPoint,
    /// Where the selection ends.
    pub end: SelectionPoint,
}

impl RenderTree {
    /// Replace the active selection.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not resolve in this tree.
    pub fn set_selection(&mut self, start: SelectionPoint, end: SelectionPoint) {
        assert!(self.contains(start.object), "selection start {:?} is not alive", start.object);
        assert!(self.contains(end.object), "selection end {:?} is not alive", end.object);
        self.selection = Some(Selection { start, end });
    }

    /// Drop the active selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The active selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whether `id` is the start or end object of the active selection.
    #[must_use]
    pub fn is_selection_border(&self, id: RenderId) -> bool {
        self.selection
            .is_some_and(|s| s.start.object == id || s.end.object == id)
    }
}
