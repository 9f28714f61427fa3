//! Structural verification of child lists.

use thiserror::Error;

use crate::arena::RenderId;
use crate::tree::RenderTree;

/// A broken link invariant found by [`RenderTree::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A child's parent link names some other object.
    #[error("{child:?} is listed under {container:?} but its parent is {found:?}")]
    WrongParent {
        /// The container whose list was walked.
        container: RenderId,
        /// The child found in the list.
        child: RenderId,
        /// What the child's parent link says.
        found: Option<RenderId>,
    },
    /// `next.prev_sibling` does not point back at `prev`.
    #[error("{next:?} does not link back to its previous sibling {prev:?}")]
    BrokenBackLink {
        /// The earlier sibling.
        prev: RenderId,
        /// The later sibling.
        next: RenderId,
    },
    /// `first_child` is not the head of the list.
    #[error("first child of {0:?} is not the head of its child list")]
    WrongFirstChild(RenderId),
    /// `last_child` is not the tail of the list.
    #[error("last child of {0:?} is not the tail of its child list")]
    WrongLastChild(RenderId),
    /// Following sibling links revisits an object.
    #[error("child list of {0:?} loops")]
    Cycle(RenderId),
    /// A link points at a released object.
    #[error("{0:?} links to a released object")]
    Stale(RenderId),
}

impl RenderTree {
    /// Check the child list of `container` and return its length.
    ///
    /// # Errors
    ///
    /// Returns the first broken link found.
    pub fn verify_children(&self, container: RenderId) -> Result<usize, LinkError> {
        let Some(object) = self.get(container) else {
            return Err(LinkError::Stale(container));
        };

        let mut count = 0;
        let mut prev = None;
        let mut next = object.first_child;
        while let Some(child) = next {
            let Some(linked) = self.get(child) else {
                return Err(LinkError::Stale(container));
            };
            if linked.parent != Some(container) {
                return Err(LinkError::WrongParent {
                    container,
                    child,
                    found: linked.parent,
                });
            }
            if linked.prev_sibling != prev {
                return Err(match prev {
                    Some(prev) => LinkError::BrokenBackLink { prev, next: child },
                    None => LinkError::WrongFirstChild(container),
                });
            }
            count += 1;
            if count > self.len() {
                return Err(LinkError::Cycle(container));
            }
            prev = Some(child);
            next = linked.next_sibling;
        }

        if object.last_child != prev {
            return Err(LinkError::WrongLastChild(container));
        }
        Ok(count)
    }

    /// Check every child list in `id`'s subtree and return the number of
    /// objects in it.
    ///
    /// # Errors
    ///
    /// Returns the first broken link found.
    pub fn verify(&self, id: RenderId) -> Result<usize, LinkError> {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let _ = self.verify_children(current)?;
            count += 1;
            if count > self.len() {
                return Err(LinkError::Cycle(id));
            }
            stack.extend(self.children(current));
        }
        Ok(count)
    }
}
