//! Wren render tree.
//!
//! [§ 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! "In the visual formatting model, each element in the document tree
//! generates zero or more boxes according to the box model."
//!
//! This crate holds those boxes. Render objects live in an arena owned by a
//! [`RenderTree`] and link to each other by [`RenderId`]. Containers accept
//! children through [`RenderTree::add_child`], which synthesizes anonymous
//! table boxes where the CSS table model requires them, expand their
//! `::before`/`::after` content, prune anonymous blocks left behind by
//! mutation, and drive a depth-first layout over dirty subtrees.
//!
//! Dirty state is not stored on objects: the tree's [`LayoutScheduler`]
//! tracks it and logs every [`Invalidation`].
//!
//! Enable the `layout-trace` feature to print mutation and layout traces to
//! stderr.

pub mod arena;
mod cleanup;
mod close;
mod container;
mod generated;
pub mod layer;
mod layout;
pub mod metrics;
pub mod object;
pub mod scheduler;
pub mod selection;
pub mod snapshot;
mod table;
pub mod tree;
pub mod verify;

pub use arena::{RenderArena, RenderId};
pub use close::collapse_white_space;
pub use layer::{LayerId, LayerTree, RenderLayer};
pub use metrics::{ApproximateFontMetrics, FontMetrics};
pub use object::{ImageData, MinMaxWidth, RenderKind, RenderObject, TextData};
pub use scheduler::{Invalidation, LayoutScheduler};
pub use selection::{Selection, SelectionPoint};
pub use snapshot::TreeSnapshot;
pub use tree::{Ancestors, Children, RenderTree};
pub use verify::LinkError;
