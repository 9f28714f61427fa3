//! Visual layers.
//!
//! [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
//!
//! Positioned and overflow-clipping boxes (and the root) own a layer. Layers
//! form their own tree, parallel to the render tree: a layer's parent is the
//! layer of the nearest layer-owning ancestor object. Inserting or removing a
//! render subtree has to splice the layers found in it under (or out of) that
//! enclosing layer.

use crate::arena::{RenderArena, RenderId};
use crate::tree::RenderTree;

/// Handle to a [`RenderLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(RenderId);

/// One node of the layer tree.
#[derive(Debug, Clone)]
pub struct RenderLayer {
    owner: RenderId,
    parent: Option<LayerId>,
    children: Vec<LayerId>,
}

impl RenderLayer {
    /// The render object that owns this layer.
    #[must_use]
    pub const fn owner(&self) -> RenderId {
        self.owner
    }

    /// The enclosing layer, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// Child layers in attachment order.
    #[must_use]
    pub fn children(&self) -> &[LayerId] {
        &self.children
    }
}

/// All layers of one render tree.
#[derive(Debug, Default)]
pub struct LayerTree {
    layers: RenderArena<RenderLayer>,
}

impl LayerTree {
    /// Resolve a layer handle.
    #[must_use]
    pub fn get(&self, layer: LayerId) -> Option<&RenderLayer> {
        self.layers.get(layer.0)
    }

    /// Number of live layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub(crate) fn create(&mut self, owner: RenderId) -> LayerId {
        LayerId(self.layers.alloc(RenderLayer {
            owner,
            parent: None,
            children: Vec::new(),
        }))
    }

    pub(crate) fn destroy(&mut self, layer: LayerId) {
        let Some(removed) = self.layers.free(layer.0) else {
            return;
        };
        if let Some(parent) = removed.parent
            && let Some(parent) = self.layers.get_mut(parent.0)
        {
            parent.children.retain(|&c| c != layer);
        }
        for child in removed.children {
            if let Some(child) = self.layers.get_mut(child.0) {
                child.parent = None;
            }
        }
    }

    fn append(&mut self, parent: LayerId, child: LayerId) {
        let current = self.get(child).and_then(RenderLayer::parent);
        if current == Some(parent) || parent == child {
            return;
        }
        if let Some(old) = current {
            self.remove(old, child);
        }
        if let Some(layer) = self.layers.get_mut(child.0) {
            layer.parent = Some(parent);
        }
        if let Some(layer) = self.layers.get_mut(parent.0) {
            layer.children.push(child);
        }
    }

    fn remove(&mut self, parent: LayerId, child: LayerId) {
        if self.get(child).and_then(RenderLayer::parent) != Some(parent) {
            return;
        }
        if let Some(layer) = self.layers.get_mut(child.0) {
            layer.parent = None;
        }
        if let Some(layer) = self.layers.get_mut(parent.0) {
            layer.children.retain(|&c| c != child);
        }
    }
}

impl RenderTree {
    /// The layer tree.
    #[must_use]
    pub const fn layers(&self) -> &LayerTree {
        &self.layers
    }

    /// The layer of `id` itself or of its nearest layer-owning ancestor.
    #[must_use]
    pub fn enclosing_layer(&self, id: RenderId) -> Option<LayerId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|object| self[object].layer)
    }

    /// Attach the topmost layers found in `id`'s subtree under `parent_layer`.
    ///
    /// A layer-owning object hides its descendants: their layers already hang
    /// off its own layer.
    pub(crate) fn add_layers(&mut self, id: RenderId, parent_layer: Option<LayerId>) {
        let Some(parent_layer) = parent_layer else {
            return;
        };
        for layer in self.topmost_layers(id) {
            self.layers.append(parent_layer, layer);
        }
    }

    /// Detach the topmost layers found in `id`'s subtree from `parent_layer`.
    pub(crate) fn remove_layers(&mut self, id: RenderId, parent_layer: Option<LayerId>) {
        let Some(parent_layer) = parent_layer else {
            return;
        };
        for layer in self.topmost_layers(id) {
            self.layers.remove(parent_layer, layer);
        }
    }

    /// Layers owned inside `id`'s subtree that are not nested in another
    /// layer of the same subtree, in document order.
    fn topmost_layers(&self, id: RenderId) -> Vec<LayerId> {
        let mut found = Vec::new();
        let mut stack = vec![id];
        while let Some(object) = stack.pop() {
            if let Some(layer) = self[object].layer {
                found.push(layer);
                continue;
            }
            let start = stack.len();
            stack.extend(self.children(object));
            stack[start..].reverse();
        }
        found
    }
}
