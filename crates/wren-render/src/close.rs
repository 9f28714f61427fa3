//! The finalize hook run once an object's children are all in place.

use wren_style::WhiteSpace;

use crate::arena::RenderId;
use crate::object::RenderKind;
use crate::tree::RenderTree;

/// [§ 16.6.1 The 'white-space' processing model](https://www.w3.org/TR/CSS2/text.html#white-space-model)
///
/// "If 'white-space' is set to 'normal', 'nowrap', or 'pre-line', every tab
/// (U+0009) is converted to a space (U+0020)" and "any space (U+0020)
/// following another space (U+0020) ... is removed." Under `pre-line`
/// newlines survive and the spaces around them are dropped; under `normal`
/// and `nowrap` a newline is just another space.
#[must_use]
pub fn collapse_white_space(text: &str, white_space: WhiteSpace) -> String {
    if !white_space.collapses_spaces() {
        return text.to_string();
    }
    let keep_newlines = white_space.preserves_newlines();

    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        match c {
            '\n' if keep_newlines => {
                pending_space = false;
                while out.ends_with(' ') {
                    let _ = out.pop();
                }
                out.push('\n');
            }
            ' ' | '\t' | '\n' | '\r' => {
                if !out.ends_with('\n') || !keep_newlines {
                    pending_space = true;
                }
            }
            _ => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }
    if pending_space {
        out.push(' ');
    }
    out
}

impl RenderTree {
    /// Finalize `id`.
    ///
    /// Text runs apply white-space processing to their text and images adopt
    /// the intrinsic size of their resource; both invalidate their min/max
    /// widths. Closing twice does nothing.
    ///
    /// # Panics
    ///
    /// Panics if a child of `id` is still open.
    pub fn close(&mut self, id: RenderId) {
        if self[id].closed {
            return;
        }
        if let Some(open) = self.children(id).find(|&child| !self[child].closed) {
            panic!("close: {id:?} still has an open child {open:?}");
        }

        let white_space = self[id].style.white_space;
        let object = self.object_mut(id);
        object.closed = true;
        let dirty = match &mut object.kind {
            RenderKind::Text(data) => {
                data.text = collapse_white_space(&data.original, white_space);
                true
            }
            RenderKind::Image(data) => {
                data.intrinsic_size = data
                    .resource
                    .as_ref()
                    .and_then(|resource| resource.intrinsic_size)
                    .unwrap_or((0.0, 0.0));
                true
            }
            _ => false,
        };
        if dirty {
            self.mark_min_max_dirty(id);
        }
    }

    /// Close every object of `id`'s subtree, children before parents.
    pub fn close_subtree(&mut self, id: RenderId) {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current));
        }
        for &object in order.iter().rev() {
            self.close(object);
        }
    }
}
