//! The layout driver.
//!
//! Layout here is structural: a container lays out its dirty children in
//! document order, then clears its own flags. Geometry belongs to the
//! concrete box types and is not modelled; what is modelled is the visiting
//! order and the dirty-state protocol the scheduler records.

#[cfg(feature = "layout-trace")]
use std::cell::Cell;

use crate::arena::RenderId;
use crate::metrics::{ApproximateFontMetrics, FontMetrics};
use crate::object::{MinMaxWidth, RenderKind};
use crate::tree::RenderTree;

#[cfg(feature = "layout-trace")]
thread_local! {
    static LAYOUT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Decrements the trace depth on every return path.
#[cfg(feature = "layout-trace")]
struct DepthGuard;

#[cfg(feature = "layout-trace")]
impl Drop for DepthGuard {
    fn drop(&mut self) {
        LAYOUT_DEPTH.with(|d| d.set(d.get() - 1));
    }
}

impl RenderTree {
    /// Lay out the dirty children of `id` first to last, then mark `id`
    /// clean.
    ///
    /// Grandchildren are only reached through their parent's own
    /// [`RenderTree::layout_if_needed`].
    ///
    /// # Panics
    ///
    /// Panics if neither `id` nor a descendant needs layout, or if `id`'s
    /// min/max widths are stale.
    pub fn layout(&mut self, id: RenderId) {
        assert!(
            self.scheduler.self_or_child_needs_layout(id),
            "layout: {id:?} is already laid out"
        );
        assert!(
            self.min_max_known(id),
            "layout: min/max widths of {id:?} are stale"
        );

        #[cfg(feature = "layout-trace")]
        let _depth = {
            let depth = LAYOUT_DEPTH.with(|d| {
                let current = d.get();
                d.set(current + 1);
                current
            });
            eprintln!(
                "[LAYOUT] {:indent$}{} {id:?}",
                "",
                self[id].kind.render_name(),
                indent = depth * 2
            );
            DepthGuard
        };

        let mut child = self[id].first_child;
        while let Some(current) = child {
            self.layout_if_needed(current);
            child = self[current].next_sibling;
        }
        self.clear_needs_layout(id);
    }

    /// Lay out `id` if it or a descendant is dirty, computing its min/max
    /// widths first when they are stale.
    pub fn layout_if_needed(&mut self, id: RenderId) {
        if !self.scheduler.self_or_child_needs_layout(id) {
            return;
        }
        if !self.min_max_known(id) {
            self.calc_min_max_width(id);
        }
        self.layout(id);
    }

    /// Lay out the document from the root.
    pub fn update_layout(&mut self) {
        let root = self.root;
        if self.contains(root) {
            self.layout_if_needed(root);
        }
    }

    /// Recompute stale min/max widths in `id`'s subtree with
    /// [`ApproximateFontMetrics`].
    pub fn calc_min_max_width(&mut self, id: RenderId) {
        self.calc_min_max_width_with(id, &ApproximateFontMetrics);
    }

    /// [§ 17.5.2.2 Automatic table layout](https://www.w3.org/TR/CSS2/tables.html#auto-table-layout)
    ///
    /// "Calculate the minimum content width (MCW) of each cell ... Also,
    /// calculate the 'maximum' cell width of each cell: formatting the
    /// content without breaking lines other than where explicit line breaks
    /// occur."
    ///
    /// Only objects whose widths are stale are visited; a known subtree is
    /// taken from the cache.
    pub fn calc_min_max_width_with(&mut self, id: RenderId, metrics: &dyn FontMetrics) {
        if self.min_max_known(id) {
            return;
        }
        let children: Vec<RenderId> = self.children(id).collect();
        for &child in &children {
            self.calc_min_max_width_with(child, metrics);
        }

        let object = &self[id];
        let font_size = object.style.font_size;
        let widths = match &object.kind {
            RenderKind::Text(data) => text_min_max(data.text(), font_size, metrics),
            RenderKind::Image(data) => {
                let (width, _) = data.intrinsic_size();
                MinMaxWidth {
                    min: width,
                    max: width,
                }
            }
            _ => self.container_min_max(&children),
        };
        self.object_mut(id).min_max = widths;
        self.set_min_max_known(id);
    }

    /// Inline-level children share lines and add up; block-level children
    /// each take their own line.
    fn container_min_max(&self, children: &[RenderId]) -> MinMaxWidth {
        let mut result = MinMaxWidth::default();
        let mut line = MinMaxWidth::default();
        for &child in children {
            let object = &self[child];
            let widths = object.min_max;
            if object.is_inline_level() {
                line.min = line.min.max(widths.min);
                line.max += widths.max;
            } else {
                result.min = result.min.max(line.min).max(widths.min);
                result.max = result.max.max(line.max).max(widths.max);
                line = MinMaxWidth::default();
            }
        }
        result.min = result.min.max(line.min);
        result.max = result.max.max(line.max);
        result
    }
}

fn text_min_max(text: &str, font_size: f32, metrics: &dyn FontMetrics) -> MinMaxWidth {
    MinMaxWidth {
        min: widest(text.split_whitespace(), font_size, metrics),
        max: widest(text.lines(), font_size, metrics),
    }
}

fn widest<'a>(
    pieces: impl Iterator<Item = &'a str>,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> f32 {
    pieces
        .map(|piece| metrics.text_width(piece, font_size))
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_min_is_widest_word_max_is_widest_line() {
        let widths = text_min_max("ab abcd", 10.0, &ApproximateFontMetrics);
        assert!((widths.min - 24.0).abs() < 1e-4);
        assert!((widths.max - 42.0).abs() < 1e-4);
    }

    #[test]
    fn test_preserved_newlines_bound_max_width() {
        let widths = text_min_max("abc\nabcdef", 10.0, &ApproximateFontMetrics);
        assert!((widths.max - 36.0).abs() < 1e-4);
    }
}
