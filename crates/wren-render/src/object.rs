//! Render objects and their kinds.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use std::rc::Rc;

use wren_style::{DisplayType, ImageResource, RenderStyle};

use crate::arena::RenderId;
use crate::layer::LayerId;

/// Text carried by a text object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    /// The text as it was supplied.
    pub(crate) original: String,
    /// The text after white-space processing on `close`.
    pub(crate) text: String,
}

impl TextData {
    /// The text as it was supplied.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The text after white-space processing.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A replaced image box and the resource it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub(crate) resource: Option<ImageResource>,
    pub(crate) intrinsic_size: (f32, f32),
}

impl ImageData {
    /// The bound image resource, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<&ImageResource> {
        self.resource.as_ref()
    }

    /// Intrinsic `(width, height)` adopted when the box was closed.
    #[must_use]
    pub const fn intrinsic_size(&self) -> (f32, f32) {
        self.intrinsic_size
    }
}

/// The closed set of render object kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderKind {
    /// The document root; owns the root layer and the selection.
    Root,
    /// A block container ([§ 9.2.1](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)).
    Block,
    /// An inline flow ([§ 9.2.2](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)).
    Inline,
    /// A table wrapper ([§ 17.4](https://www.w3.org/TR/CSS2/tables.html#model)).
    Table,
    /// A row group: `table-row-group`, `table-header-group` or `table-footer-group`.
    TableSection,
    /// A table row.
    TableRow,
    /// A table cell; a block container in its own right.
    TableCell,
    /// A column or column group.
    TableCol,
    /// A run of text; never has children.
    Text(TextData),
    /// A replaced image; never has children.
    Image(ImageData),
}

impl RenderKind {
    /// The object kind a box with `display` generates.
    ///
    /// Returns `None` for `display: none`.
    #[must_use]
    pub const fn for_display(display: DisplayType) -> Option<Self> {
        Some(match display {
            DisplayType::Inline => Self::Inline,
            DisplayType::Block
            | DisplayType::ListItem
            | DisplayType::RunIn
            | DisplayType::Compact
            | DisplayType::Marker
            | DisplayType::TableCaption => Self::Block,
            DisplayType::Table | DisplayType::InlineTable => Self::Table,
            DisplayType::TableRowGroup
            | DisplayType::TableHeaderGroup
            | DisplayType::TableFooterGroup => Self::TableSection,
            DisplayType::TableRow => Self::TableRow,
            DisplayType::TableCell => Self::TableCell,
            DisplayType::TableColumn | DisplayType::TableColumnGroup => Self::TableCol,
            DisplayType::None => return None,
        })
    }

    /// Debug name, used in traces and tree dumps.
    #[must_use]
    pub const fn render_name(&self) -> &'static str {
        match self {
            Self::Root => "RenderRoot",
            Self::Block => "RenderBlock",
            Self::Inline => "RenderInline",
            Self::Table => "RenderTable",
            Self::TableSection => "RenderTableSection",
            Self::TableRow => "RenderTableRow",
            Self::TableCell => "RenderTableCell",
            Self::TableCol => "RenderTableCol",
            Self::Text(_) => "RenderText",
            Self::Image(_) => "RenderImage",
        }
    }

    /// Whether this is a text run.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Whether this is a replaced element.
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// Whether this is the document root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Whether this is a table wrapper.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table)
    }

    /// Whether this is a row group.
    #[must_use]
    pub const fn is_table_section(&self) -> bool {
        matches!(self, Self::TableSection)
    }

    /// Whether this is a table row.
    #[must_use]
    pub const fn is_table_row(&self) -> bool {
        matches!(self, Self::TableRow)
    }

    /// Whether this is a table cell.
    #[must_use]
    pub const fn is_table_cell(&self) -> bool {
        matches!(self, Self::TableCell)
    }

    /// Whether this is an inline flow.
    #[must_use]
    pub const fn is_inline_flow(&self) -> bool {
        matches!(self, Self::Inline)
    }

    /// Whether this is a block container (table cells and the root included).
    #[must_use]
    pub const fn is_render_block(&self) -> bool {
        matches!(self, Self::Root | Self::Block | Self::TableCell)
    }

    /// Whether objects of this kind may own children.
    #[must_use]
    pub const fn can_have_children(&self) -> bool {
        !matches!(self, Self::Text(_) | Self::Image(_))
    }
}

/// Intrinsic width bounds ([§ 17.5.2.2](https://www.w3.org/TR/CSS2/tables.html#auto-table-layout)).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MinMaxWidth {
    /// Narrowest width the content fits in without overflow.
    pub min: f32,
    /// Width the content takes with no line breaks.
    pub max: f32,
}

/// A node of the render tree.
///
/// Links to other objects are ids into the owning tree's arena; the tree is
/// the only thing that rewrites them.
#[derive(Debug, Clone)]
pub struct RenderObject {
    pub(crate) kind: RenderKind,
    pub(crate) style: Rc<RenderStyle>,
    pub(crate) parent: Option<RenderId>,
    pub(crate) prev_sibling: Option<RenderId>,
    pub(crate) next_sibling: Option<RenderId>,
    pub(crate) first_child: Option<RenderId>,
    pub(crate) last_child: Option<RenderId>,
    pub(crate) anonymous: bool,
    pub(crate) continuation: Option<RenderId>,
    pub(crate) layer: Option<LayerId>,
    pub(crate) closed: bool,
    pub(crate) min_max: MinMaxWidth,
}

impl RenderObject {
    pub(crate) const fn new(kind: RenderKind, style: Rc<RenderStyle>, anonymous: bool) -> Self {
        Self {
            kind,
            style,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            anonymous,
            continuation: None,
            layer: None,
            closed: false,
            min_max: MinMaxWidth { min: 0.0, max: 0.0 },
        }
    }

    /// What kind of box this is.
    #[must_use]
    pub const fn kind(&self) -> &RenderKind {
        &self.kind
    }

    /// The shared computed style.
    #[must_use]
    pub const fn style(&self) -> &Rc<RenderStyle> {
        &self.style
    }

    /// The containing object, if linked.
    #[must_use]
    pub const fn parent(&self) -> Option<RenderId> {
        self.parent
    }

    /// The previous sibling, if any.
    #[must_use]
    pub const fn previous_sibling(&self) -> Option<RenderId> {
        self.prev_sibling
    }

    /// The next sibling, if any.
    #[must_use]
    pub const fn next_sibling(&self) -> Option<RenderId> {
        self.next_sibling
    }

    /// The first child, if any.
    #[must_use]
    pub const fn first_child(&self) -> Option<RenderId> {
        self.first_child
    }

    /// The last child, if any.
    #[must_use]
    pub const fn last_child(&self) -> Option<RenderId> {
        self.last_child
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Whether the engine synthesized this box to satisfy a structural rule.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// The box continuing this one after an inline/block split.
    #[must_use]
    pub const fn continuation(&self) -> Option<RenderId> {
        self.continuation
    }

    /// The visual layer this object owns, if any.
    #[must_use]
    pub const fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// Whether the finalize hook has run.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Cached intrinsic widths; only meaningful once the scheduler reports
    /// them known.
    #[must_use]
    pub const fn min_max_width(&self) -> MinMaxWidth {
        self.min_max
    }

    /// The processed text of a text object.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            RenderKind::Text(data) => Some(data.text()),
            _ => None,
        }
    }

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    ///
    /// Text is always inline-level; everything else follows its `display`.
    #[must_use]
    pub fn is_inline_level(&self) -> bool {
        self.kind.is_text() || self.style.display.is_inline_level()
    }
}
