//! Add-child entry points of the table boxes.
//!
//! [§ 17.2.1 Anonymous table objects](https://www.w3.org/TR/CSS2/tables.html#anonymous-boxes)
//!
//! "Document languages other than HTML may not contain all the elements in
//! the CSS 2.1 table model. In these cases, the 'missing' elements must be
//! assumed in order for the table model to work."
//!
//! A table only holds row groups, captions and columns; a row group only
//! holds rows; a row only holds cells. Anything else is wrapped in the
//! missing level, reusing an adjacent anonymous wrapper when there is one.

use wren_style::DisplayType;

use crate::arena::RenderId;
use crate::object::RenderKind;
use crate::tree::RenderTree;

impl RenderTree {
    pub(crate) fn add_child_to_table(
        &mut self,
        table: RenderId,
        child: RenderId,
        before: Option<RenderId>,
    ) {
        let object = &self[child];
        let display = object.style.display;
        let direct = !object.kind.is_text()
            && !object.kind.is_replaced()
            && (display.is_row_group()
                || matches!(
                    display,
                    DisplayType::TableCaption
                        | DisplayType::TableColumn
                        | DisplayType::TableColumnGroup
                ));

        if direct {
            self.insert_child_node(table, child, before);
        } else {
            let section = self.anonymous_wrapper(
                table,
                before,
                RenderKind::TableSection,
                DisplayType::TableRowGroup,
            );
            self.add_child(section, child, None);
        }
        self.mark_needs_layout_and_min_max(child);
    }

    pub(crate) fn add_child_to_section(
        &mut self,
        section: RenderId,
        child: RenderId,
        before: Option<RenderId>,
    ) {
        if self[child].kind.is_table_row() {
            self.insert_child_node(section, child, before);
        } else {
            let row =
                self.anonymous_wrapper(section, before, RenderKind::TableRow, DisplayType::TableRow);
            self.add_child(row, child, None);
        }
        self.mark_needs_layout_and_min_max(child);
    }

    pub(crate) fn add_child_to_row(
        &mut self,
        row: RenderId,
        child: RenderId,
        before: Option<RenderId>,
    ) {
        if self[child].kind.is_table_cell() {
            self.insert_child_node(row, child, before);
        } else {
            let cell =
                self.anonymous_wrapper(row, before, RenderKind::TableCell, DisplayType::TableCell);
            self.add_child_to_flow(cell, child, None);
        }
        self.mark_needs_layout_and_min_max(child);
    }

    /// The anonymous `kind` box a misplaced child of `parent` goes into.
    ///
    /// The box next to the insertion point (`before`, or the last child when
    /// appending) is reused if it is an anonymous box of the same kind;
    /// otherwise a new one is linked at the insertion point.
    fn anonymous_wrapper(
        &mut self,
        parent: RenderId,
        before: Option<RenderId>,
        kind: RenderKind,
        display: DisplayType,
    ) -> RenderId {
        let anchor = match before {
            Some(before) => Some(self.direct_child(parent, before)),
            None => self[parent].last_child,
        };
        if let Some(anchor) = anchor
            && self[anchor].anonymous
            && self[anchor].kind == kind
        {
            return anchor;
        }

        let wrapper = self.create_anonymous(parent, kind, display);
        self.insert_child_node(parent, wrapper, before);
        wrapper
    }
}
