//! The `display` property and its table-nesting rules.
//!
//! [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
//! [§ 17.2 The CSS table model](https://www.w3.org/TR/CSS2/tables.html#table-display)

use serde::Serialize;
use strum_macros::{Display, EnumString};

use wren_common::warning::warn_once;

/// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
///
/// "Value: inline | block | list-item | run-in | inline-block | table |
/// inline-table | table-row-group | table-header-group | table-footer-group |
/// table-row | table-column-group | table-column | table-cell |
/// table-caption | none | inherit"
///
/// `compact` and `marker` are kept from the CSS2 draft keyword set; they
/// generate ordinary block boxes.
///
/// "Initial: inline"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisplayType {
    /// "This value causes an element to generate one or more inline boxes."
    #[default]
    Inline,
    /// "This value causes an element to generate a block box."
    Block,
    /// "This value causes an element to generate a principal block box and
    /// a marker box."
    ListItem,
    /// "This value creates either block or inline boxes, depending on context."
    RunIn,
    /// Draft CSS2 compact box, laid out as a block.
    Compact,
    /// Draft CSS2 list marker box, laid out as a block.
    Marker,
    /// "Specifies that an element defines a block-level table."
    Table,
    /// "Specifies that an element defines an inline-level table."
    InlineTable,
    /// "Specifies that an element groups one or more rows."
    TableRowGroup,
    /// "Like 'table-row-group', but ... displayed before all other rows."
    TableHeaderGroup,
    /// "Like 'table-row-group', but ... displayed after all other rows."
    TableFooterGroup,
    /// "Specifies that an element is a row of cells."
    TableRow,
    /// "Specifies that an element groups one or more columns."
    TableColumnGroup,
    /// "Specifies that an element describes a column of cells."
    TableColumn,
    /// "Specifies that an element represents a table cell."
    TableCell,
    /// "Specifies a caption for the table."
    TableCaption,
    /// "This value causes an element to not appear in the formatting structure."
    None,
}

/// The kind of table box a display type must be nested in.
///
/// [§ 17.2.1 Anonymous table objects](https://www.w3.org/TR/CSS2/tables.html#anonymous-boxes)
///
/// "Document languages other than HTML may not contain all the elements in
/// the CSS 2.1 table model. In these cases, the 'missing' elements must be
/// assumed in order for the table model to work."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableParent {
    /// Row groups, column groups and captions live directly in a table.
    Table,
    /// Rows live in a row group.
    Section,
    /// Cells live in a row.
    Row,
}

impl DisplayType {
    /// The table box this display type requires as its parent, if any.
    ///
    /// A stray `table-column` generates no anonymous table.
    #[must_use]
    pub const fn required_table_parent(self) -> Option<TableParent> {
        match self {
            Self::TableRowGroup
            | Self::TableHeaderGroup
            | Self::TableFooterGroup
            | Self::TableColumnGroup
            | Self::TableCaption => Some(TableParent::Table),
            Self::TableRow => Some(TableParent::Section),
            Self::TableCell => Some(TableParent::Row),
            Self::Inline
            | Self::Block
            | Self::ListItem
            | Self::RunIn
            | Self::Compact
            | Self::Marker
            | Self::Table
            | Self::InlineTable
            | Self::TableColumn
            | Self::None => None,
        }
    }

    /// Whether this is one of the three row-group display types.
    #[must_use]
    pub const fn is_row_group(self) -> bool {
        matches!(
            self,
            Self::TableRowGroup | Self::TableHeaderGroup | Self::TableFooterGroup
        )
    }

    /// Whether boxes of this type participate in an inline formatting context.
    #[must_use]
    pub const fn is_inline_level(self) -> bool {
        matches!(self, Self::Inline | Self::InlineTable)
    }
}

/// Parse a `display` keyword.
///
/// Unknown keywords are reported once through the warning system and yield
/// `None`.
#[must_use]
pub fn parse_display(keyword: &str) -> Option<DisplayType> {
    let parsed = keyword.trim().parse::<DisplayType>().ok();
    if parsed.is_none() {
        warn_once("Style", &format!("unsupported display value '{}'", keyword.trim()));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_strum() {
        assert_eq!(parse_display("table-row-group"), Some(DisplayType::TableRowGroup));
        assert_eq!(parse_display("INLINE-TABLE"), Some(DisplayType::InlineTable));
        assert_eq!(DisplayType::TableHeaderGroup.to_string(), "table-header-group");
        assert_eq!(parse_display("contents"), None);
    }

    #[test]
    fn only_table_internal_types_need_a_parent() {
        assert_eq!(DisplayType::TableCaption.required_table_parent(), Some(TableParent::Table));
        assert_eq!(DisplayType::TableRow.required_table_parent(), Some(TableParent::Section));
        assert_eq!(DisplayType::TableCell.required_table_parent(), Some(TableParent::Row));
        assert_eq!(DisplayType::TableColumn.required_table_parent(), None);
        assert_eq!(DisplayType::Block.required_table_parent(), None);
    }
}
