//! Keyword-valued properties that influence render-tree shape.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "Initial: static"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Position {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow...
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the 'top',
    /// 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but in addition, the box is fixed with respect to some reference."
    Fixed,
}

/// [§ 9.5.1 Positioning the float: the 'float' property](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Float {
    /// "The box is not floated."
    #[default]
    None,
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "Similar to 'left', except the box is floated to the right."
    Right,
}

/// [§ 11.1.1 Overflow: the 'overflow' property](https://www.w3.org/TR/CSS2/visufx.html#overflow)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Overflow {
    /// "This value indicates that content is not clipped."
    #[default]
    Visible,
    /// "This value indicates that the content is clipped."
    Hidden,
    /// "This value indicates that the content is clipped and that ... a
    /// scrolling mechanism should be displayed."
    Scroll,
    /// "The behavior of the 'auto' value is user agent-dependent."
    Auto,
}

/// [§ 16.6 Whitespace: the 'white-space' property](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
///
/// Inherited: yes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WhiteSpace {
    /// "This value directs user agents to collapse sequences of white space."
    #[default]
    Normal,
    /// "This value prevents user agents from collapsing sequences of white space."
    Pre,
    /// "This value collapses white space as for 'normal', but suppresses line
    /// breaks within text."
    Nowrap,
    /// "This value prevents user agents from collapsing sequences of white
    /// space. Lines are broken at preserved newline characters."
    PreWrap,
    /// "This value directs user agents to collapse sequences of white space.
    /// Lines are broken at preserved newline characters."
    PreLine,
}

impl WhiteSpace {
    /// Whether runs of spaces and tabs collapse to a single space.
    #[must_use]
    pub const fn collapses_spaces(self) -> bool {
        matches!(self, Self::Normal | Self::Nowrap | Self::PreLine)
    }

    /// Whether newlines survive collapsing.
    #[must_use]
    pub const fn preserves_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap | Self::PreLine)
    }
}

/// [§ 12.1 The :before and :after pseudo-elements](https://www.w3.org/TR/CSS2/generate.html#before-after-content)
///
/// Which pseudo-element a style was resolved for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PseudoId {
    /// The style of a real box, not of a pseudo-element.
    #[default]
    NoPseudo,
    /// `::before`
    Before,
    /// `::after`
    After,
}
