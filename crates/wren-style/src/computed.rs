//! Computed style of a render object.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! Only the properties that decide the shape of the render tree are carried:
//! display, positioning, floating, overflow, generated content, and the
//! inherited text properties consulted when generated text is finalized.

use std::rc::Rc;

use serde::Serialize;

use crate::content::ContentData;
use crate::display::DisplayType;
use crate::values::{Float, Overflow, Position, PseudoId, WhiteSpace};

/// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// "Initial: medium", which user agents map to 16px.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// The computed style shared by one or more render objects.
///
/// Styles are shared read-mostly through `Rc`; code that needs an adjusted
/// copy clones it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStyle {
    /// [§ 9.2.4 'display'](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    pub display: DisplayType,
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    pub position: Position,
    /// [§ 9.5.1 'float'](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    pub float: Float,
    /// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
    pub overflow: Overflow,
    /// [§ 16.6 'white-space'](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
    ///
    /// Inherited: yes
    pub white_space: WhiteSpace,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop), in px.
    ///
    /// Inherited: yes
    pub font_size: f32,
    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    ///
    /// Inherited: yes
    pub font_family: Option<String>,
    /// Which pseudo-element this style was resolved for.
    pub style_type: PseudoId,
    /// [§ 12.2 'content'](https://www.w3.org/TR/CSS2/generate.html#content)
    ///
    /// Only meaningful on `::before` / `::after` styles.
    pub content: Vec<ContentData>,
    /// Resolved `::before` / `::after` styles of the owning element.
    #[serde(skip)]
    pseudo_styles: Vec<Rc<RenderStyle>>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            display: DisplayType::default(),
            position: Position::default(),
            float: Float::default(),
            overflow: Overflow::default(),
            white_space: WhiteSpace::default(),
            font_size: DEFAULT_FONT_SIZE_PX,
            font_family: None,
            style_type: PseudoId::NoPseudo,
            content: Vec::new(),
            pseudo_styles: Vec::new(),
        }
    }
}

impl RenderStyle {
    /// A style with initial values and the given display type.
    #[must_use]
    pub fn new(display: DisplayType) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// [§ 7.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
    ///
    /// "Some values are inherited by the children of an element in the
    /// document tree." Builds a fresh style holding `parent`'s inherited
    /// properties and initial values for everything else.
    #[must_use]
    pub fn inherit_from(parent: &Self) -> Self {
        Self {
            white_space: parent.white_space,
            font_size: parent.font_size,
            font_family: parent.font_family.clone(),
            ..Self::default()
        }
    }

    /// Builder form of assigning `display`.
    #[must_use]
    pub fn with_display(mut self, display: DisplayType) -> Self {
        self.display = display;
        self
    }

    /// Look up the resolved style for a pseudo-element.
    #[must_use]
    pub fn pseudo_style(&self, pseudo: PseudoId) -> Option<&Rc<Self>> {
        self.pseudo_styles.iter().find(|s| s.style_type == pseudo)
    }

    /// Install (or replace) the resolved style for a pseudo-element.
    ///
    /// The stored style's `style_type` is set to `pseudo`.
    pub fn set_pseudo_style(&mut self, pseudo: PseudoId, mut style: Self) {
        style.style_type = pseudo;
        self.pseudo_styles.retain(|s| s.style_type != pseudo);
        self.pseudo_styles.push(Rc::new(style));
    }

    /// The generated content items, in document order.
    #[must_use]
    pub fn content(&self) -> &[ContentData] {
        &self.content
    }

    /// Whether the box is taken out of flow by `float`.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.float != Float::None
    }

    /// Whether `position` is anything other than `static`.
    #[must_use]
    pub fn is_positioned(&self) -> bool {
        self.position != Position::Static
    }

    /// Whether `overflow` clips the box's content.
    #[must_use]
    pub fn has_overflow_clip(&self) -> bool {
        self.overflow != Overflow::Visible
    }

    /// [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
    ///
    /// Whether a box with this style gets its own visual layer.
    #[must_use]
    pub fn requires_layer(&self) -> bool {
        self.is_positioned() || self.has_overflow_clip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inheritance_copies_only_inherited_properties() {
        let mut parent = RenderStyle::new(DisplayType::Block);
        parent.font_size = 20.0;
        parent.white_space = WhiteSpace::Pre;
        parent.position = Position::Absolute;

        let child = RenderStyle::inherit_from(&parent);
        assert_eq!(child.display, DisplayType::Inline);
        assert_eq!(child.position, Position::Static);
        assert_eq!(child.white_space, WhiteSpace::Pre);
        assert!((child.font_size - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pseudo_styles_are_tagged_and_replaced() {
        let mut style = RenderStyle::new(DisplayType::Block);
        style.set_pseudo_style(PseudoId::Before, RenderStyle::new(DisplayType::Inline));
        style.set_pseudo_style(PseudoId::Before, RenderStyle::new(DisplayType::Block));

        let before = style.pseudo_style(PseudoId::Before).expect("before style");
        assert_eq!(before.style_type, PseudoId::Before);
        assert_eq!(before.display, DisplayType::Block);
        assert!(style.pseudo_style(PseudoId::After).is_none());
    }
}
