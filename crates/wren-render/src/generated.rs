//! `::before` / `::after` generated content.
//!
//! [§ 12.1 The :before and :after pseudo-elements](https://www.w3.org/TR/CSS2/generate.html#before-after-content)
//!
//! "Authors specify the style and location of generated content with the
//! :before and :after pseudo-elements. As their names indicate, the :before
//! and :after pseudo-elements specify the location of content before and
//! after an element's document tree content."

use std::rc::Rc;

use wren_style::{ContentData, DisplayType, Float, Overflow, Position, PseudoId, RenderStyle};

use crate::arena::RenderId;
use crate::tree::RenderTree;

impl RenderTree {
    /// Expand `container`'s `pseudo` content next to `child`.
    ///
    /// `::before` content goes in front of `child`; `::after` content is
    /// appended. Nothing happens when `child` is already generated content of
    /// the same pseudo-element, so the call is idempotent as long as callers
    /// pass the current first (or last) child.
    pub fn insert_pseudo_child(
        &mut self,
        container: RenderId,
        pseudo: PseudoId,
        child: Option<RenderId>,
    ) {
        if pseudo == PseudoId::NoPseudo {
            return;
        }
        if let Some(child) = child
            && self[child].style.style_type == pseudo
        {
            return;
        }

        let Some(pseudo_style) = self[container].style.pseudo_style(pseudo) else {
            return;
        };
        if pseudo_style.display == DisplayType::None {
            return;
        }

        // [§ 12.1](https://www.w3.org/TR/CSS2/generate.html#before-after-content)
        //
        // "The :before and :after pseudo-elements interact with other boxes
        // as if they were real elements inserted just inside their
        // associated element." They never float or take themselves out of
        // flow here.
        let mut style = RenderStyle::clone(pseudo_style);
        style.position = Position::Static;
        style.float = Float::None;
        style.overflow = Overflow::Visible;
        if self[container].kind.is_inline_flow() {
            style.display = DisplayType::Inline;
        }
        let style = Rc::new(style);

        let insert_before = match pseudo {
            PseudoId::Before => child,
            _ => None,
        };

        for item in style.content() {
            match item {
                ContentData::Text(text) => {
                    let wrapper = self.create_flow(Rc::clone(&style));
                    let text = self.create_text(Rc::clone(&style), text.as_str());
                    self.add_child(wrapper, text, None);
                    self.add_child(container, wrapper, insert_before);
                    self.close(text);
                    self.close(wrapper);
                }
                ContentData::Image(resource) => {
                    let image = self.create_image(Rc::clone(&style), Some(resource.clone()));
                    self.add_child(container, image, insert_before);
                    self.close(image);
                }
            }
        }
    }

    /// Expand both pseudo-elements of `container`: `::before` ahead of the
    /// current first child and `::after` behind the current last child.
    pub fn update_pseudo_children(&mut self, container: RenderId) {
        let first = self[container].first_child;
        self.insert_pseudo_child(container, PseudoId::Before, first);
        let last = self[container].last_child;
        self.insert_pseudo_child(container, PseudoId::After, last);
    }
}
