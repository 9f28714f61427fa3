//! Computed styles for the Wren render tree.
//!
//! # Scope
//!
//! This crate is the style side of render-tree construction. It provides:
//! - **Display types** ([§ 9.2.4](https://www.w3.org/TR/CSS2/visuren.html#display-prop))
//!   and the table-nesting requirement of each
//!   ([§ 17.2.1](https://www.w3.org/TR/CSS2/tables.html#anonymous-boxes))
//! - **Render styles** with inheritance and `::before` / `::after` lookup
//! - **Generated content** items
//!   ([§ 12.2](https://www.w3.org/TR/CSS2/generate.html#content))
//! - **Declaration application** for fixtures and tests
//!
//! # Not Implemented
//!
//! - Selector matching and the cascade; styles arrive already computed
//! - Counters, quotes and `attr()` in `content`

pub mod computed;
pub mod content;
pub mod display;
pub mod parse;
pub mod values;

// Re-exports for convenience
pub use computed::{DEFAULT_FONT_SIZE_PX, RenderStyle};
pub use content::{ContentData, ImageResource};
pub use display::{DisplayType, TableParent, parse_display};
pub use parse::{StyleError, parse_declarations};
pub use values::{Float, Overflow, Position, PseudoId, WhiteSpace};
