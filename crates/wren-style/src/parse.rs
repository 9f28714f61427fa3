//! Applying `property: value` declarations to a [`RenderStyle`].
//!
//! This is not a CSS parser. It reads the flat declaration lists that
//! fixtures and tests use to describe already-computed styles, e.g.
//! `display: table-row; position: relative; content: "§ " url(mark.png)`.

use thiserror::Error;

use wren_common::warning::warn_once;

use crate::computed::RenderStyle;
use crate::content::{ContentData, ImageResource};
use crate::display::parse_display;
use crate::values::{Float, Overflow, Position, WhiteSpace};

/// Why a declaration list could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A declaration had no `:` separating property from value.
    #[error("declaration '{0}' is missing a ':'")]
    MissingColon(String),
    /// The value is not valid for the property.
    #[error("invalid value '{value}' for property '{property}'")]
    InvalidValue {
        /// Property name as written.
        property: String,
        /// Value as written.
        value: String,
    },
    /// A quoted string in `content` never closed.
    #[error("unterminated string in content value '{0}'")]
    UnterminatedString(String),
}

/// Parse a `;`-separated declaration list into a fresh style.
///
/// # Errors
///
/// Returns the first [`StyleError`] encountered. Unknown properties are
/// reported through the warning system and skipped.
pub fn parse_declarations(text: &str) -> Result<RenderStyle, StyleError> {
    let mut style = RenderStyle::default();
    style.apply_declarations(text)?;
    Ok(style)
}

fn invalid(property: &str, value: &str) -> StyleError {
    StyleError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

impl RenderStyle {
    /// Apply every declaration of a `;`-separated list, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] encountered; declarations before it
    /// have already been applied.
    pub fn apply_declarations(&mut self, text: &str) -> Result<(), StyleError> {
        for declaration in split_declarations(text) {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| StyleError::MissingColon(declaration.to_string()))?;
            self.apply_declaration(property.trim(), value.trim())?;
        }
        Ok(())
    }

    /// Apply a single declaration.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] when `value` is not valid for a
    /// known `property`.
    pub fn apply_declaration(&mut self, property: &str, value: &str) -> Result<(), StyleError> {
        match property.to_ascii_lowercase().as_str() {
            "display" => {
                self.display = parse_display(value).ok_or_else(|| invalid(property, value))?;
            }
            "position" => {
                self.position = value.parse::<Position>().map_err(|_| invalid(property, value))?;
            }
            "float" => {
                self.float = value.parse::<Float>().map_err(|_| invalid(property, value))?;
            }
            "overflow" => {
                self.overflow = value.parse::<Overflow>().map_err(|_| invalid(property, value))?;
            }
            "white-space" => {
                self.white_space =
                    value.parse::<WhiteSpace>().map_err(|_| invalid(property, value))?;
            }
            "font-size" => {
                let px = value.strip_suffix("px").unwrap_or(value).trim();
                self.font_size = px
                    .parse::<f32>()
                    .ok()
                    .filter(|size| *size >= 0.0)
                    .ok_or_else(|| invalid(property, value))?;
            }
            "font-family" => {
                self.font_family = Some(value.trim_matches(['"', '\'']).to_string());
            }
            "content" => {
                self.content = parse_content(value)?;
            }
            _ => {
                warn_once("Style", &format!("unsupported property '{property}'"));
            }
        }
        Ok(())
    }
}

/// Split on `;` outside of quoted strings.
fn split_declarations(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, ';') => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// [§ 12.2 The 'content' property](https://www.w3.org/TR/CSS2/generate.html#content)
///
/// "Value: normal | none | [ `<string>` | `<uri>` ]+ | inherit"
fn parse_content(value: &str) -> Result<Vec<ContentData>, StyleError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("normal") {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut rest = trimmed;
    while !rest.is_empty() {
        if let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) {
            let body = &rest[1..];
            let end = body
                .find(quote)
                .ok_or_else(|| StyleError::UnterminatedString(value.to_string()))?;
            items.push(ContentData::Text(body[..end].to_string()));
            rest = body[end + 1..].trim_start();
        } else if rest.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("url(")) {
            let end = rest.find(')').ok_or_else(|| invalid("content", value))?;
            let url = rest[4..end].trim().trim_matches(['"', '\'']);
            items.push(ContentData::Image(ImageResource::new(url)));
            rest = rest[end + 1..].trim_start();
        } else {
            return Err(invalid("content", value));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayType;

    #[test]
    fn semicolons_inside_strings_do_not_split() {
        let style = parse_declarations(r#"display: block; content: "a;b" url(x.png)"#)
            .expect("valid declarations");
        assert_eq!(style.display, DisplayType::Block);
        assert_eq!(
            style.content,
            vec![
                ContentData::Text("a;b".to_string()),
                ContentData::Image(ImageResource::new("x.png")),
            ]
        );
    }

    #[test]
    fn bad_values_are_errors() {
        assert_eq!(
            parse_declarations("position: sideways"),
            Err(StyleError::InvalidValue {
                property: "position".to_string(),
                value: "sideways".to_string(),
            })
        );
        assert!(matches!(
            parse_declarations("content: \"open"),
            Err(StyleError::UnterminatedString(_))
        ));
        assert!(matches!(
            parse_declarations("display block"),
            Err(StyleError::MissingColon(_))
        ));
    }
}
