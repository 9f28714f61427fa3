//! Generated content items.
//!
//! [§ 12.2 The 'content' property](https://www.w3.org/TR/CSS2/generate.html#content)
//!
//! "This property is used with the :before and :after pseudo-elements to
//! generate content in a document."

use serde::Serialize;

/// An image referenced from `content: url(...)`.
///
/// Loading is outside the render tree; the intrinsic size is whatever the
/// loader reported, if anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResource {
    /// The resolved URL.
    pub url: String,
    /// Intrinsic `(width, height)` in px, once known.
    pub intrinsic_size: Option<(f32, f32)>,
}

impl ImageResource {
    /// An image whose size is not known yet.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            intrinsic_size: None,
        }
    }

    /// An image with a known intrinsic size.
    #[must_use]
    pub fn with_size(url: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            url: url.into(),
            intrinsic_size: Some((width, height)),
        }
    }
}

/// One item of a `content` value, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ContentData {
    /// "`<string>`: Text content."
    Text(String),
    /// "`<uri>`: The value is a URI that designates an external resource
    /// (such as an image)."
    Image(ImageResource),
}

impl ContentData {
    /// The literal text, for text items.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }
}
