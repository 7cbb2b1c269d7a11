//! Deck data types.
//!
//! These types are the content side of the crate: a [`Deck`] is an ordered
//! list of [`Slide`]s, and every slide body is a list of [`Block`]s. They are
//!
//! - **Immutable** - slides are validated once and expose read-only accessors
//! - **Serializable** - decks can be exported and re-imported via serde
//! - **Clone-friendly** - components take owned data without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use deck_leptos::types::{Block, CodeSnippet, Deck, Slide};
//!
//! let slide = Slide::new("Backend JSON")
//!     .unwrap()
//!     .with_body(vec![
//!         Block::text("The survey arrives as JSON:"),
//!         Block::Code(CodeSnippet::new("{\n  \"id\": \"survey123\"\n}")),
//!     ]);
//!
//! let deck = Deck::new(vec![slide]);
//! assert_eq!(deck.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// View box used by the bundled Phosphor icon paths.
pub const DEFAULT_VIEW_BOX: &str = "0 0 256 256";

fn default_view_box() -> String {
    DEFAULT_VIEW_BOX.to_string()
}

/// Opaque icon handle: SVG path data plus the view box it was drawn in.
///
/// The renderer never interprets the path; it only places it inside an
/// inline `<svg>` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconGlyph {
    /// SVG path data (the `d` attribute value)
    pub path: String,
    /// SVG `viewBox` attribute
    #[serde(default = "default_view_box")]
    pub view_box: String,
}

impl IconGlyph {
    /// Glyph drawn in the default 256x256 view box.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view_box: default_view_box(),
        }
    }

    /// Override the view box.
    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = view_box.into();
        self
    }
}

/// A block of literal text displayed verbatim.
///
/// Whitespace and newlines are kept exactly as given. The text is never
/// parsed or executed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeSnippet {
    code: String,
}

impl CodeSnippet {
    /// Wrap literal text.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The literal text.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Marker style for a [`ListBlock`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    /// Unordered list
    #[default]
    Bullet,
    /// Ordered list
    Numbered,
}

/// A list of plain-text items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    /// Bullet or numbered markers
    #[serde(default)]
    pub style: ListStyle,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<String>,
}

/// A headed group of nested blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    /// Section heading
    pub heading: String,
    /// Nested content
    #[serde(default)]
    pub body: Vec<Block>,
}

/// One unit of slide body content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of prose
    Text(String),
    /// A bullet or numbered list
    List(ListBlock),
    /// A verbatim code snippet
    Code(CodeSnippet),
    /// A heading followed by nested blocks
    Section(SectionBlock),
}

impl Block {
    /// Paragraph block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Bullet list block.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(ListBlock {
            style: ListStyle::Bullet,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Numbered list block.
    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(ListBlock {
            style: ListStyle::Numbered,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Code snippet block.
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(CodeSnippet::new(code))
    }

    /// Section block with a heading and nested content.
    pub fn section(heading: impl Into<String>, body: Vec<Block>) -> Self {
        Self::Section(SectionBlock {
            heading: heading.into(),
            body,
        })
    }
}

/// Unchecked slide fields, used for deserialization before validation.
#[derive(Deserialize)]
struct RawSlide {
    title: String,
    #[serde(default)]
    icon: Option<IconGlyph>,
    #[serde(default)]
    body: Vec<Block>,
}

impl TryFrom<RawSlide> for Slide {
    type Error = DeckError;

    fn try_from(raw: RawSlide) -> Result<Self, Self::Error> {
        Ok(Slide::new(raw.title)?
            .with_optional_icon(raw.icon)
            .with_body(raw.body))
    }
}

/// One titled, optionally iconed card of static content.
///
/// A slide always has a non-blank title; [`Slide::new`] is the only way to
/// create one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSlide")]
pub struct Slide {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<IconGlyph>,
    body: Vec<Block>,
}

impl Slide {
    /// Create a slide with an empty body and no icon.
    ///
    /// Fails with [`DeckError::EmptyTitle`] when the title is empty or only
    /// whitespace. The title is stored as given, without trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, DeckError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DeckError::EmptyTitle);
        }
        Ok(Self {
            title,
            icon: None,
            body: Vec::new(),
        })
    }

    /// Attach an icon.
    pub fn with_icon(self, icon: IconGlyph) -> Self {
        self.with_optional_icon(Some(icon))
    }

    /// Attach or clear the icon.
    pub fn with_optional_icon(mut self, icon: Option<IconGlyph>) -> Self {
        self.icon = icon;
        self
    }

    /// Replace the body.
    pub fn with_body(mut self, body: Vec<Block>) -> Self {
        self.body = body;
        self
    }

    /// Slide title, exactly as given.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional icon.
    pub fn icon(&self) -> Option<&IconGlyph> {
        self.icon.as_ref()
    }

    /// Body blocks in display order.
    pub fn body(&self) -> &[Block] {
        &self.body
    }
}

/// Ordered collection of slides plus optional page metadata.
///
/// Slide order is presentation order and cannot change after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(default)]
    slides: Vec<Slide>,
}

impl Deck {
    /// Deck without metadata. An empty vector is a valid (empty) deck.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            title: None,
            lang: None,
            slides,
        }
    }

    /// Set the deck title, used as the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content language (BCP 47 tag such as `es` or `en-US`).
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Deck title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Content language, if any.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` when the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slide_rejects_blank_titles() {
        assert_eq!(Slide::new(""), Err(DeckError::EmptyTitle));
        assert_eq!(Slide::new("  \n\t"), Err(DeckError::EmptyTitle));
    }

    #[test]
    fn slide_keeps_title_verbatim() {
        let slide = Slide::new("  Padded title ").expect("valid title");
        assert_eq!(slide.title(), "  Padded title ");
        assert!(slide.icon().is_none());
        assert!(slide.body().is_empty());
    }

    #[test]
    fn deck_preserves_slide_order() {
        let a = Slide::new("A").expect("slide");
        let b = Slide::new("B").expect("slide");
        let deck = Deck::new(vec![b, a]);

        let titles: Vec<&str> = deck.slides().iter().map(Slide::title).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn empty_deck_is_valid() {
        let deck = Deck::new(vec![]);
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.title(), None);
    }

    #[test]
    fn block_serde_uses_variant_keys() {
        let json = serde_json::to_value(Block::numbered(["one", "two"])).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "list": { "style": "numbered", "items": ["one", "two"] } })
        );

        let code: Block = serde_json::from_value(serde_json::json!({ "code": "  x\n" }))
            .expect("deserialize");
        assert_eq!(code, Block::code("  x\n"));
    }

    #[test]
    fn slide_deserialization_validates_title() {
        let err = serde_json::from_value::<Slide>(serde_json::json!({ "title": " " }))
            .expect_err("blank title must fail");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn icon_glyph_defaults_view_box() {
        let glyph: IconGlyph =
            serde_json::from_value(serde_json::json!({ "path": "M0,0Z" })).expect("glyph");
        assert_eq!(glyph, IconGlyph::new("M0,0Z"));
        assert_eq!(glyph.view_box, DEFAULT_VIEW_BOX);
    }
}
