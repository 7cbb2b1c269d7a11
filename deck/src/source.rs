//! Deck descriptions as they appear in files.
//!
//! A [`DeckSource`] is the serde-facing shape of a deck: slides may name
//! their icon instead of embedding path data, and titles are not validated
//! yet. [`DeckSource::into_deck`] checks every slide and resolves icon names
//! through an [`IconSet`].
//!
//! ```rust
//! use deck_leptos::components::PhosphorIcons;
//! use deck_leptos::source::DeckSource;
//!
//! let source: DeckSource = serde_json::from_str(r#"{
//!     "slides": [
//!         { "title": "Backend JSON", "icon": "code", "body": [{ "text": "Hello" }] }
//!     ]
//! }"#).unwrap();
//!
//! let deck = source.into_deck(&PhosphorIcons).unwrap();
//! assert_eq!(deck.slides()[0].title(), "Backend JSON");
//! assert!(deck.slides()[0].icon().is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::components::IconSet;
use crate::error::DeckError;
use crate::types::{Block, Deck, IconGlyph, Slide};

/// Icon reference in a deck file: a name or inline path data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSpec {
    /// Name looked up in an [`IconSet`], e.g. `"code"`
    Named(String),
    /// Literal glyph, e.g. `{ path = "M0,0Z", view_box = "0 0 24 24" }`
    Inline(IconGlyph),
}

/// One slide as written in a deck file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSource {
    /// Card title (must not be blank)
    #[serde(default)]
    pub title: String,
    /// Optional icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSpec>,
    /// Body blocks
    #[serde(default)]
    pub body: Vec<Block>,
}

/// A whole deck as written in a deck file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSource {
    /// Default page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Content language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<SlideSource>,
}

impl DeckSource {
    /// Validate titles and resolve icons, producing a renderable [`Deck`].
    ///
    /// Fails on the first slide with a blank title
    /// ([`DeckError::MissingTitle`]) or an icon name `icons` cannot resolve
    /// ([`DeckError::UnknownIcon`]).
    pub fn into_deck(self, icons: &impl IconSet) -> Result<Deck, DeckError> {
        let slides = self
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, source)| source.into_slide(index, icons))
            .collect::<Result<Vec<_>, _>>()?;

        let mut deck = Deck::new(slides);
        if let Some(title) = self.title {
            deck = deck.with_title(title);
        }
        if let Some(lang) = self.lang {
            deck = deck.with_lang(lang);
        }
        Ok(deck)
    }
}

impl SlideSource {
    fn into_slide(self, index: usize, icons: &impl IconSet) -> Result<Slide, DeckError> {
        let slide = Slide::new(self.title).map_err(|_| DeckError::MissingTitle { index })?;

        let icon = match self.icon {
            None => None,
            Some(IconSpec::Inline(glyph)) => Some(glyph),
            Some(IconSpec::Named(name)) => match icons.resolve(&name) {
                Some(glyph) => Some(glyph),
                None => return Err(DeckError::UnknownIcon { slide: index, name }),
            },
        };

        Ok(slide.with_optional_icon(icon).with_body(self.body))
    }
}
