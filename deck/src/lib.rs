//! # deck-leptos
//!
//! Leptos SSR renderer for static slide decks.
//!
//! A deck is an ordered list of slides; each slide is a titled card with an
//! optional icon and a body of paragraphs, lists, nested sections and verbatim
//! code snippets. Every slide is rendered at once onto a single scrollable
//! page: there is no navigation and no client-side state.
//!
//! ## Features
//!
//! - **Zero JavaScript** - Pure SSR, no hydration script is emitted
//! - **Content as data** - Decks are built in code or loaded from TOML/JSON
//! - **Pluggable icons** - Icons are resolved through an [`components::IconSet`]
//! - **Self-contained output** - One HTML file with inline CSS
//!
//! The markup comes from Leptos' `to_html`, so it carries `<!>` comment
//! markers between adjacent dynamic nodes, and `class` is always written
//! after the other attributes of an element. Browsers ignore both.
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_leptos::{render_deck, PageOptions};
//! use deck_leptos::types::{Block, Deck, Slide};
//!
//! let deck = Deck::new(vec![
//!     Slide::new("Example").unwrap().with_body(vec![Block::text("Hello")]),
//! ]);
//!
//! let html = render_deck(&deck, &PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Deck, slide and body block data structures
//! - [`source`] - Deck descriptions as found in files
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - Construction errors

#![doc(html_root_url = "https://docs.rs/deck-leptos/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod source;
pub mod styles;
pub mod types;

use components::{DeckDocument, DeckView};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::Deck;

pub use error::DeckError;

/// Render a deck as a complete HTML document.
///
/// The result starts with `<!DOCTYPE html>` and inlines the stylesheet, so
/// it can be written straight to a file.
///
/// # Example
///
/// ```rust
/// use deck_leptos::{render_deck, PageOptions};
/// use deck_leptos::types::Deck;
///
/// let html = render_deck(&Deck::new(vec![]), &PageOptions::default());
/// assert!(html.contains("<title>Slide deck</title>"));
/// ```
pub fn render_deck(deck: &Deck, options: &PageOptions) -> String {
    tracing::debug!(slides = deck.len(), title = %options.title, "rendering deck document");

    let doc = view! {
        <DeckDocument slides=deck.slides().to_vec() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the deck container, for embedding into an existing page.
///
/// The caller is responsible for including [`styles::DECK_CSS`].
pub fn render_deck_fragment(deck: &Deck) -> String {
    tracing::debug!(slides = deck.len(), "rendering deck fragment");

    view! { <DeckView slides=deck.slides().to_vec() /> }.to_html()
}

/// Page-level settings for [`render_deck`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// CSS appended after the bundled stylesheet
    pub extra_css: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Slide deck".to_string(),
            lang: "en".to_string(),
            extra_css: None,
        }
    }
}

impl PageOptions {
    /// Defaults, with title and language taken from the deck when it has them.
    pub fn for_deck(deck: &Deck) -> Self {
        let defaults = Self::default();
        Self {
            title: deck.title().map(str::to_string).unwrap_or(defaults.title),
            lang: deck.lang().map(str::to_string).unwrap_or(defaults.lang),
            extra_css: None,
        }
    }
}
