//! Root document component - the complete HTML page
//!
//! Head with charset, CSP and inline stylesheet; body with the deck.

use super::DeckView;
use crate::PageOptions;
use crate::styles::{CSP, DECK_CSS};
use crate::types::Slide;
use leptos::prelude::*;

/// The complete HTML document for a deck
#[component]
pub fn DeckDocument(slides: Vec<Slide>, options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        extra_css,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{DECK_CSS}</style>
                {extra_css.map(|css| view! { <style>{css}</style> })}
            </head>
            <body>
                <DeckView slides=slides />
            </body>
        </html>
    }
}
