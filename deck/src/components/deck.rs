//! Deck container - every slide stacked on one scrollable page

use super::SlideCard;
use crate::types::Slide;
use leptos::prelude::*;

/// All slides of a deck, in order, in a vertically stacked centered column.
///
/// There is no navigation between slides and no state: every card is in the
/// markup at once.
#[component]
pub fn DeckView(slides: Vec<Slide>) -> impl IntoView {
    let count = slides.len();

    view! {
        <main class="deck" data-slide-count=count.to_string()>
            <div class="deck-stack">
                {slides.into_iter().enumerate().map(|(index, slide)| {
                    view! { <SlideCard slide=slide index=index /> }
                }).collect::<Vec<_>>()}
            </div>
        </main>
    }
}
