//! Slide card component - one titled card per slide
//!
//! Card layout: optional icon and title on a header row, body underneath.

use super::{Icon, SlideBody};
use crate::types::Slide;
use leptos::prelude::*;

/// A single slide rendered as a self-contained card
#[component]
pub fn SlideCard(
    slide: Slide,
    /// Zero-based position in the deck, used for the anchor id
    index: usize,
) -> impl IntoView {
    let card_id = format!("slide-{}", index + 1);
    let icon = slide.icon().cloned();
    let title = slide.title().to_string();
    let blocks = slide.body().to_vec();

    view! {
        <article id=card_id class="slide-card">
            <header class="slide-header">
                {icon.map(|glyph| view! {
                    <span class="slide-icon">
                        <Icon glyph=glyph />
                    </span>
                })}
                <h2 class="slide-title">{title}</h2>
            </header>
            <SlideBody blocks=blocks />
        </article>
    }
}
