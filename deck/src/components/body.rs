//! Slide body rendering - prose, lists, code and nested sections

use super::CodeBlock;
use crate::types::{Block, ListBlock, ListStyle, SectionBlock};
use leptos::prelude::*;

/// Content area of a slide. An empty body renders an empty container.
#[component]
pub fn SlideBody(blocks: Vec<Block>) -> impl IntoView {
    view! {
        <div class="slide-body">
            {blocks.into_iter().map(block_view).collect::<Vec<_>>()}
        </div>
    }
}

/// Render one block. Sections recurse, so the result is type-erased.
pub fn block_view(block: Block) -> AnyView {
    match block {
        Block::Text(text) => {
            // SSR writes an empty text node as " "
            let text = Some(text).filter(|text| !text.is_empty());
            view! { <p class="slide-text">{text}</p> }.into_any()
        }
        Block::List(list) => list_view(list),
        Block::Code(snippet) => view! { <CodeBlock snippet=snippet /> }.into_any(),
        Block::Section(section) => section_view(section),
    }
}

fn list_view(list: ListBlock) -> AnyView {
    let items = list
        .items
        .into_iter()
        .map(|item| view! { <li>{item}</li> })
        .collect::<Vec<_>>();

    match list.style {
        ListStyle::Bullet => view! { <ul class="slide-list bullet">{items}</ul> }.into_any(),
        ListStyle::Numbered => view! { <ol class="slide-list numbered">{items}</ol> }.into_any(),
    }
}

fn section_view(section: SectionBlock) -> AnyView {
    view! {
        <section class="slide-section">
            <h3>{section.heading}</h3>
            {section.body.into_iter().map(block_view).collect::<Vec<_>>()}
        </section>
    }
    .into_any()
}
