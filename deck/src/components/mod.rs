//! Leptos UI components for rendering slide decks.
//!
//! Each component is a Leptos `#[component]` function. They are composed by
//! [`crate::render_deck`], but can also be used directly inside another
//! Leptos view.
//!
//! # Component Hierarchy
//!
//! ```text
//! DeckDocument
//! └── DeckView
//!     └── SlideCard (per slide)
//!         ├── Icon (optional)
//!         └── SlideBody
//!             ├── paragraph / list
//!             ├── CodeBlock
//!             └── section (nested blocks)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use deck_leptos::components::SlideCard;
//!
//! view! {
//!     <SlideCard slide=my_slide index=0 />
//! }
//! ```

mod body;
mod code_block;
mod deck;
mod document;
mod icons;
mod slide;

pub use body::{block_view, SlideBody};
pub use code_block::CodeBlock;
pub use deck::DeckView;
pub use document::DeckDocument;
pub use icons::*;
pub use slide::SlideCard;
