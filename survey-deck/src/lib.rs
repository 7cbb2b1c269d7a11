//! # survey-deck
//!
//! Renders the survey data-flow walkthrough (backend JSON to frontend form)
//! as a static HTML page, using [`deck_leptos`] for the markup.
//!
//! ## Modules
//!
//! - [`content`] - the bundled six-slide deck
//! - [`loader`] - TOML/JSON deck files
//! - [`config`] - optional `survey-deck.toml`
//! - [`cli`] - arguments and the render pipeline

pub mod cli;
pub mod config;
pub mod content;
pub mod loader;

pub use cli::{Args, run};
