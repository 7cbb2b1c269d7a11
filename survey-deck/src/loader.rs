//! Deck file loading (TOML or JSON).

use std::path::Path;

use anyhow::{Context, Result, bail};
use deck_leptos::components::PhosphorIcons;
use deck_leptos::source::DeckSource;
use deck_leptos::types::Deck;

/// Serialization format of a deck file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckFormat {
    Toml,
    Json,
}

impl DeckFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "cannot tell deck format of {} (expected .toml or .json)",
                path.display()
            ),
        }
    }
}

/// Parse deck text and resolve it against the bundled Phosphor icons.
pub fn parse_deck(text: &str, format: DeckFormat) -> Result<Deck> {
    let source: DeckSource = match format {
        DeckFormat::Toml => toml::from_str(text).context("invalid TOML deck")?,
        DeckFormat::Json => serde_json::from_str(text).context("invalid JSON deck")?,
    };

    let deck = source.into_deck(&PhosphorIcons)?;
    tracing::debug!(slides = deck.len(), ?format, "parsed deck");
    Ok(deck)
}

/// Read and parse a deck file.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let format = DeckFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck {}", path.display()))?;

    parse_deck(&text, format).with_context(|| format!("failed to load deck {}", path.display()))
}
