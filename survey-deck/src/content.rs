//! The bundled survey-process deck.
//!
//! Six slides walking through how a survey goes from the backend JSON
//! representation to a rendered frontend form and back as submitted answers.
//! The text lives in `content/survey_process.toml`; nothing here knows how it
//! is rendered.

use anyhow::{Context, Result};
use deck_leptos::types::Deck;

use crate::loader::{DeckFormat, parse_deck};

/// Raw TOML of the bundled deck.
pub const SURVEY_PROCESS_TOML: &str = include_str!("../content/survey_process.toml");

/// Parse the bundled deck.
pub fn survey_process_deck() -> Result<Deck> {
    parse_deck(SURVEY_PROCESS_TOML, DeckFormat::Toml).context("bundled survey deck is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_leptos::types::{Block, ListStyle};
    use deck_leptos::{PageOptions, render_deck};
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_deck_has_six_slides_in_order() {
        let deck = survey_process_deck().expect("bundled deck");
        let titles: Vec<&str> = deck.slides().iter().map(|s| s.title()).collect();

        assert_eq!(
            titles,
            vec![
                "Proceso de Surveys: Del Backend al Frontend",
                "Ejemplo de JSON del Backend",
                "Procesamiento en el Frontend",
                "Renderizado del Formulario",
                "Envío de Respuestas",
                "Ventajas y Próximos Pasos",
            ]
        );
        assert_eq!(deck.lang(), Some("es"));
        assert!(deck.slides().iter().all(|s| s.icon().is_some()));
    }

    #[test]
    fn backend_json_example_is_a_single_snippet() {
        let deck = survey_process_deck().expect("bundled deck");
        let body = deck.slides()[1].body();

        assert_eq!(body.len(), 1);
        let Block::Code(snippet) = &body[0] else {
            panic!("expected code block, got {:?}", body[0]);
        };
        assert!(snippet.code().starts_with("{\n  \"id\": \"survey123\","));
        assert!(snippet.code().contains("      \"validation\": {\"required\":true,\"min\":18,\"max\":99},"));
    }

    #[test]
    fn processing_slide_lists_steps_then_code() {
        let deck = survey_process_deck().expect("bundled deck");
        let body = deck.slides()[2].body();

        match &body[0] {
            Block::List(list) => {
                assert_eq!(list.style, ListStyle::Numbered);
                assert_eq!(list.items.len(), 3);
            }
            other => panic!("expected list, got {other:?}"),
        }
        assert!(matches!(body[1], Block::Code(_)));
    }

    #[test]
    fn form_snippet_keeps_indented_blank_line() {
        let deck = survey_process_deck().expect("bundled deck");
        let Block::Code(snippet) = &deck.slides()[3].body()[1] else {
            panic!("expected code block");
        };

        assert!(snippet.code().contains("useState({});\n  \n  const renderField"));
    }

    #[test]
    fn closing_slide_has_two_sections() {
        let deck = survey_process_deck().expect("bundled deck");
        let headings: Vec<&str> = deck.slides()[5]
            .body()
            .iter()
            .filter_map(|block| match block {
                Block::Section(section) => Some(section.heading.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(headings, vec!["Ventajas:", "Próximos pasos:"]);
    }

    #[test]
    fn bundled_deck_renders_six_cards() {
        let deck = survey_process_deck().expect("bundled deck");
        let html = render_deck(&deck, &PageOptions::for_deck(&deck));

        assert_eq!(html.matches("class=\"slide-card\"").count(), 6);
        assert_eq!(html.matches("class=\"code-block\"").count(), 4);
        assert!(html.contains("<html lang=\"es\""));
        assert!(html.contains("&lt;DynamicForm structure={formStructure}"));
    }
}
