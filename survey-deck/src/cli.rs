//! Command-line arguments and the render pipeline behind them.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use deck_leptos::types::Deck;
use deck_leptos::{PageOptions, render_deck, render_deck_fragment};

use crate::config::SurveyDeckConfig;
use crate::content::survey_process_deck;
use crate::loader::load_deck;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "survey-deck")]
#[command(about = "Render a slide deck (by default the survey process walkthrough) to static HTML")]
#[command(version)]
pub struct Args {
    /// Deck file (.toml or .json). Defaults to the bundled survey deck.
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Output HTML file. Defaults to the config `output`, else stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: ./survey-deck.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit only the deck markup, without <html>/<head>
    #[arg(long)]
    pub fragment: bool,

    /// Page title override
    #[arg(long)]
    pub title: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Where the rendered HTML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Args {
    /// Load config from `--config`, or the default file in `cwd`.
    pub fn load_config(&self, cwd: &Path) -> SurveyDeckConfig {
        match &self.config {
            Some(path) => SurveyDeckConfig::load_from_path(path),
            None => SurveyDeckConfig::load(cwd),
        }
    }

    /// Load `--deck`, or the bundled deck when none was given.
    pub fn load_deck(&self) -> Result<Deck> {
        match &self.deck {
            Some(path) => load_deck(path),
            None => survey_process_deck(),
        }
    }

    /// Page options with precedence: flag > config > deck metadata > default.
    pub fn page_options(&self, config: &SurveyDeckConfig, deck: &Deck) -> PageOptions {
        let mut options = PageOptions::for_deck(deck);
        if let Some(title) = self.title.clone().or_else(|| config.page.title.clone()) {
            options.title = title;
        }
        if let Some(lang) = config.page.lang.clone() {
            options.lang = lang;
        }
        options.extra_css = config.page.extra_css.clone();
        options
    }

    /// Output path with precedence: flag > config > stdout.
    pub fn destination(&self, config: &SurveyDeckConfig) -> Destination {
        self.output
            .clone()
            .or_else(|| config.output.clone())
            .map_or(Destination::Stdout, Destination::File)
    }
}

/// Load, render and write according to `args`.
pub fn run(args: &Args, cwd: &Path) -> Result<()> {
    let config = args.load_config(cwd);
    let deck = args.load_deck()?;
    tracing::info!(slides = deck.len(), "deck loaded");

    let html = if args.fragment {
        render_deck_fragment(&deck)
    } else {
        render_deck(&deck, &args.page_options(&config, &deck))
    };

    match args.destination(&config) {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("failed to write to stdout")?;
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("deck written to {} ({} bytes)", path.display(), html.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["survey-deck"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        assert_eq!(args.deck, None);
        assert_eq!(args.output, None);
        assert!(!args.fragment);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn title_flag_beats_config_and_deck() {
        let deck = Deck::new(vec![]).with_title("From deck").with_lang("es");
        let config = SurveyDeckConfig {
            page: PageConfig {
                title: Some("From config".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let options = args(&["--title", "From flag"]).page_options(&config, &deck);
        assert_eq!(options.title, "From flag");
        assert_eq!(options.lang, "es");

        let options = args(&[]).page_options(&config, &deck);
        assert_eq!(options.title, "From config");

        let options = args(&[]).page_options(&SurveyDeckConfig::default(), &deck);
        assert_eq!(options.title, "From deck");
    }

    #[test]
    fn config_lang_and_css_apply() {
        let config = SurveyDeckConfig {
            page: PageConfig {
                lang: Some("es-MX".into()),
                extra_css: Some("body{}".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let options = args(&[]).page_options(&config, &Deck::default());
        assert_eq!(options.lang, "es-MX");
        assert_eq!(options.extra_css.as_deref(), Some("body{}"));
    }

    #[test]
    fn destination_precedence() {
        let config = SurveyDeckConfig {
            output: Some("from-config.html".into()),
            ..Default::default()
        };

        assert_eq!(
            args(&["-o", "flag.html"]).destination(&config),
            Destination::File("flag.html".into())
        );
        assert_eq!(
            args(&[]).destination(&config),
            Destination::File("from-config.html".into())
        );
        assert_eq!(
            args(&[]).destination(&SurveyDeckConfig::default()),
            Destination::Stdout
        );
    }

    #[test]
    fn run_writes_document_into_nested_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("site/deck.html");
        let args = args(&["--output", out.to_str().expect("utf-8 path")]);

        run(&args, temp.path()).expect("run");

        let html = std::fs::read_to_string(&out).expect("output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("class=\"slide-card\"").count(), 6);
    }

    #[test]
    fn run_uses_config_from_cwd() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("survey-deck.toml"),
            format!(
                "output = {:?}\n[page]\ntitle = \"Configured\"\n",
                temp.path().join("configured.html").display().to_string()
            ),
        )
        .expect("write config");

        run(&args(&[]), temp.path()).expect("run");

        let html = std::fs::read_to_string(temp.path().join("configured.html")).expect("output");
        assert!(html.contains("<title>Configured</title>"));
    }

    #[test]
    fn run_fails_on_bad_deck() {
        let temp = TempDir::new().expect("temp dir");
        let deck = temp.path().join("deck.json");
        std::fs::write(&deck, r#"{ "slides": [{ "title": "x", "icon": "nope" }] }"#)
            .expect("write deck");
        let args = args(&["--deck", deck.to_str().expect("utf-8 path")]);

        let err = run(&args, temp.path()).expect_err("unknown icon");
        assert!(format!("{err:#}").contains("unknown icon `nope`"));
    }
}
