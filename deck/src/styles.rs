//! CSS styles for the rendered deck.
//!
//! The stylesheet is inlined into every document so the output is a single
//! self-contained HTML file.
//!
//! # Customization
//!
//! Extra rules go through [`crate::PageOptions::extra_css`], which is emitted
//! after the bundled stylesheet:
//!
//! ```rust
//! use deck_leptos::PageOptions;
//!
//! let options = PageOptions {
//!     extra_css: Some(".slide-card { max-width: 960px; }".into()),
//!     ..Default::default()
//! };
//! # assert!(options.extra_css.is_some());
//! ```

/// Complete CSS for the deck page.
///
/// - Centered column of cards on a muted page background
/// - Cards with shadow and a bounded width
/// - Monospaced, bounded-height, scrollable code blocks
/// - Dark variant via `prefers-color-scheme`
pub const DECK_CSS: &str = r#"
:root {
    --page-bg: #e5e7eb;
    --card-bg: #ffffff;
    --text-strong: #1f2937;
    --text-body: #374151;
    --accent: #2563eb;
    --code-bg: #f3f4f6;
    --code-text: #1f2937;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', ui-monospace, monospace;
    --card-max: 800px;
    --stack-max: 56rem;
}

@media (prefers-color-scheme: dark) {
    :root {
        --page-bg: #0a0a0a;
        --card-bg: #141414;
        --text-strong: #e5e5e5;
        --text-body: #a8a8a8;
        --accent: #4f81e1;
        --code-bg: #000000;
        --code-text: #d4d4d4;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    min-height: 100%;
}

body {
    font-family: var(--font-sans);
    background: var(--page-bg);
    color: var(--text-body);
    line-height: 1.6;
}

/* Deck container */
.deck {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 48px;
}

.deck-stack {
    width: 100%;
    max-width: var(--stack-max);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 48px;
}

/* Slide card */
.slide-card {
    width: 100%;
    max-width: var(--card-max);
    background: var(--card-bg);
    padding: 24px;
    border-radius: 8px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.slide-header {
    display: flex;
    align-items: center;
    margin-bottom: 16px;
}

.slide-icon {
    display: inline-flex;
    margin-right: 12px;
    color: var(--accent);
}

.slide-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
}

.slide-body {
    font-size: 0.875rem;
}

.slide-text {
    margin: 0 0 12px;
}

.slide-list {
    list-style-position: inside;
    margin: 0 0 12px;
    padding: 0;
}

.slide-list.bullet {
    list-style-type: disc;
}

.slide-list.numbered {
    list-style-type: decimal;
}

.slide-list li + li {
    margin-top: 8px;
}

.slide-section + .slide-section {
    margin-top: 16px;
}

.slide-section h3 {
    margin: 0 0 8px;
    font-size: 1rem;
    font-weight: 600;
    color: var(--text-strong);
}

.slide-section .slide-list {
    margin-left: 8px;
}

/* Code snippets */
.code-block {
    width: 100%;
    max-height: 12rem;
    overflow: auto;
    margin: 12px 0 0;
    padding: 12px;
    border-radius: 8px;
    background: var(--code-bg);
    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
    font-family: var(--font-mono);
    font-size: 0.75rem;
    white-space: pre;
    user-select: text;
}

.code-block code {
    color: var(--code-text);
    font-family: inherit;
}

@media (max-width: 640px) {
    .deck {
        padding: 16px;
    }

    .deck-stack {
        gap: 24px;
    }
}
"#;

/// Content Security Policy for the generated page.
///
/// The document carries no scripts and loads nothing remote; inline styles
/// and data-URI images are the only allowances.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; font-src 'self' data:;";
