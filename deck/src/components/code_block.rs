//! Verbatim code snippet component

use crate::types::CodeSnippet;
use leptos::prelude::*;

/// Monospaced, scrollable, read-only block showing a snippet exactly as given.
///
/// The text goes through the standard HTML text escaping and nothing else:
/// leading newlines, indentation and trailing whitespace all survive.
#[component]
pub fn CodeBlock(snippet: CodeSnippet) -> impl IntoView {
    // SSR writes an empty text node as " ", so an empty snippet gets no text child
    let code = Some(snippet.code().to_string()).filter(|code| !code.is_empty());

    view! {
        <pre tabindex="0" class="code-block">
            <code>{code}</code>
        </pre>
    }
}
