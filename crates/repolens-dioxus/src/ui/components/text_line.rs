use dioxus::prelude::*;
use repolens_engine::{InlineSpan, RenderLine};

#[component]
pub fn TextLine(line: RenderLine) -> Element {
    match line {
        RenderLine::Heading { level, text } => match level {
            2 => rsx! { h2 { class: "heading level-2", "{text}" } },
            _ => rsx! { h3 { class: "heading level-3", "{text}" } },
        },
        RenderLine::ListItem { spans } => rsx! {
            div { class: "list-item",
                span { class: "bullet", "●" }
                span { class: "list-text",
                    InlineSpans { spans }
                }
            }
        },
        RenderLine::Blank => rsx! {
            div { class: "spacer" }
        },
        RenderLine::Paragraph { spans } => rsx! {
            p { class: "paragraph",
                InlineSpans { spans }
            }
        },
    }
}

/// Renders the inline spans of one prose line.
///
/// Span text always lands in text nodes, never in markup, so untrusted
/// model output cannot inject elements.
#[component]
pub fn InlineSpans(spans: Vec<InlineSpan>) -> Element {
    rsx! {
        for span in spans.into_iter() {
            {render_span(span)}
        }
    }
}

fn render_span(span: InlineSpan) -> Element {
    match span {
        InlineSpan::Text(text) => rsx! {
            span { "{text}" }
        },
        InlineSpan::Strong(text) => rsx! {
            strong { class: "strong", "{text}" }
        },
        InlineSpan::Code(text) => rsx! {
            code { class: "inline-code", "{text}" }
        },
        InlineSpan::Link { text, href } => rsx! {
            a {
                class: "external-link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text}"
            }
        },
    }
}
