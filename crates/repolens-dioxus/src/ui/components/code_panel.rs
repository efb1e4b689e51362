use dioxus::prelude::*;
use repolens_engine::HighlightSpan;

/// Syntax-highlighted code panel with an optional language label.
/// Highlighting is best-effort: without styled rows the raw content is
/// shown as-is.
#[component]
pub fn CodePanel(
    tag: Option<String>,
    lines: Vec<String>,
    highlighted: Option<Vec<Vec<HighlightSpan>>>,
) -> Element {
    let body = match &highlighted {
        Some(rows) => rsx! {
            for row in rows.iter() {
                {highlighted_row(row)}
            }
        },
        None => {
            let raw = lines.join("\n");
            rsx! { "{raw}" }
        }
    };

    rsx! {
        div { class: "code-block",
            if let Some(tag) = tag.as_ref() {
                div { class: "code-lang-label", "{tag}" }
            }
            pre { class: "code-body",
                code { {body} }
            }
        }
    }
}

fn highlighted_row(row: &[HighlightSpan]) -> Element {
    rsx! {
        span { class: "code-line",
            for piece in row.iter() {
                {highlighted_piece(piece)}
            }
        }
    }
}

fn highlighted_piece(piece: &HighlightSpan) -> Element {
    let (r, g, b) = piece.color;
    let style = format!("color: rgb({r}, {g}, {b})");
    let text = piece.text.clone();
    rsx! {
        span { style: "{style}", "{text}" }
    }
}
