use dioxus::prelude::*;
use repolens_engine::RenderedBlock;

use super::{CodePanel, TextLine};

#[component]
pub fn BlockView(block: RenderedBlock) -> Element {
    match block {
        RenderedBlock::Text { lines } => rsx! {
            div { class: "prose-block",
                for (index, line) in lines.into_iter().enumerate() {
                    TextLine { key: "{index}", line }
                }
            }
        },
        RenderedBlock::Code {
            tag,
            lines,
            highlighted,
        } => rsx! {
            CodePanel { tag, lines, highlighted }
        },
    }
}
