use dioxus::prelude::*;

use super::BlockView;

/// Renders a markdown string through the engine, one component per
/// block.
///
/// Dioxus memoizes components on their props, so the engine re-tokenizes
/// only when the content string itself changes, not on every UI refresh.
#[component]
pub fn MarkdownView(content: String) -> Element {
    let blocks = repolens_engine::render(&content);

    rsx! {
        div { class: "markdown-view",
            for (index, block) in blocks.into_iter().enumerate() {
                BlockView { key: "{index}", block }
            }
        }
    }
}
