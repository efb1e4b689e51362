use dioxus::prelude::*;
use repolens_engine::GroundingSource;

/// Citation chips for the web pages the model consulted.
#[component]
pub fn SourceChips(sources: Vec<GroundingSource>) -> Element {
    rsx! {
        div { class: "sources-section",
            h4 { class: "sources-title", "References & Grounding" }
            div { class: "sources-list",
                for source in sources.iter() {
                    a {
                        key: "{source.uri}",
                        class: "source-chip",
                        href: "{source.uri}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{source.title}"
                    }
                }
            }
        }
    }
}
