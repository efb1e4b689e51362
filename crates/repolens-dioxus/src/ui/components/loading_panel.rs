use dioxus::prelude::*;

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "loading-panel",
            div { class: "spinner" }
            h3 { class: "loading-title", "Architecting V2 & Migration Guide" }
            p { class: "loading-detail",
                "Drafting AsyncIO patterns, robustness checks, and documenting migration steps..."
            }
        }
    }
}
