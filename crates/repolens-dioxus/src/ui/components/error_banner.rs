use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner",
            h4 { class: "error-title", "Analysis Failed" }
            p { class: "error-message", "{message}" }
        }
    }
}
