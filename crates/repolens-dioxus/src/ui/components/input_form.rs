use dioxus::events::{Key, KeyboardEvent};
use dioxus::prelude::*;

const EXAMPLE_URL: &str = "https://github.com/EPS-Works/micropython-starter-template";

#[component]
pub fn InputForm(is_loading: bool, on_analyze: EventHandler<String>) -> Element {
    let mut url = use_signal(|| EXAMPLE_URL.to_string());

    let submit = Callback::new(move |()| {
        if is_loading {
            return;
        }
        let trimmed = url.read().trim().to_string();
        if !trimmed.is_empty() {
            on_analyze.call(trimmed);
        }
    });

    rsx! {
        div { class: "input-form",
            input {
                class: "url-input",
                r#type: "text",
                value: "{url}",
                placeholder: "Enter GitHub Repository URL...",
                disabled: is_loading,
                oninput: move |evt| url.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit.call(());
                    }
                },
            }
            button {
                class: "analyze-button",
                disabled: is_loading,
                onclick: move |_| submit.call(()),
                if is_loading { "Analyzing..." } else { "Analyze Repo" }
            }
        }
    }
}
