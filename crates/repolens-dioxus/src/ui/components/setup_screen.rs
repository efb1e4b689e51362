use dioxus::prelude::*;
use repolens_config::API_KEY_ENV_VARS;

/// First-run screen shown when neither the environment nor the config
/// file provides an analysis-service credential.
#[component]
pub fn SetupScreen(on_complete: EventHandler<String>) -> Element {
    let mut key_input = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let env_var = API_KEY_ENV_VARS[0];

    let handle_save = move |_| {
        let key = key_input.read().trim().to_string();
        if key.is_empty() {
            error_message.set(Some("Please enter an API key".to_string()));
            return;
        }
        error_message.set(None);
        on_complete.call(key);
    };

    rsx! {
        div { class: "setup-screen",
            h1 { class: "setup-title", "Welcome to RepoLens" }
            p { class: "setup-text",
                "RepoLens needs a Gemini API key to analyze repositories. "
                "Paste one below, or set the "
                code { class: "inline-code", "{env_var}" }
                " environment variable before launching."
            }
            input {
                class: "setup-input",
                r#type: "password",
                value: "{key_input}",
                placeholder: "API key",
                oninput: move |evt| key_input.set(evt.value()),
            }
            if let Some(message) = error_message.read().as_ref() {
                p { class: "setup-error", "{message}" }
            }
            button {
                class: "setup-button",
                onclick: handle_save,
                "Save and continue"
            }
        }
    }
}
