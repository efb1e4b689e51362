use dioxus::prelude::*;
use repolens_config::Config;
use repolens_engine::AnalysisResult;
use repolens_gemini::GeminiClient;

use super::components::{ErrorBanner, InputForm, LoadingPanel, ResultView, SetupScreen};

const REPOLENS_CSS: &str = include_str!("../assets/repolens.css");

/// Request lifecycle for the single in-flight analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPhase {
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

#[component]
pub fn App() -> Element {
    let mut config = use_signal(load_config);
    let resolved_key = config.read().resolve_api_key();

    rsx! {
        style { {REPOLENS_CSS} }
        if let Some(api_key) = resolved_key {
            AnalyzerScreen {
                api_key,
                model: config.read().model.clone(),
            }
        } else {
            SetupScreen {
                on_complete: move |api_key: String| {
                    let updated = Config {
                        api_key: Some(api_key),
                        model: config.read().model.clone(),
                    };
                    if let Err(e) = updated.save() {
                        log::warn!("Failed to save config file: {e}");
                    }
                    config.set(updated);
                }
            }
        }
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            log::error!("Failed to load config file: {e}");
            Config::default()
        }
    }
}

#[component]
fn AnalyzerScreen(api_key: String, model: Option<String>) -> Element {
    let mut phase = use_signal(|| AnalysisPhase::Idle);
    let is_loading = matches!(&*phase.read(), AnalysisPhase::Loading);

    let on_analyze = move |url: String| {
        if matches!(&*phase.peek(), AnalysisPhase::Loading) {
            return;
        }
        let client = GeminiClient::new(api_key.clone(), model.clone());
        phase.set(AnalysisPhase::Loading);
        spawn(async move {
            match client.analyze(&url).await {
                Ok(result) => phase.set(AnalysisPhase::Success(result)),
                Err(e) => {
                    log::error!("Analysis failed: {e}");
                    phase.set(AnalysisPhase::Error(e.to_string()));
                }
            }
        });
    };

    let output = match &*phase.read() {
        AnalysisPhase::Idle => rsx! {},
        AnalysisPhase::Loading => rsx! {
            LoadingPanel {}
        },
        AnalysisPhase::Error(message) => rsx! {
            ErrorBanner { message: message.clone() }
        },
        AnalysisPhase::Success(result) => rsx! {
            ResultView { data: result.clone() }
        },
    };

    rsx! {
        main { class: "app-container",
            header { class: "app-header",
                h1 { class: "app-title",
                    "Repo"
                    span { class: "accent", "Lens" }
                }
                p { class: "app-tagline",
                    "Instant, AI-powered technical analysis for GitHub repositories."
                }
            }
            InputForm { is_loading, on_analyze }
            div { class: "output-section", {output} }
        }
    }
}
