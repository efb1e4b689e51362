use dioxus::prelude::*;
use repolens_engine::AnalysisResult;

use super::{FileBrowser, MarkdownView, SourceChips};

#[component]
pub fn ResultView(data: AnalysisResult) -> Element {
    let source_count = data.sources.len();

    rsx! {
        section { class: "result-view",
            div { class: "assets-section",
                h2 { class: "section-title", "V2 Assets & Migration Guide" }
                p { class: "section-hint",
                    "Explore the generated source code below. Start by reading "
                    code { class: "inline-code", "MIGRATION_GUIDE.md" }
                    " in the file browser."
                }
                FileBrowser { files: data.files.clone() }
            }
            div { class: "report-panel",
                div { class: "report-header",
                    div {
                        h2 { class: "report-title", "Upgrade Plan Resumé" }
                        p { class: "report-subtitle", "Technical Improvement Breakdown" }
                    }
                    if source_count > 0 {
                        span { class: "verified-badge", "Verified with {source_count} sources" }
                    }
                }
                div { class: "report-body",
                    MarkdownView { content: data.improvement_plan.clone() }
                }
                if source_count > 0 {
                    SourceChips { sources: data.sources.clone() }
                }
            }
        }
    }
}
