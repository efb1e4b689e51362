use dioxus::prelude::*;
use repolens_engine::models::{MIGRATION_GUIDE, ProjectFile};

use super::MarkdownView;

#[component]
pub fn FileBrowser(files: Vec<ProjectFile>) -> Element {
    let initial = default_index(&files);
    let selected = use_signal(move || initial);

    if files.is_empty() {
        return rsx! {};
    }

    // A fresh analysis can shrink the file list under a stale selection.
    let selected_index = (*selected.read()).min(files.len() - 1);
    let current = &files[selected_index];
    let content = current.as_markdown();

    rsx! {
        div { class: "file-browser",
            div { class: "file-sidebar",
                div { class: "file-sidebar-header", "Project Explorer" }
                div { class: "file-list",
                    for (index, file) in files.iter().enumerate() {
                        {file_button(file, index, selected_index, selected)}
                    }
                }
            }
            div { class: "file-viewer",
                div { class: "file-viewer-header",
                    span { class: "file-viewer-name", "{current.filename}" }
                    span { class: "file-viewer-description", "- {current.description}" }
                }
                div { class: "file-viewer-body",
                    MarkdownView { content }
                }
            }
        }
    }
}

fn file_button(
    file: &ProjectFile,
    index: usize,
    selected_index: usize,
    mut selected: Signal<usize>,
) -> Element {
    let classes = if index == selected_index {
        "file-button selected"
    } else {
        "file-button"
    };
    let icon = file_icon(file);

    rsx! {
        button {
            key: "{file.filename}",
            class: "{classes}",
            onclick: move |_| selected.set(index),
            span { class: "file-icon", "{icon}" }
            span { class: "file-name", "{file.filename}" }
        }
    }
}

/// The migration guide is preselected when the model generated one.
fn default_index(files: &[ProjectFile]) -> usize {
    files
        .iter()
        .position(|f| f.filename == MIGRATION_GUIDE)
        .unwrap_or(0)
}

fn file_icon(file: &ProjectFile) -> &'static str {
    match file.extension() {
        "md" => "📘",
        "py" => "🐍",
        "json" => "⚙",
        _ => "📄",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ProjectFile {
        ProjectFile::new(name, "", "")
    }

    #[test]
    fn migration_guide_is_preselected() {
        let files = vec![file("boot.py"), file("MIGRATION_GUIDE.md"), file("main.py")];
        assert_eq!(default_index(&files), 1);
    }

    #[test]
    fn first_file_without_guide() {
        let files = vec![file("boot.py"), file("main.py")];
        assert_eq!(default_index(&files), 0);
    }

    #[test]
    fn icons_follow_extension() {
        assert_eq!(file_icon(&file("GUIDE.md")), "📘");
        assert_eq!(file_icon(&file("main.py")), "🐍");
        assert_eq!(file_icon(&file("config.json")), "⚙");
        assert_eq!(file_icon(&file("Makefile")), "📄");
    }
}
