use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

use crate::parsing::Fence;

/// A generated source file returned by the analysis service.
///
/// Filenames come from untrusted model output; anything touching the
/// filesystem must go through [`ProjectFile::relative_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Path-like name, e.g. `lib/network_manager.py`.
    pub filename: String,
    pub content: String,
    /// Short human description of what the file does.
    pub description: String,
}

impl ProjectFile {
    pub fn new(filename: &str, content: &str, description: &str) -> Self {
        Self {
            filename: filename.to_string(),
            content: content.to_string(),
            description: description.to_string(),
        }
    }

    /// Extension after the last dot, empty when there is none.
    pub fn extension(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    pub fn is_markdown(&self) -> bool {
        self.filename.ends_with(".md")
    }

    /// Last path component, for display and download names.
    pub fn display_name(&self) -> &str {
        self.filename
            .rsplit('/')
            .next()
            .unwrap_or(&self.filename)
    }

    /// Content prepared for the markdown renderer: markdown files render
    /// verbatim, everything else becomes one synthetic fenced code block
    /// tagged with the file's extension.
    pub fn as_markdown(&self) -> String {
        if self.is_markdown() {
            self.content.clone()
        } else {
            format!(
                "{marker}{ext}\n{content}\n{marker}",
                marker = Fence::MARKER,
                ext = self.extension(),
                content = self.content,
            )
        }
    }

    /// The filename as a path confined below an export root, or `None`
    /// for absolute or parent-escaping names.
    pub fn relative_path(&self) -> Option<RelativePathBuf> {
        if self.filename.starts_with('/') || self.filename.contains('\\') {
            return None;
        }
        let normalized = RelativePath::new(&self.filename).normalize();
        let escapes = normalized.as_str().is_empty()
            || normalized
                .components()
                .any(|c| matches!(c, relative_path::Component::ParentDir));
        if escapes { None } else { Some(normalized) }
    }
}
