pub mod highlight;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use highlight::HighlightSpan;
pub use models::{AnalysisResult, GroundingSource, ProjectFile};
pub use parsing::{Block, tokenize};
pub use render::{InlineSpan, RenderLine, RenderedBlock, render};
