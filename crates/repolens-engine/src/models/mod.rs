pub mod analysis;
pub mod project_file;

pub use analysis::{AnalysisResult, GroundingSource, MIGRATION_GUIDE};
pub use project_file::ProjectFile;
