use serde::{Deserialize, Serialize};

use super::ProjectFile;

/// The filename users should read first when the model generated it.
pub const MIGRATION_GUIDE: &str = "MIGRATION_GUIDE.md";

/// A web page the model consulted while generating the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// The structured answer returned by the analysis service: a markdown
/// improvement report, the generated files, and grounding citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub improvement_plan: String,
    pub files: Vec<ProjectFile>,
    pub sources: Vec<GroundingSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_round_trips_through_json() {
        let result = AnalysisResult {
            improvement_plan: "## Plan".to_string(),
            files: vec![ProjectFile::new("main.py", "import gc", "entry")],
            sources: vec![GroundingSource {
                title: "docs".to_string(),
                uri: "https://docs.micropython.org".to_string(),
            }],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
