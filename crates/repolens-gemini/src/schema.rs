//! Wire schema for the `generateContent` call.

use repolens_engine::ProjectFile;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub tools: Vec<Tool>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

/// Enables web grounding for the call.
#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "googleSearch")]
    pub google_search: Value,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

/// Strict JSON schema the model's answer must match: the markdown
/// improvement plan plus the generated file records.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "improvementPlan": {
                "type": "STRING",
                "description": "A comprehensive markdown report. MUST start with 'Current Project Overview' describing what the repo does, followed by the 'Upgrade Plan'.",
            },
            "files": {
                "type": "ARRAY",
                "description": "List of files to be generated, including MIGRATION_GUIDE.md.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "filename": {
                            "type": "STRING",
                            "description": "The full path/name of the file (e.g., main.py, MIGRATION_GUIDE.md)",
                        },
                        "content": {
                            "type": "STRING",
                            "description": "The complete, functional python, json, or markdown code.",
                        },
                        "description": {
                            "type": "STRING",
                            "description": "Short description of what this file does.",
                        },
                    },
                    "required": ["filename", "content", "description"],
                },
            },
        },
        "required": ["improvementPlan", "files"],
    })
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub struct WebSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// The model's structured answer, decoded from the candidate text.
#[derive(Debug, Deserialize)]
pub struct AnalysisPayload {
    #[serde(rename = "improvementPlan")]
    pub improvement_plan: String,
    pub files: Vec<ProjectFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let prompt = "analyze";
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "analyze");
        assert_eq!(value["tools"][0]["googleSearch"], json!({}));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"],
            json!(["improvementPlan", "files"])
        );
    }

    #[test]
    fn payload_decodes_camel_case_plan() {
        let payload: AnalysisPayload = serde_json::from_str(
            r###"{"improvementPlan":"## Plan","files":[{"filename":"main.py","content":"x","description":"d"}]}"###,
        )
        .unwrap();
        assert_eq!(payload.improvement_plan, "## Plan");
        assert_eq!(payload.files[0].filename, "main.py");
    }
}
