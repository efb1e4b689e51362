use repolens_engine::{AnalysisResult, GroundingSource};
use reqwest::Client;
use serde_json::json;

use crate::error::GeminiError;
use crate::schema::{
    AnalysisPayload, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GroundingChunk, Part, Tool, response_schema,
};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            model,
            client: Client::new(),
        }
    }

    /// Runs one grounded analysis of the repository at `repo_url`.
    pub async fn analyze(&self, repo_url: &str) -> Result<AnalysisResult, GeminiError> {
        let prompt = analysis_prompt(repo_url);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            tools: vec![Tool {
                google_search: json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        log::info!("requesting analysis of {repo_url} from {}", self.model);
        let response: GenerateContentResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_response(response)
    }
}

/// Decodes the first candidate into an [`AnalysisResult`]. Pure so the
/// whole parse path is testable without a network.
fn parse_response(response: GenerateContentResponse) -> Result<AnalysisResult, GeminiError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::NoCandidate)?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let payload: AnalysisPayload = serde_json::from_str(&text)?;

    let chunks = candidate
        .grounding_metadata
        .map(|metadata| metadata.grounding_chunks)
        .unwrap_or_default();

    Ok(AnalysisResult {
        improvement_plan: payload.improvement_plan,
        files: payload.files,
        sources: collect_sources(chunks),
    })
}

/// Flattens web grounding chunks into citations, de-duplicated by URI:
/// the first occurrence keeps its position, the last occurrence keeps
/// its title.
fn collect_sources(chunks: Vec<GroundingChunk>) -> Vec<GroundingSource> {
    let mut out: Vec<GroundingSource> = Vec::new();
    for chunk in chunks {
        let Some(web) = chunk.web else { continue };
        let source = GroundingSource {
            title: web.title.unwrap_or_else(|| "Web Source".to_string()),
            uri: web.uri.unwrap_or_else(|| "#".to_string()),
        };
        if let Some(existing) = out.iter_mut().find(|s| s.uri == source.uri) {
            *existing = source;
        } else {
            out.push(source);
        }
    }
    out
}

fn analysis_prompt(repo_url: &str) -> String {
    format!(
        r#"You are a Senior Embedded Software Architect and MicroPython Expert.

**Task:** Analyze the repository at {repo_url}.

**Goal:**
1. Create a "Project Analysis & Upgrade Report" (Markdown) for the UI.
   - **Section 1: Current Project Overview**: Start by explicitly describing the CURRENT functionality of this repository. What is it? Who is it for? What are its current use cases?
   - **Section 2: The V2.0 Upgrade Strategy**: Explain the architectural shift (e.g., Super-loop -> AsyncIO), new features, and why these changes make it "Production-Grade".
   - **Section 3: Migration Strategy Summary**: A brief overview of the steps to switch.

2. Generate a **MIGRATION_GUIDE.md** file. This is CRITICAL. It must contain:
   - "Original vs New Structure" comparison table.
   - "Step-by-Step Migration Guide" (e.g., 1. Wipe flash using esptool, 2. Upload /lib, 3. Upload config).
   - "Deep Changelog" of all improvements.

3. Generate the ACTUAL 100% functional source code files for the V2 upgrade.

**Requirements for the Generated Files:**
- **MIGRATION_GUIDE.md**: The documentation file described above.
- **boot.py**: Robust boot sequence with garbage collection, storage mounting, and optional debug mode.
- **config.json**: JSON file for separating Wifi SSID/Pass and MQTT settings from code.
- **main.py**: Use `uasyncio`. Create a robust main loop with error catching, watchdog feeding, and task scheduling.
- **lib/network_manager.py**: A professional class to handle WiFi connection, auto-reconnect, and status LED blinking without blocking.

**Output Format:**
Return the response in a strict JSON format matching the provided schema.
- `improvementPlan`: The Markdown string containing Section 1 (Current Overview), Section 2 (Upgrade), and Section 3 (Migration).
- `files`: An array of file objects.
"#
    )
}
