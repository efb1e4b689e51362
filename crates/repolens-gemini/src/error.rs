#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Analysis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The model returned no candidates")]
    NoCandidate,

    #[error("The model generated an invalid response format: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
