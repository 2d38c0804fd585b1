use async_trait::async_trait;

/// Black-box scorer: returns how likely the text is to come from an
/// intoxicated or disruptive participant, in `[0, 1]`.
#[async_trait]
pub trait ToxicityClassifier: Send + Sync {
    async fn score(&self, text: &str) -> Result<f32, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("model is loading: retry in {0}s")]
    ModelLoading(f32),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
