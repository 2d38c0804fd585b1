use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassifierError, ToxicityClassifier};

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "cointegrated/rubert-tiny-toxicity";

/// Toxicity classifier served by the Hugging Face Inference API.
///
/// The model returns one score per label; the toxicity of a message is the
/// highest score among `toxic_labels`.
pub struct HuggingFaceClassifier {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    model: String,
    toxic_labels: Vec<String>,
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Batched(Vec<Vec<LabelScore>>),
    Single(Vec<LabelScore>),
}

#[derive(Deserialize)]
struct LoadingResponse {
    estimated_time: Option<f32>,
}

impl HuggingFaceClassifier {
    pub fn new(
        api_token: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        toxic_labels: Vec<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.filter(|t| !t.is_empty()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            toxic_labels,
        }
    }

    fn toxicity(&self, scores: &[LabelScore]) -> Result<f32, ClassifierError> {
        scores
            .iter()
            .filter(|s| self.toxic_labels.iter().any(|l| l == &s.label))
            .map(|s| s.score)
            .fold(None, |best: Option<f32>, score| {
                Some(best.map_or(score, |b| b.max(score)))
            })
            .map(|score| score.clamp(0.0, 1.0))
            .ok_or_else(|| {
                ClassifierError::InvalidResponse(format!(
                    "none of {:?} in model labels",
                    self.toxic_labels
                ))
            })
    }
}

#[async_trait]
impl ToxicityClassifier for HuggingFaceClassifier {
    async fn score(&self, text: &str) -> Result<f32, ClassifierError> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let mut request = self
            .client
            .post(&url)
            .json(&ClassificationRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            let loading: LoadingResponse = response
                .json()
                .await
                .unwrap_or(LoadingResponse { estimated_time: None });
            return Err(ClassifierError::ModelLoading(
                loading.estimated_time.unwrap_or_default(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ClassificationResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let scores = match parsed {
            ClassificationResponse::Batched(batches) => batches
                .into_iter()
                .next()
                .ok_or_else(|| ClassifierError::InvalidResponse("empty response".to_string()))?,
            ClassificationResponse::Single(scores) => scores,
        };

        let score = self.toxicity(&scores)?;
        tracing::debug!(model = %self.model, score, "Hugging Face classification completed");
        Ok(score)
    }
}
