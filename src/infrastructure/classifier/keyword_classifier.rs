use async_trait::async_trait;

use crate::application::ports::{ClassifierError, ToxicityClassifier};

/// Scores 1.0 when the text contains any of the configured words, 0.0
/// otherwise. Used in scaffold mode where no model is reachable.
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

#[async_trait]
impl ToxicityClassifier for KeywordClassifier {
    async fn score(&self, text: &str) -> Result<f32, ClassifierError> {
        let lowered = text.to_lowercase();
        let hit = self.keywords.iter().any(|k| lowered.contains(k.as_str()));
        Ok(if hit { 1.0 } else { 0.0 })
    }
}
