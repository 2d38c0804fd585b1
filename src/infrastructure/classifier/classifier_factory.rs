use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::ToxicityClassifier;

use super::hugging_face_classifier::HuggingFaceClassifier;
use super::keyword_classifier::KeywordClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierProvider {
    #[serde(rename = "huggingface")]
    HuggingFace,
    Keyword,
}

pub struct ClassifierFactory;

impl ClassifierFactory {
    /// `terms` are the toxic label names for a model, or the trigger words for
    /// the keyword classifier.
    pub fn create(
        provider: ClassifierProvider,
        model: &str,
        api_token: Option<String>,
        base_url: Option<String>,
        terms: Vec<String>,
    ) -> Arc<dyn ToxicityClassifier> {
        match provider {
            ClassifierProvider::HuggingFace => {
                tracing::info!(model, "Using Hugging Face toxicity classifier");
                Arc::new(HuggingFaceClassifier::new(
                    api_token,
                    base_url,
                    Some(model.to_string()),
                    terms,
                ))
            }
            ClassifierProvider::Keyword => {
                tracing::info!(keywords = terms.len(), "Using keyword classifier");
                Arc::new(KeywordClassifier::new(terms))
            }
        }
    }
}
