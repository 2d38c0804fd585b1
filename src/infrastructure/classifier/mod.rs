mod classifier_factory;
mod hugging_face_classifier;
mod keyword_classifier;

pub use classifier_factory::{ClassifierFactory, ClassifierProvider};
pub use hugging_face_classifier::HuggingFaceClassifier;
pub use keyword_classifier::KeywordClassifier;
