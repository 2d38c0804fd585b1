mod in_memory_feedback_store;
mod jsonl_feedback_store;

pub use in_memory_feedback_store::InMemoryFeedbackStore;
pub use jsonl_feedback_store::JsonlFeedbackStore;
