mod error_response;
mod feedback;
mod health;
mod messages;
mod start;

pub use error_response::ErrorResponse;
pub use feedback::{FEEDBACK_SAVED, FeedbackRequest, FeedbackResponse, feedback_handler};
pub use health::health_handler;
pub use messages::{InboundMessageRequest, ModerationResponse, message_handler};
pub use start::{StartRequest, start_handler};
