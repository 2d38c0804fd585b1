mod clock;
mod enforcer;
mod feedback_store;
mod phrase_picker;
mod reply_channel;
mod toxicity_classifier;
mod transcription_engine;

pub use clock::Clock;
pub use enforcer::{EnforcementError, Enforcer};
pub use feedback_store::{FeedbackStore, FeedbackStoreError};
pub use phrase_picker::PhrasePicker;
pub use reply_channel::{ReplyChannel, ReplyError};
pub use toxicity_classifier::{ClassifierError, ToxicityClassifier};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
