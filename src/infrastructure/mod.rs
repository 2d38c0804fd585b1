pub mod audio;
pub mod chat;
pub mod classifier;
mod clock;
pub mod feedback;
pub mod observability;
mod phrase_picker;

pub use clock::SystemClock;
pub use phrase_picker::RandomPhrasePicker;
