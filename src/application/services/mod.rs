mod challenge_registry;
mod cooldown_tracker;
mod failure_policy;
mod moderation_engine;
mod moderation_outcome;
mod similarity;

pub use challenge_registry::ChallengeRegistry;
pub use cooldown_tracker::{COOLDOWN_SECONDS, CooldownTracker};
pub use failure_policy::{FailurePolicies, FailurePolicy};
pub use moderation_engine::{
    FAIL_REPLY, GREETING, MISSING_ORIGINAL_TEXT, MUTE_DURATION, ModerationEngine, ModerationPorts,
    PASS_REPLY, TOXICITY_THRESHOLD, challenge_text,
};
pub use moderation_outcome::ModerationOutcome;
pub use similarity::{SIMILARITY_THRESHOLD, passes, similarity};
