use crate::domain::RecordId;

/// What a single inbound message did to the moderation state.
#[derive(Debug, Clone, PartialEq)]
pub enum ModerationOutcome {
    /// Nothing usable to evaluate (blank text or no speech while idle).
    Ignored,
    /// Scored below the toxicity threshold.
    Clean { score: f32 },
    /// Cooldown active for the user or the chat; the message was not scored.
    Suppressed,
    /// Message flagged and a sobriety test issued.
    Challenged {
        record_id: RecordId,
        phrase: &'static str,
    },
    Passed { similarity: f64 },
    Failed { similarity: f64, muted: bool },
    /// A test is pending but the voice answer produced no transcript.
    AwaitingUsableResponse,
}

impl ModerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationOutcome::Ignored => "ignored",
            ModerationOutcome::Clean { .. } => "clean",
            ModerationOutcome::Suppressed => "suppressed",
            ModerationOutcome::Challenged { .. } => "challenged",
            ModerationOutcome::Passed { .. } => "passed",
            ModerationOutcome::Failed { .. } => "failed",
            ModerationOutcome::AwaitingUsableResponse => "awaiting_response",
        }
    }
}
