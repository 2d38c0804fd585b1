use serde::Deserialize;

/// How the engine treats a collaborator that errored instead of answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Assume nothing is wrong: a failed classification is clean, a failed
    /// transcription is ignored.
    #[default]
    Open,
    /// Assume the worst: a failed classification flags the message, a failed
    /// transcription of a test answer fails the test.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct FailurePolicies {
    #[serde(default)]
    pub classifier: FailurePolicy,
    #[serde(default)]
    pub transcription: FailurePolicy,
}
