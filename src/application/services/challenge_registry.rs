use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{ChallengeKey, PendingChallenge};

/// Pending sobriety tests, one per (chat, user).
///
/// Entries never expire on their own: a challenge stays open until the user
/// answers.
#[derive(Debug, Default)]
pub struct ChallengeRegistry {
    pending: Mutex<HashMap<ChallengeKey, PendingChallenge>>,
}

impl ChallengeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the challenge for `key`, replacing any challenge already pending
    /// there. The replaced one is returned.
    pub fn issue(&self, key: ChallengeKey, challenge: PendingChallenge) -> Option<PendingChallenge> {
        let replaced = self.lock().insert(key, challenge);
        if replaced.is_some() {
            tracing::warn!(
                chat_id = %key.chat_id,
                user_id = %key.user_id,
                "Pending challenge overwritten by a new one"
            );
        }
        replaced
    }

    pub fn peek(&self, key: ChallengeKey) -> Option<PendingChallenge> {
        self.lock().get(&key).cloned()
    }

    pub fn is_pending(&self, key: ChallengeKey) -> bool {
        self.lock().contains_key(&key)
    }

    /// Removes the challenge for `key`. Absent keys are ignored.
    pub fn resolve(&self, key: ChallengeKey) {
        self.lock().remove(&key);
    }

    /// Removes and returns the challenge, so only one caller ever evaluates it.
    pub fn take(&self, key: ChallengeKey) -> Option<PendingChallenge> {
        self.lock().remove(&key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ChallengeKey, PendingChallenge>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
