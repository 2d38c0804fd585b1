use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{ChatId, UserId};

/// Minimum interval between two challenges for the same user or in the same chat.
pub const COOLDOWN_SECONDS: i64 = 300;

#[derive(Debug, Default)]
struct CooldownState {
    last_user_warning: HashMap<UserId, DateTime<Utc>>,
    last_chat_warning: HashMap<ChatId, DateTime<Utc>>,
}

impl CooldownState {
    fn is_clear(&self, user_id: UserId, chat_id: ChatId, now: DateTime<Utc>) -> bool {
        let window = TimeDelta::seconds(COOLDOWN_SECONDS);
        let within = |last: Option<&DateTime<Utc>>| {
            last.is_some_and(|last| now.signed_duration_since(*last) < window)
        };
        !(within(self.last_user_warning.get(&user_id))
            || within(self.last_chat_warning.get(&chat_id)))
    }

    fn record(&mut self, user_id: UserId, chat_id: ChatId, now: DateTime<Utc>) {
        self.last_user_warning.insert(user_id, now);
        self.last_chat_warning.insert(chat_id, now);
    }
}

/// Tracks when each user and each chat was last warned.
///
/// A noisy chat is throttled as a whole, not just the individual offender.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    state: Mutex<CooldownState>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_warn(&self, user_id: UserId, chat_id: ChatId, now: DateTime<Utc>) -> bool {
        self.lock().is_clear(user_id, chat_id, now)
    }

    pub fn record_warning(&self, user_id: UserId, chat_id: ChatId, now: DateTime<Utc>) {
        self.lock().record(user_id, chat_id, now);
    }

    /// Checks and records under a single lock. Returns `false` when another
    /// warning landed inside the window first.
    pub fn try_record_warning(&self, user_id: UserId, chat_id: ChatId, now: DateTime<Utc>) -> bool {
        let mut state = self.lock();
        if !state.is_clear(user_id, chat_id, now) {
            return false;
        }
        state.record(user_id, chat_id, now);
        true
    }

    fn lock(&self) -> MutexGuard<'_, CooldownState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
