use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    Clock, Enforcer, FeedbackStore, PhrasePicker, ReplyChannel, ToxicityClassifier,
    TranscriptionEngine,
};
use crate::domain::{
    ChallengeKey, ChatId, FeedbackButtons, FeedbackPayload, FeedbackRecord, FlaggedRecord,
    InboundMessage, MessageContent, PendingChallenge, TONGUE_TWISTERS, TrainingRecord, UserId,
    VoiceClip,
};

use super::similarity::similarity;
use super::{
    ChallengeRegistry, CooldownTracker, FailurePolicies, FailurePolicy, ModerationOutcome,
    SIMILARITY_THRESHOLD,
};

/// Classifier scores at or above this flag the message.
pub const TOXICITY_THRESHOLD: f32 = 0.7;
pub const MUTE_DURATION: Duration = Duration::from_secs(300);

pub const PASS_REPLY: &str = "Тест успешно пройден. Вы выглядите трезвыми!";
pub const FAIL_REPLY: &str = "Ответ неверный. Вы получаете мут на 5 минут.";
pub const GREETING: &str = "Бот активен. Отправьте текст или голосовое сообщение для проверки.";
pub const MISSING_ORIGINAL_TEXT: &str = "Нет данных об оригинальном сообщении.";

pub fn challenge_text(phrase: &str) -> String {
    format!(
        "Ваше сообщение вызывает подозрение. Пожалуйста, пройдите тест на трезвость:\n\n\
         произнесите скороговорку: '{}'",
        phrase
    )
}

/// Collaborators the engine talks to. None of them is allowed to fail a
/// message's handling.
pub struct ModerationPorts {
    pub classifier: Arc<dyn ToxicityClassifier>,
    pub transcription_engine: Arc<dyn TranscriptionEngine>,
    pub enforcer: Arc<dyn Enforcer>,
    pub reply_channel: Arc<dyn ReplyChannel>,
    pub feedback_store: Arc<dyn FeedbackStore>,
    pub clock: Arc<dyn Clock>,
    pub phrase_picker: Arc<dyn PhrasePicker>,
}

/// Per-(chat, user) state machine: idle until a message is flagged, then
/// awaiting the answer to a sobriety test until any answer arrives.
pub struct ModerationEngine {
    ports: ModerationPorts,
    cooldowns: Arc<CooldownTracker>,
    challenges: Arc<ChallengeRegistry>,
    policies: FailurePolicies,
}

enum Answer {
    Text(String),
    Unusable,
    Failed,
}

impl ModerationEngine {
    pub fn new(
        ports: ModerationPorts,
        cooldowns: Arc<CooldownTracker>,
        challenges: Arc<ChallengeRegistry>,
        policies: FailurePolicies,
    ) -> Self {
        Self {
            ports,
            cooldowns,
            challenges,
            policies,
        }
    }

    pub fn challenges(&self) -> &ChallengeRegistry {
        &self.challenges
    }

    pub fn cooldowns(&self) -> &CooldownTracker {
        &self.cooldowns
    }

    #[tracing::instrument(
        skip(self, message),
        fields(chat_id = %message.chat_id, user_id = %message.user_id)
    )]
    pub async fn handle(&self, message: InboundMessage) -> ModerationOutcome {
        let key = ChallengeKey::new(message.chat_id, message.user_id);

        if self.challenges.is_pending(key) {
            self.evaluate_answer(key, &message.content).await
        } else {
            self.screen(key, &message.content).await
        }
    }

    /// Records an admin's like/dislike on a challenge.
    pub async fn on_feedback(
        &self,
        admin_id: UserId,
        payload: &FeedbackPayload,
        original_text: Option<String>,
    ) -> FeedbackRecord {
        let record = FeedbackRecord {
            timestamp: self.ports.clock.now(),
            admin_id,
            chat_id: payload.chat_id,
            feedback: payload.kind,
            original_text: original_text.unwrap_or_else(|| MISSING_ORIGINAL_TEXT.to_string()),
            flagged_record_id: payload.record_id(),
        };

        tracing::info!(
            admin_id = %admin_id,
            chat_id = %payload.chat_id,
            feedback = %payload.kind,
            flagged_record_id = ?record.flagged_record_id,
            "Feedback received"
        );
        self.append(TrainingRecord::Feedback(record.clone())).await;
        record
    }

    pub async fn greet(&self, chat_id: ChatId, user_id: UserId) {
        self.send(ChallengeKey::new(chat_id, user_id), GREETING, None)
            .await;
    }

    async fn screen(&self, key: ChallengeKey, content: &MessageContent) -> ModerationOutcome {
        let now = self.ports.clock.now();
        if !self.cooldowns.should_warn(key.user_id, key.chat_id, now) {
            tracing::debug!("Cooldown active for user or chat");
            return ModerationOutcome::Suppressed;
        }

        let text = match content {
            MessageContent::Text(text) => text.trim().to_string(),
            MessageContent::Voice(clip) => match self.transcribe(clip).await {
                Answer::Text(text) => text,
                Answer::Unusable | Answer::Failed => {
                    tracing::debug!("No transcript for voice message; skipping analysis");
                    return ModerationOutcome::Ignored;
                }
            },
        };
        if text.is_empty() {
            return ModerationOutcome::Ignored;
        }

        let score = self.score(&text).await;
        if score < TOXICITY_THRESHOLD {
            tracing::debug!(score, "Message does not need a warning");
            return ModerationOutcome::Clean { score };
        }

        let now = self.ports.clock.now();
        if !self.cooldowns.try_record_warning(key.user_id, key.chat_id, now) {
            tracing::debug!(score, "Flagged, but another warning landed first");
            return ModerationOutcome::Suppressed;
        }

        let record = FlaggedRecord::new(key.user_id, key.chat_id, text, now);
        let record_id = record.id;
        tracing::info!(
            score,
            record_id = %record_id,
            chars = record.text.chars().count(),
            "Message flagged"
        );
        self.append(TrainingRecord::Flagged(record)).await;

        let phrase = self.ports.phrase_picker.pick(TONGUE_TWISTERS);
        self.challenges
            .issue(key, PendingChallenge::new(phrase, now, record_id));

        let buttons = FeedbackButtons::for_record(key.chat_id, record_id);
        self.send(key, &challenge_text(phrase), Some(&buttons)).await;

        ModerationOutcome::Challenged { record_id, phrase }
    }

    async fn evaluate_answer(&self, key: ChallengeKey, content: &MessageContent) -> ModerationOutcome {
        let answer = match content {
            MessageContent::Text(text) => Answer::Text(text.trim().to_string()),
            MessageContent::Voice(clip) => self.transcribe(clip).await,
        };

        let response = match answer {
            Answer::Text(text) if text.is_empty() => {
                tracing::debug!("Blank answer for a pending test; waiting for another answer");
                return ModerationOutcome::AwaitingUsableResponse;
            }
            Answer::Text(text) => Some(text),
            Answer::Unusable => {
                tracing::debug!("Empty transcript for a pending test; waiting for another answer");
                return ModerationOutcome::AwaitingUsableResponse;
            }
            Answer::Failed => match self.policies.transcription {
                FailurePolicy::Open => return ModerationOutcome::AwaitingUsableResponse,
                FailurePolicy::Closed => None,
            },
        };

        let Some(challenge) = self.challenges.take(key) else {
            tracing::debug!("Challenge already resolved by a concurrent answer");
            return ModerationOutcome::Ignored;
        };

        let score = response
            .as_deref()
            .map(|response| similarity(response, &challenge.expected_phrase))
            .unwrap_or(0.0);

        if score >= SIMILARITY_THRESHOLD {
            tracing::info!(similarity = score, "Sobriety test passed");
            self.send(key, PASS_REPLY, None).await;
            ModerationOutcome::Passed { similarity: score }
        } else {
            tracing::info!(similarity = score, "Sobriety test failed");
            self.send(key, FAIL_REPLY, None).await;
            let muted = self.mute(key).await;
            ModerationOutcome::Failed {
                similarity: score,
                muted,
            }
        }
    }

    async fn transcribe(&self, clip: &VoiceClip) -> Answer {
        match self.ports.transcription_engine.transcribe(clip).await {
            Ok(text) if text.trim().is_empty() => Answer::Unusable,
            Ok(text) => Answer::Text(text.trim().to_string()),
            Err(e) => {
                tracing::error!(error = %e, policy = ?self.policies.transcription, "Transcription failed");
                match self.policies.transcription {
                    FailurePolicy::Open => Answer::Unusable,
                    FailurePolicy::Closed => Answer::Failed,
                }
            }
        }
    }

    async fn score(&self, text: &str) -> f32 {
        match self.ports.classifier.score(text).await {
            Ok(score) => score,
            Err(e) => {
                tracing::error!(error = %e, policy = ?self.policies.classifier, "Classification failed");
                match self.policies.classifier {
                    FailurePolicy::Open => 0.0,
                    FailurePolicy::Closed => 1.0,
                }
            }
        }
    }

    async fn mute(&self, key: ChallengeKey) -> bool {
        match self
            .ports
            .enforcer
            .mute(key.chat_id, key.user_id, MUTE_DURATION)
            .await
        {
            Ok(()) => {
                tracing::info!(seconds = MUTE_DURATION.as_secs(), "User muted");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to mute user");
                false
            }
        }
    }

    async fn send(&self, key: ChallengeKey, text: &str, buttons: Option<&FeedbackButtons>) {
        if let Err(e) = self
            .ports
            .reply_channel
            .reply(key.chat_id, key.user_id, text, buttons)
            .await
        {
            tracing::error!(error = %e, "Failed to send reply");
        }
    }

    async fn append(&self, record: TrainingRecord) {
        if let Err(e) = self.ports.feedback_store.append(&record).await {
            tracing::error!(error = %e, "Failed to append training record");
        }
    }
}
