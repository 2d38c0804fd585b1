use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use kordon::application::ports::{
    ClassifierError, Clock, EnforcementError, Enforcer, FeedbackStore, PhrasePicker, ReplyChannel, ReplyError,
    ToxicityClassifier, TranscriptionEngine, TranscriptionError,
};
use kordon::application::services::{
    ChallengeRegistry, CooldownTracker, FailurePolicies, ModerationEngine, ModerationPorts,
};
use kordon::domain::{ChatId, FeedbackButtons, UserId, VoiceClip};
use kordon::infrastructure::feedback::InMemoryFeedbackStore;

pub const CHAT: ChatId = ChatId::new(-1001);
pub const USER: UserId = UserId::new(42);
pub const OTHER_USER: UserId = UserId::new(43);

pub struct FixedClassifier {
    score: Option<f32>,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub fn scoring(score: f32) -> Self {
        Self {
            score: Some(score),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            score: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ToxicityClassifier for FixedClassifier {
    async fn score(&self, _text: &str) -> Result<f32, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.score
            .ok_or_else(|| ClassifierError::ApiRequestFailed("classifier down".to_string()))
    }
}

pub struct ScriptedTranscription {
    transcript: Option<String>,
}

impl ScriptedTranscription {
    pub fn returning(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { transcript: None }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for ScriptedTranscription {
    async fn transcribe(&self, _clip: &VoiceClip) -> Result<String, TranscriptionError> {
        self.transcript
            .clone()
            .ok_or_else(|| TranscriptionError::ApiRequestFailed("stt down".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentReply {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub text: String,
    pub buttons: Option<FeedbackButtons>,
}

#[derive(Default)]
pub struct RecordingChatGateway {
    replies: Mutex<Vec<SentReply>>,
    mutes: Mutex<Vec<(ChatId, UserId, Duration)>>,
    fail_mutes: bool,
    fail_replies: bool,
}

impl RecordingChatGateway {
    pub fn failing_mutes() -> Self {
        Self {
            fail_mutes: true,
            ..Default::default()
        }
    }

    pub fn failing_replies() -> Self {
        Self {
            fail_replies: true,
            ..Default::default()
        }
    }

    pub fn replies(&self) -> Vec<SentReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn mutes(&self) -> Vec<(ChatId, UserId, Duration)> {
        self.mutes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ReplyChannel for RecordingChatGateway {
    async fn reply(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        text: &str,
        buttons: Option<&FeedbackButtons>,
    ) -> Result<(), ReplyError> {
        if self.fail_replies {
            return Err(ReplyError::Rejected("bot was kicked".to_string()));
        }
        self.replies.lock().unwrap().push(SentReply {
            chat_id,
            user_id,
            text: text.to_string(),
            buttons: buttons.cloned(),
        });
        Ok(())
    }
}

#[async_trait::async_trait]
impl Enforcer for RecordingChatGateway {
    async fn mute(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        duration: Duration,
    ) -> Result<(), EnforcementError> {
        self.mutes.lock().unwrap().push((chat_id, user_id, duration));
        if self.fail_mutes {
            return Err(EnforcementError::NotRestrictable(chat_id));
        }
        Ok(())
    }
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap()),
        }
    }

    pub fn advance(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now += TimeDelta::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct FixedPhrasePicker(pub usize);

impl PhrasePicker for FixedPhrasePicker {
    fn pick(&self, phrases: &[&'static str]) -> &'static str {
        phrases[self.0 % phrases.len()]
    }
}

pub struct Harness {
    pub engine: Arc<ModerationEngine>,
    pub classifier: Arc<FixedClassifier>,
    pub gateway: Arc<RecordingChatGateway>,
    pub store: Arc<InMemoryFeedbackStore>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new(classifier: FixedClassifier) -> Self {
        Self::with(
            classifier,
            ScriptedTranscription::returning(""),
            RecordingChatGateway::default(),
            FailurePolicies::default(),
        )
    }

    pub fn with(
        classifier: FixedClassifier,
        transcription: ScriptedTranscription,
        gateway: RecordingChatGateway,
        policies: FailurePolicies,
    ) -> Self {
        let classifier = Arc::new(classifier);
        let gateway = Arc::new(gateway);
        let store = Arc::new(InMemoryFeedbackStore::new());
        let clock = Arc::new(ManualClock::new());

        let ports = ModerationPorts {
            classifier: Arc::clone(&classifier) as Arc<dyn ToxicityClassifier>,
            transcription_engine: Arc::new(transcription),
            enforcer: Arc::clone(&gateway) as Arc<dyn Enforcer>,
            reply_channel: Arc::clone(&gateway) as Arc<dyn ReplyChannel>,
            feedback_store: Arc::clone(&store) as Arc<dyn FeedbackStore>,
            clock: Arc::clone(&clock) as Arc<dyn Clock>,
            phrase_picker: Arc::new(FixedPhrasePicker(0)),
        };

        let engine = Arc::new(ModerationEngine::new(
            ports,
            Arc::new(CooldownTracker::new()),
            Arc::new(ChallengeRegistry::new()),
            policies,
        ));

        Self {
            engine,
            classifier,
            gateway,
            store,
            clock,
        }
    }
}
