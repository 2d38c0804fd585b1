use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use kordon::application::ports::{Clock, Enforcer, FeedbackStore, ReplyChannel};
use kordon::application::services::{
    ChallengeRegistry, CooldownTracker, ModerationEngine, ModerationPorts,
};
use kordon::infrastructure::audio::{TranscriptionEngineFactory, TranscriptionProvider};
use kordon::infrastructure::chat::{LoggingChatGateway, TelegramClient};
use kordon::infrastructure::classifier::{ClassifierFactory, ClassifierProvider};
use kordon::infrastructure::feedback::{InMemoryFeedbackStore, JsonlFeedbackStore};
use kordon::infrastructure::observability::{TracingConfig, init_tracing};
use kordon::infrastructure::{RandomPhrasePicker, SystemClock};
use kordon::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;
    let scaffold_config = ScaffoldConfig::default();

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.enable_json,
        level: settings.logging.level.clone(),
    })
    .context("Failed to install tracing subscriber")?;

    let ports = if scaffold_config.enabled {
        tracing::warn!("Scaffold mode: external collaborators replaced by local stand-ins");
        scaffold_ports(&scaffold_config)?
    } else {
        live_ports(&settings)?
    };

    let engine = Arc::new(ModerationEngine::new(
        ports,
        Arc::new(CooldownTracker::new()),
        Arc::new(ChallengeRegistry::new()),
        settings.moderation.failure_policy,
    ));

    let router = create_router(AppState {
        engine,
        scaffold_config,
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn live_ports(settings: &Settings) -> anyhow::Result<ModerationPorts> {
    let token = settings
        .telegram
        .bot_token
        .clone()
        .filter(|t| !t.is_empty())
        .context("APP_TELEGRAM__BOT_TOKEN is required outside scaffold mode")?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let telegram = Arc::new(TelegramClient::new(
        token,
        settings.telegram.api_url.clone(),
        Arc::clone(&clock),
    ));

    let classifier = ClassifierFactory::create(
        settings.classifier.provider,
        &settings.classifier.model,
        settings.classifier.api_token.clone(),
        settings.classifier.base_url.clone(),
        settings.classifier.toxic_labels.clone(),
    );

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        &settings.transcription.model,
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        settings.transcription.language.clone(),
    )?;

    let feedback_store: Arc<dyn FeedbackStore> =
        Arc::new(JsonlFeedbackStore::new(settings.feedback.path.clone())?);
    tracing::info!(path = %settings.feedback.path.display(), "Training log ready");

    Ok(ModerationPorts {
        classifier,
        transcription_engine,
        enforcer: Arc::clone(&telegram) as Arc<dyn Enforcer>,
        reply_channel: telegram as Arc<dyn ReplyChannel>,
        feedback_store,
        clock,
        phrase_picker: Arc::new(RandomPhrasePicker),
    })
}

fn scaffold_ports(scaffold_config: &ScaffoldConfig) -> anyhow::Result<ModerationPorts> {
    let gateway = Arc::new(LoggingChatGateway);

    Ok(ModerationPorts {
        classifier: ClassifierFactory::create(
            ClassifierProvider::Keyword,
            "",
            None,
            None,
            scaffold_config.flag_words.clone(),
        ),
        transcription_engine: TranscriptionEngineFactory::create(
            TranscriptionProvider::Mock,
            "",
            None,
            None,
            None,
        )?,
        enforcer: Arc::clone(&gateway) as Arc<dyn Enforcer>,
        reply_channel: gateway as Arc<dyn ReplyChannel>,
        feedback_store: Arc::new(InMemoryFeedbackStore::new()),
        clock: Arc::new(SystemClock),
        phrase_picker: Arc::new(RandomPhrasePicker),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
