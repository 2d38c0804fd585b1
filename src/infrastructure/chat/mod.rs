mod logging_chat_gateway;
mod telegram_client;
mod telegram_types;

pub use logging_chat_gateway::LoggingChatGateway;
pub use telegram_client::{DEFAULT_API_URL, TelegramClient, TelegramError};
