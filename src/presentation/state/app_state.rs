use std::sync::Arc;

use crate::application::services::ModerationEngine;
use crate::presentation::config::ScaffoldConfig;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ModerationEngine>,
    pub scaffold_config: ScaffoldConfig,
}
