/// Scaffold mode runs the service without any external collaborator: a
/// keyword classifier, echo transcription, logged replies and mutes, and an
/// in-memory training log.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub flag_words: Vec<String>,
}

const DEFAULT_FLAG_WORDS: &[&str] = &["пьян", "бухой", "drunk"];

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            flag_words: std::env::var("SCAFFOLD_FLAG_WORDS")
                .map(|v| parse_word_list(&v))
                .unwrap_or_else(|_| DEFAULT_FLAG_WORDS.iter().map(|w| w.to_string()).collect()),
        }
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
