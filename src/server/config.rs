use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub frontend_dir_path: Option<String>,
    /// Suggestion count when a match request does not specify one.
    pub default_match_limit: usize,
    /// Hard cap on the suggestion count of a single match request.
    pub max_match_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            frontend_dir_path: None,
            default_match_limit: 6,
            max_match_limit: 24,
        }
    }
}
