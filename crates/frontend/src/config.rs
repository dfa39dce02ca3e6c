//! Compile-time application settings

/// Settings the app is bootstrapped with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub title: &'static str,
    pub log_level: log::Level,
    /// Newest submissions shown in the history table
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Dynamic Forms",
            log_level: log::Level::Debug,
            history_limit: 20,
        }
    }
}
