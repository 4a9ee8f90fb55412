/// Runtime configuration for the web app.
///
/// Each value is resolved from, in order: a `localStorage` override, the
/// build-time environment, and a built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_filter: String,
}

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

const API_BASE_KEY: &str = "estatepanel.api_base";
const LOG_FILTER_KEY: &str = "estatepanel.log";

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_LOG_FILTER)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str, log_filter: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            log_filter: log_filter.trim().to_string(),
        }
    }

    /// Load configuration in the browser.
    pub fn load() -> Self {
        let api_base = resolve(
            stored_value(API_BASE_KEY),
            option_env!("ESTATE_API_BASE"),
            DEFAULT_API_BASE,
        );
        let log_filter = resolve(
            stored_value(LOG_FILTER_KEY),
            option_env!("ESTATE_LOG"),
            DEFAULT_LOG_FILTER,
        );
        Self::new(&api_base, &log_filter)
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

fn resolve(stored: Option<String>, compiled: Option<&str>, default: &str) -> String {
    stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            compiled
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| default.to_string())
}

fn stored_value(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = AppConfig::new("https://crm.example.ru/api/", "info");
        assert_eq!(config.api_base_url, "https://crm.example.ru/api");
        assert_eq!(config.endpoint("/auth/login"), "https://crm.example.ru/api/auth/login");
        assert_eq!(config.endpoint("dashboard/"), "https://crm.example.ru/api/dashboard/");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("/dashboard/"), "http://localhost:8000/dashboard/");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(
            resolve(Some("http://stored".into()), Some("http://built"), "http://default"),
            "http://stored"
        );
        assert_eq!(resolve(None, Some("http://built"), "http://default"), "http://built");
        assert_eq!(resolve(Some("  ".into()), None, "http://default"), "http://default");
        assert_eq!(resolve(None, Some(""), "http://default"), "http://default");
    }
}
