use serde::{Deserialize, Serialize};
use std::env;

/// Default location of the demo shop; override with `DEMOSTORE_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://www.demoblaze.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub browser: BrowserSettings,
    pub timeouts: Timeouts,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    pub headless: bool,
    pub viewport: Viewport,
    pub user_agent: Option<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeouts {
    pub navigation_ms: u64,
    pub element_ms: u64,
    pub dialog_ms: u64,
    pub poll_interval_ms: u64,
    /// Bounded grace period for asynchronous re-renders that have no
    /// observable completion signal (the cart table populates via ajax
    /// after the page itself reports loaded).
    pub settle_ms: u64,
}

/// Accounts used by the authentication scenarios. The invalid/wrong-password
/// pairs never have to exist in the shop; the base username/password seed the
/// per-run generated sign-up user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    pub invalid_username: String,
    pub invalid_password: String,
    pub valid_username: String,
    pub wrong_password: String,
    pub base_username: String,
    pub password: String,
}

impl Settings {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("DEMOSTORE_BASE_URL", DEFAULT_BASE_URL),
            browser: BrowserSettings {
                headless: env_flag("DEMOSTORE_HEADLESS", true),
                ..BrowserSettings::default()
            },
            timeouts: Timeouts::default(),
            auth: AuthSettings::from_env(),
        }
    }
}

impl AuthSettings {
    pub fn from_env() -> Self {
        Self {
            invalid_username: env_or("INVALID_USER_USERNAME", "invalidUserX9K3T7"),
            invalid_password: env_or("INVALID_USER_PASSWORD", "wrongpass123"),
            valid_username: env_or("VALID_USER_USERNAME", "testuser"),
            wrong_password: env_or("VALID_USER_WRONG_PASSWORD", "incorrectPass456"),
            base_username: env_or("TEST_USER_USERNAME", "testuser"),
            password: env_or("TEST_USER_PASSWORD", "testpassword"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser: BrowserSettings::default(),
            timeouts: Timeouts::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
            user_agent: None,
            args: vec![],
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation_ms: 30000,
            element_ms: 10000,
            dialog_ms: 10000,
            poll_interval_ms: 100,
            settle_ms: 1500,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            invalid_username: "invalidUserX9K3T7".to_string(),
            invalid_password: "wrongpass123".to_string(),
            valid_username: "testuser".to_string(),
            wrong_password: "incorrectPass456".to_string(),
            base_username: "testuser".to_string(),
            password: "testpassword".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|raw| parse_flag(&raw))
        .unwrap_or(default)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_demo_shop() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert!(settings.browser.headless);
        assert_eq!(settings.browser.viewport.width, 1280);
        assert_eq!(settings.browser.viewport.height, 720);
    }

    #[test]
    fn default_auth_accounts_match_suite_conventions() {
        let auth = AuthSettings::default();
        assert_eq!(auth.invalid_username, "invalidUserX9K3T7");
        assert_eq!(auth.wrong_password, "incorrectPass456");
        assert_eq!(auth.base_username, "testuser");
        assert_eq!(auth.password, "testpassword");
    }

    #[test]
    fn flag_parsing_accepts_common_spellings() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" yes "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn wait_budgets_are_positive() {
        let timeouts = Timeouts::default();
        assert!(timeouts.poll_interval_ms < timeouts.element_ms);
        assert!(timeouts.settle_ms < timeouts.navigation_ms);
    }
}
