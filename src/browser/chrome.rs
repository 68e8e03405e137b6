use crate::config::Settings;
use crate::core::BrowserTrait;
use crate::errors::{Result, SuiteError};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::ffi::OsStr;
use std::sync::Arc;

/// Chrome driver implementation
pub struct ChromeBrowser {
    browser: Option<Browser>,
}

impl ChromeBrowser {
    pub fn new() -> Self {
        Self { browser: None }
    }

    fn browser(&self) -> Result<&Browser> {
        self.browser.as_ref().ok_or(SuiteError::BrowserNotLaunched)
    }
}

impl Default for ChromeBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowserTrait for ChromeBrowser {
    type TabHandle = Arc<Tab>;

    async fn launch(&mut self, settings: &Settings) -> Result<()> {
        let window_size_arg = format!(
            "--window-size={},{}",
            settings.browser.viewport.width, settings.browser.viewport.height
        );

        let user_agent_arg = settings
            .browser
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args = vec![
            OsStr::new("--no-sandbox"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--disable-gpu"),
            OsStr::new(&window_size_arg),
        ];

        if let Some(ref ua_arg) = user_agent_arg {
            args.push(OsStr::new(ua_arg));
        }

        // Add custom args
        for arg in &settings.browser.args {
            args.push(OsStr::new(arg));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(settings.browser.headless)
            .args(args)
            .build()
            .map_err(|e| SuiteError::LaunchFailed(e.to_string()))?;

        let browser =
            Browser::new(launch_options).map_err(|e| SuiteError::LaunchFailed(e.to_string()))?;

        self.browser = Some(browser);
        Ok(())
    }

    async fn new_tab(&self) -> Result<Self::TabHandle> {
        let tab = self
            .browser()?
            .new_tab()
            .map_err(|e| SuiteError::TabCreationFailed(e.to_string()))?;

        Ok(tab)
    }

    async fn navigate(&self, tab: &Self::TabHandle, url: &str) -> Result<()> {
        tab.navigate_to(url)
            .map_err(|e| SuiteError::NavigationFailed(e.to_string()))?;

        tab.wait_until_navigated()
            .map_err(|e| SuiteError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    async fn evaluate(&self, tab: &Self::TabHandle, script: &str) -> Result<Value> {
        let result = tab
            .evaluate(script, false)
            .map_err(|e| SuiteError::JavaScriptFailed(e.to_string()))?;

        Ok(result.value.unwrap_or(Value::Null))
    }

    async fn take_screenshot(&self, tab: &Self::TabHandle) -> Result<Vec<u8>> {
        let screenshot = tab
            .capture_screenshot(
                headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Png,
                None,
                None,
                true,
            )
            .map_err(|e| SuiteError::ScreenshotFailed(e.to_string()))?;

        Ok(screenshot)
    }

    async fn current_url(&self, tab: &Self::TabHandle) -> Result<String> {
        Ok(tab.get_url())
    }

    async fn title(&self, tab: &Self::TabHandle) -> Result<String> {
        let result = self.evaluate(tab, "document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }
}
