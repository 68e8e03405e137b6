use crate::config::Settings;
use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Driver seam between the suite and a concrete browser engine.
///
/// The suite only ever needs a tab it can navigate and evaluate JavaScript
/// in; everything else (locator resolution, waits, dialog capture) is built
/// on top of `evaluate`.
#[async_trait]
pub trait BrowserTrait: Send + Sync {
    type TabHandle: Send + Sync;

    /// Launch the browser process according to the suite settings.
    async fn launch(&mut self, settings: &Settings) -> Result<()>;

    /// Open a new tab/page.
    async fn new_tab(&self) -> Result<Self::TabHandle>;

    /// Navigate the tab to a URL and wait for the load to complete.
    async fn navigate(&self, tab: &Self::TabHandle, url: &str) -> Result<()>;

    /// Evaluate a JavaScript expression in the tab and return its value.
    async fn evaluate(&self, tab: &Self::TabHandle, script: &str) -> Result<Value>;

    /// Capture a PNG screenshot of the tab.
    async fn take_screenshot(&self, tab: &Self::TabHandle) -> Result<Vec<u8>>;

    /// Current URL of the tab.
    async fn current_url(&self, tab: &Self::TabHandle) -> Result<String>;

    /// Current document title of the tab.
    async fn title(&self, tab: &Self::TabHandle) -> Result<String>;
}
