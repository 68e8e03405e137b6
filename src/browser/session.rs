use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

use crate::browser::dialog::{self, NativeDialog};
use crate::config::Settings;
use crate::core::BrowserTrait;
use crate::errors::{Result, SuiteError};
use crate::locator::Locator;
use crate::utils::javascript as js;

/// One browser tab shared across an entire serial flow.
///
/// Cheap to clone: clones share the same tab, so every page object can hold
/// a handle while the fixture keeps ownership of the lifecycle. Locators are
/// resolved against the live DOM on every interaction; the session never
/// caches element handles.
pub struct Session<B: BrowserTrait> {
    inner: Arc<SessionInner<B>>,
}

struct SessionInner<B: BrowserTrait> {
    browser: B,
    tab: B::TabHandle,
    settings: Settings,
    id: String,
}

impl<B: BrowserTrait> Clone for Session<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: BrowserTrait> Session<B> {
    /// Launch the browser and open the single tab this session will drive.
    pub async fn start(mut browser: B, settings: Settings) -> Result<Self> {
        browser.launch(&settings).await?;
        let tab = browser.new_tab().await?;
        let id = uuid::Uuid::new_v4().to_string();
        Ok(Self {
            inner: Arc::new(SessionInner {
                browser,
                tab,
                settings,
                id,
            }),
        })
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Navigate and re-install the dialog hook the navigation discarded.
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.inner.browser.navigate(&self.inner.tab, url).await?;
        self.install_dialog_hook().await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.inner.browser.current_url(&self.inner.tab).await
    }

    pub async fn title(&self) -> Result<String> {
        self.inner.browser.title(&self.inner.tab).await
    }

    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner.browser.take_screenshot(&self.inner.tab).await
    }

    pub(crate) async fn evaluate(&self, script: &str) -> Result<Value> {
        self.inner.browser.evaluate(&self.inner.tab, script).await
    }

    /// Click the element, auto-waiting for it to become visible first. Any
    /// native dialog raised by the click is captured for `expect_dialog`.
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.install_dialog_hook().await?;
        self.wait_for_visible(locator).await?;
        debug!(%locator, "click");
        self.run_interaction(locator, &click_script(locator)).await
    }

    /// Replace the element's value and fire the input/change events the page
    /// listens for, auto-waiting for visibility first.
    pub async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        self.install_dialog_hook().await?;
        self.wait_for_visible(locator).await?;
        debug!(%locator, "fill");
        self.run_interaction(locator, &fill_script(locator, text))
            .await
    }

    /// Modal submit contract: the containing modal and the button must both
    /// be visible, the button is scrolled into view and focused, and must be
    /// enabled, before the click lands. Defends against clicks landing while
    /// the modal is still transitioning in.
    pub async fn guarded_click(&self, modal: &Locator, button: &Locator) -> Result<()> {
        self.install_dialog_hook().await?;
        self.wait_for_visible(modal).await?;
        self.wait_for_visible(button).await?;
        debug!(%modal, %button, "guarded click");
        self.run_interaction(button, &guarded_click_script(button))
            .await
    }

    /// Number of current matches. Does not wait.
    pub async fn count(&self, locator: &Locator) -> Result<usize> {
        let value = self.evaluate(&locator.count_js()).await?;
        let count = value
            .as_u64()
            .or_else(|| value.as_f64().map(|f| f as u64))
            .unwrap_or(0);
        Ok(count as usize)
    }

    /// Poll until the match count equals `expected` or the element budget
    /// runs out; returns the last observed count either way, leaving the
    /// caller to assert on it.
    pub async fn wait_for_count(&self, locator: &Locator, expected: usize) -> Result<usize> {
        let timeouts = &self.inner.settings.timeouts;
        let start = Instant::now();
        loop {
            let observed = self.count(locator).await?;
            if observed == expected
                || start.elapsed() >= Duration::from_millis(timeouts.element_ms)
            {
                return Ok(observed);
            }
            tokio::time::sleep(Duration::from_millis(timeouts.poll_interval_ms)).await;
        }
    }

    /// Whether the element currently exists and is visible. Does not wait.
    pub async fn is_visible(&self, locator: &Locator) -> Result<bool> {
        let value = self.evaluate(&locator.visible_js()).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Whitespace-normalized text content of the element.
    pub async fn text(&self, locator: &Locator) -> Result<String> {
        let script = format!(
            "(() => {{ const el = {}; return el ? el.textContent : null; }})()",
            locator.resolve_js()
        );
        match self.evaluate(&script).await? {
            Value::String(text) => Ok(js::normalize_text(&text)),
            _ => Err(SuiteError::ElementNotFound(locator.to_string())),
        }
    }

    /// Block until the element is visible or the element budget runs out.
    pub async fn wait_for_visible(&self, locator: &Locator) -> Result<()> {
        let timeouts = &self.inner.settings.timeouts;
        let became_visible = js::wait_for_condition(
            &self.inner.browser,
            &self.inner.tab,
            &locator.visible_js(),
            timeouts.element_ms,
            timeouts.poll_interval_ms,
        )
        .await?;
        if became_visible {
            Ok(())
        } else {
            Err(SuiteError::WaitTimeout {
                what: locator.to_string(),
                timeout_ms: timeouts.element_ms,
            })
        }
    }

    /// Append a `<style>` element to the current document.
    pub async fn inject_css(&self, css: &str) -> Result<()> {
        let script = format!(
            "(() => {{ const style = document.createElement('style'); style.textContent = {}; document.head.appendChild(style); return true; }})()",
            js::quote(css)
        );
        self.evaluate(&script).await?;
        Ok(())
    }

    /// Bounded grace period for re-renders with no completion signal.
    pub async fn settle(&self) -> Result<()> {
        tokio::time::sleep(Duration::from_millis(self.inner.settings.timeouts.settle_ms)).await;
        Ok(())
    }

    /// Suspend until the page raises a native dialog, then hand it back for
    /// inspection. The dialog stays at the head of the queue until the caller
    /// dismisses it; a second wait without a dismiss returns the same dialog.
    pub async fn expect_dialog(&self) -> Result<NativeDialog<B>> {
        let timeouts = &self.inner.settings.timeouts;
        let start = Instant::now();
        loop {
            let value = self.evaluate(dialog::PEEK_JS).await?;
            if let Some(record) = dialog::decode_peek(value)? {
                debug!(kind = %record.kind, message = %record.message, "native dialog captured");
                return Ok(NativeDialog::new(self.clone(), record));
            }
            if start.elapsed() >= Duration::from_millis(timeouts.dialog_ms) {
                return Err(SuiteError::DialogTimeout(timeouts.dialog_ms));
            }
            tokio::time::sleep(Duration::from_millis(timeouts.poll_interval_ms)).await;
        }
    }

    async fn install_dialog_hook(&self) -> Result<()> {
        self.evaluate(dialog::HOOK_JS).await?;
        Ok(())
    }

    async fn run_interaction(&self, locator: &Locator, script: &str) -> Result<()> {
        let outcome = self.evaluate(script).await?;
        // Interaction scripts JSON-encode their outcome; the driver only
        // passes primitives back by value.
        let outcome: Value = match outcome.as_str() {
            Some(raw) => serde_json::from_str(raw)?,
            None => outcome,
        };
        if outcome.get("ok").and_then(Value::as_bool) == Some(true) {
            return Ok(());
        }
        let reason = outcome
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        match reason {
            "not-found" => Err(SuiteError::ElementNotFound(locator.to_string())),
            "disabled" => Err(SuiteError::ElementNotInteractable(format!(
                "{} is disabled",
                locator
            ))),
            other => Err(SuiteError::ElementNotInteractable(format!(
                "{}: {}",
                locator, other
            ))),
        }
    }
}

fn click_script(locator: &Locator) -> String {
    format!(
        r#"(() => {{
    const el = {resolve};
    if (!el) {{ return JSON.stringify({{ ok: false, error: 'not-found' }}); }}
    try {{
        el.scrollIntoView({{ block: 'center' }});
        el.focus();
        el.click();
        return JSON.stringify({{ ok: true }});
    }} catch (err) {{
        return JSON.stringify({{ ok: false, error: String(err) }});
    }}
}})()"#,
        resolve = locator.resolve_js()
    )
}

fn fill_script(locator: &Locator, text: &str) -> String {
    format!(
        r#"(() => {{
    const el = {resolve};
    if (!el) {{ return JSON.stringify({{ ok: false, error: 'not-found' }}); }}
    try {{
        el.scrollIntoView({{ block: 'center' }});
        el.focus();
        el.value = {text};
        for (const type of ['input', 'change']) {{
            el.dispatchEvent(new Event(type, {{ bubbles: true, cancelable: true }}));
        }}
        return JSON.stringify({{ ok: true }});
    }} catch (err) {{
        return JSON.stringify({{ ok: false, error: String(err) }});
    }}
}})()"#,
        resolve = locator.resolve_js(),
        text = js::quote(text)
    )
}

fn guarded_click_script(locator: &Locator) -> String {
    format!(
        r#"(() => {{
    const el = {resolve};
    if (!el) {{ return JSON.stringify({{ ok: false, error: 'not-found' }}); }}
    try {{
        el.scrollIntoView({{ block: 'center' }});
        el.focus();
        if (el.disabled) {{ return JSON.stringify({{ ok: false, error: 'disabled' }}); }}
        el.click();
        return JSON.stringify({{ ok: true }});
    }} catch (err) {{
        return JSON.stringify({{ ok: false, error: String(err) }});
    }}
}})()"#,
        resolve = locator.resolve_js()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Locator;

    #[test]
    fn click_script_reports_a_missing_element() {
        let script = click_script(&Locator::css("#loginusername"));
        assert!(script.contains("error: 'not-found'"));
        assert!(script.contains("el.scrollIntoView({ block: 'center' });"));
    }

    #[test]
    fn fill_script_quotes_the_value_and_fires_events() {
        let script = fill_script(&Locator::css("#name"), r#"o"brien"#);
        assert!(script.contains(r#"el.value = "o\"brien";"#));
        assert!(script.contains("'input', 'change'"));
    }

    #[test]
    fn guarded_click_refuses_disabled_buttons() {
        let script = guarded_click_script(&Locator::css("button[onclick=\"purchaseOrder()\"]"));
        assert!(script.contains("error: 'disabled'"));
    }
}
