use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::{info, warn};
use url::Url;

use crate::browser::{ChromeBrowser, Session};
use crate::config::Settings;
use crate::errors::{Result, SuiteError};
use crate::utils::screenshot;

/// Where failure screenshots are written.
const ARTIFACT_DIR: &str = "target/e2e";

static TRACING: Once = Once::new();

/// Per-test-group context: settings, the launched browser, and the one tab
/// every step of the group runs on. Constructed at group start and threaded
/// through the steps, instead of module-level shared page state.
pub struct Fixture {
    settings: Settings,
    session: Session<ChromeBrowser>,
}

impl Fixture {
    /// Launch with settings from the process environment.
    pub async fn launch() -> Result<Self> {
        Self::launch_with(Settings::from_env()).await
    }

    pub async fn launch_with(settings: Settings) -> Result<Self> {
        init_tracing();

        Url::parse(&settings.base_url).map_err(|e| {
            SuiteError::Configuration(format!("invalid base url {:?}: {}", settings.base_url, e))
        })?;

        let session = Session::start(ChromeBrowser::new(), settings.clone()).await?;
        session.goto(&settings.base_url).await?;

        let title = session.title().await?;
        info!(session = %session.id(), url = %settings.base_url, %title, "fixture ready");

        Ok(Self { settings, session })
    }

    pub fn session(&self) -> &Session<ChromeBrowser> {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one named flow step. On failure a screenshot artifact is captured
    /// before the error propagates and fails the test.
    pub async fn run_step<T, F>(&self, label: &str, step: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        info!(step = label, "running");
        match step.await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(step = label, error = %err, "step failed");
                match self.capture_failure(label).await {
                    Ok(path) => warn!(artifact = %path.display(), "failure screenshot saved"),
                    Err(shot_err) => {
                        warn!(error = %shot_err, "could not capture failure screenshot")
                    }
                }
                Err(err)
            }
        }
    }

    async fn capture_failure(&self, label: &str) -> Result<PathBuf> {
        let path = artifact_path(Path::new(ARTIFACT_DIR), self.session.id(), label);
        screenshot::save_png(&self.session, &path).await?;
        Ok(path)
    }

    /// End the group. The browser process itself goes down when the last
    /// session handle is dropped.
    pub async fn close(self) -> Result<()> {
        info!(session = %self.session.id(), "closing fixture");
        Ok(())
    }
}

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .try_init();
    });
}

fn artifact_path(dir: &Path, session_id: &str, label: &str) -> PathBuf {
    dir.join(format!("{}-{}.png", session_id, slug(label)))
}

/// Reduce a step label to a filename-safe slug.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_flattens_labels_to_filename_safe_text() {
        assert_eq!(slug("Add a phone to cart"), "add-a-phone-to-cart");
        assert_eq!(slug("verify cart has 3 items!"), "verify-cart-has-3-items");
        assert_eq!(slug("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn artifact_paths_combine_session_and_step() {
        let path = artifact_path(Path::new("target/e2e"), "abc123", "Check out cart");
        assert_eq!(path, PathBuf::from("target/e2e/abc123-check-out-cart.png"));
    }
}
