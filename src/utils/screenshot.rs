use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use std::path::Path;

/// Capture the session's tab as a PNG and write it to `path`, creating
/// parent directories as needed. Used for failure artifacts.
pub async fn save_png<B: BrowserTrait>(session: &Session<B>, path: &Path) -> Result<()> {
    let bytes = session.screenshot().await?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
