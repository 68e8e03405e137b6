use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Browser launch failed: {0}")]
    LaunchFailed(String),

    #[error("Browser not launched")]
    BrowserNotLaunched,

    #[error("Tab creation failed: {0}")]
    TabCreationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element not interactable: {0}")]
    ElementNotInteractable(String),

    #[error("JavaScript evaluation failed: {0}")]
    JavaScriptFailed(String),

    #[error("Timed out after {timeout_ms}ms waiting for {what}")]
    WaitTimeout { what: String, timeout_ms: u64 },

    #[error("No native dialog appeared within {0}ms")]
    DialogTimeout(u64),

    #[error("No pending native dialog to dismiss")]
    NoPendingDialog,

    #[error("Expected dialog message {expected:?}, got {actual:?}")]
    UnexpectedDialog { expected: String, actual: String },

    #[error("Checkpoint failed: {0}")]
    CheckpointFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Anyhow error: {0}")]
    Anyhow(String),
}

pub type Result<T> = std::result::Result<T, SuiteError>;

// Convert anyhow::Error to SuiteError
impl From<anyhow::Error> for SuiteError {
    fn from(err: anyhow::Error) -> Self {
        SuiteError::Anyhow(err.to_string())
    }
}
