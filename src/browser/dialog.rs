//! Native browser dialog capture.
//!
//! The demo shop reports most outcomes through `window.alert`. Blocking
//! native dialogs cannot be inspected from injected JavaScript after the
//! fact, so the session instruments `alert`/`confirm`/`prompt` before every
//! interaction: each call is recorded in an in-page queue and returns
//! immediately. Flows then suspend on [`Session::expect_dialog`], read the
//! recorded message, and must explicitly dismiss it. An undismissed record
//! stays at the head of the queue and is what the next wait returns.
//!
//! [`Session::expect_dialog`]: crate::browser::Session::expect_dialog

use serde::{Deserialize, Serialize};

use crate::browser::session::Session;
use crate::core::BrowserTrait;
use crate::errors::{Result, SuiteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Confirm => write!(f, "confirm"),
            Self::Prompt => write!(f, "prompt"),
        }
    }
}

/// Wire form of one recorded dialog, as stored in the in-page queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DialogRecord {
    pub kind: DialogKind,
    pub message: String,
}

/// A captured native dialog. Holds the session so that dismissal can advance
/// the in-page queue; dismissing consumes the value, which makes "inspect,
/// then dismiss before moving on" the only order the API allows.
pub struct NativeDialog<B: BrowserTrait> {
    session: Session<B>,
    kind: DialogKind,
    message: String,
}

impl<B: BrowserTrait> NativeDialog<B> {
    pub(crate) fn new(session: Session<B>, record: DialogRecord) -> Self {
        Self {
            session,
            kind: record.kind,
            message: record.message,
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Mark the dialog consumed and advance the queue. Until this runs, the
    /// session will keep handing out this same dialog.
    pub async fn dismiss(self) -> Result<()> {
        let done = self.session.evaluate(DISMISS_JS).await?;
        if done.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(SuiteError::NoPendingDialog)
        }
    }
}

/// Idempotent instrumentation of the native dialog functions. Re-run before
/// every interaction because a page navigation discards the override.
pub(crate) const HOOK_JS: &str = r#"(() => {
    if (window.__storeDialogs) { return true; }
    const state = { records: [], cursor: 0 };
    window.__storeDialogs = state;
    const record = (kind, message, result) => {
        state.records.push({ kind: kind, message: String(message), dismissed: false });
        return result;
    };
    window.alert = (message) => record('alert', message, undefined);
    window.confirm = (message) => record('confirm', message, true);
    window.prompt = (message, fallback) => record('prompt', message, fallback === undefined ? null : fallback);
    return true;
})()"#;

/// First undismissed record (JSON-encoded), or null. Serialized because the
/// driver only passes primitives back by value.
pub(crate) const PEEK_JS: &str = r#"(() => {
    const state = window.__storeDialogs;
    if (!state) { return null; }
    const next = state.records[state.cursor];
    return JSON.stringify(next ? { kind: next.kind, message: next.message } : null);
})()"#;

/// Decode the peek result: a JSON string from the page, or null when the
/// hook is not installed yet.
pub(crate) fn decode_peek(value: serde_json::Value) -> Result<Option<DialogRecord>> {
    let value = match value.as_str() {
        Some(raw) => serde_json::from_str(raw)?,
        None => value,
    };
    if value.is_null() {
        Ok(None)
    } else {
        Ok(Some(serde_json::from_value(value)?))
    }
}

/// Consume the head of the queue.
const DISMISS_JS: &str = r#"(() => {
    const state = window.__storeDialogs;
    if (!state) { return false; }
    const next = state.records[state.cursor];
    if (!next) { return false; }
    next.dismissed = true;
    state.cursor += 1;
    return true;
})()"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_decode_from_the_page_queue_shape() {
        let record: DialogRecord =
            serde_json::from_value(json!({ "kind": "alert", "message": "Product added" }))
                .expect("decode record");
        assert_eq!(record.kind, DialogKind::Alert);
        assert_eq!(record.message, "Product added");
    }

    #[test]
    fn all_kinds_round_trip() {
        for (raw, kind) in [
            ("alert", DialogKind::Alert),
            ("confirm", DialogKind::Confirm),
            ("prompt", DialogKind::Prompt),
        ] {
            let record: DialogRecord =
                serde_json::from_value(json!({ "kind": raw, "message": "m" })).expect("decode");
            assert_eq!(record.kind, kind);
            assert_eq!(kind.to_string(), raw);
        }
    }

    #[test]
    fn hook_is_guarded_against_double_installation() {
        assert!(HOOK_JS.contains("if (window.__storeDialogs) { return true; }"));
    }

    #[test]
    fn peek_does_not_advance_the_queue() {
        assert!(!PEEK_JS.contains("cursor +="));
        assert!(DISMISS_JS.contains("state.cursor += 1;"));
    }

    #[test]
    fn decode_peek_handles_the_json_encoded_record() {
        let record = decode_peek(json!(r#"{"kind":"alert","message":"Product added"}"#))
            .expect("decode")
            .expect("record present");
        assert_eq!(record.kind, DialogKind::Alert);
        assert_eq!(record.message, "Product added");
    }

    #[test]
    fn decode_peek_handles_empty_queues() {
        assert!(decode_peek(json!("null")).expect("decode").is_none());
        assert!(decode_peek(serde_json::Value::Null).expect("decode").is_none());
    }
}
