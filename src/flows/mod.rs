//! User journeys: ordered sequences of page-object interactions with
//! checkpoints asserting the shop's expected responses. Steps that build on
//! earlier steps live on one flow value and must be called in order on the
//! same session.

pub mod auth;
pub mod contact;
pub mod purchase;

pub use auth::AuthFlow;
pub use contact::ContactFlow;
pub use purchase::PurchaseFlow;

use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::{Result, SuiteError};

/// Native dialog messages the shop is expected to raise. Any change to these
/// strings in the shop is a breaking change to the suite.
pub mod messages {
    pub const PRODUCT_ADDED: &str = "Product added";
    pub const USER_DOES_NOT_EXIST: &str = "User does not exist.";
    pub const WRONG_PASSWORD: &str = "Wrong password.";
    pub const SIGN_UP_SUCCESSFUL: &str = "Sign up successful.";
    pub const MISSING_NAME_AND_CARD: &str = "Please fill out Name and Creditcard.";
    pub const CONTACT_THANKS: &str = "Thanks for the message!!";
}

/// Suspend until the shop raises a native dialog, dismiss it, and check its
/// message. Dismissal happens before the comparison so a mismatch never
/// leaves a pending dialog blocking the rest of the group.
pub(crate) async fn expect_alert<B: BrowserTrait>(
    session: &Session<B>,
    expected: &str,
) -> Result<()> {
    let dialog = session.expect_dialog().await?;
    let actual = dialog.message().to_string();
    dialog.dismiss().await?;
    if actual == expected {
        Ok(())
    } else {
        Err(SuiteError::UnexpectedDialog {
            expected: expected.to_string(),
            actual,
        })
    }
}

pub(crate) fn checkpoint(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SuiteError::CheckpointFailed(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_passes_through_on_success() {
        assert!(checkpoint(true, "unused").is_ok());
    }

    #[test]
    fn checkpoint_reports_the_failure_message() {
        let err = checkpoint(false, "expected 3 items, found 2").unwrap_err();
        assert!(matches!(err, SuiteError::CheckpointFailed(_)));
        assert!(err.to_string().contains("expected 3 items, found 2"));
    }
}
