use tracing::info;

use super::{checkpoint, expect_alert, messages};
use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::credentials::TestCredentials;
use crate::errors::Result;
use crate::pages::{LoginDialog, NavBar, SignUpDialog};

/// Authentication journeys: rejected logins and the sign-up/log-in pair.
/// Sign-up and the follow-up login share one session and must run in that
/// order.
pub struct AuthFlow<B: BrowserTrait> {
    session: Session<B>,
    nav_bar: NavBar<B>,
    sign_up_dialog: SignUpDialog<B>,
    login_dialog: LoginDialog<B>,
}

impl<B: BrowserTrait> AuthFlow<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            nav_bar: NavBar::new(session.clone()),
            sign_up_dialog: SignUpDialog::new(session.clone()),
            login_dialog: LoginDialog::new(session.clone()),
            session,
        }
    }

    /// Attempt a login that the shop must refuse, and check the exact
    /// rejection message it raises.
    pub async fn login_expecting_rejection(
        &self,
        username: &str,
        password: &str,
        expected_message: &str,
    ) -> Result<()> {
        info!(username, "attempting login that should be rejected");
        self.nav_bar.click_login().await?;
        self.login_dialog.fill_username(username).await?;
        self.login_dialog.fill_password(password).await?;
        self.login_dialog.submit().await?;
        expect_alert(&self.session, expected_message).await
    }

    /// Register the generated user; the shop acknowledges with an alert.
    pub async fn sign_up(&self, credentials: &TestCredentials) -> Result<()> {
        info!(username = %credentials.username, "signing up");
        self.nav_bar.click_sign_up().await?;
        self.sign_up_dialog.fill_username(&credentials.username).await?;
        self.sign_up_dialog.fill_password(&credentials.password).await?;
        self.sign_up_dialog.submit().await?;
        expect_alert(&self.session, messages::SIGN_UP_SUCCESSFUL).await
    }

    /// Log in with previously signed-up credentials and return the navbar
    /// welcome banner after checking it names the user.
    pub async fn login_and_expect_welcome(&self, credentials: &TestCredentials) -> Result<String> {
        info!(username = %credentials.username, "logging in");
        self.nav_bar.click_login().await?;
        self.login_dialog.fill_username(&credentials.username).await?;
        self.login_dialog.fill_password(&credentials.password).await?;
        self.login_dialog.submit().await?;

        let banner = self.nav_bar.wait_for_logged_in_user().await?;
        let expected = format!("Welcome {}", credentials.username);
        checkpoint(
            banner.contains(&expected),
            format!("welcome banner {:?} does not contain {:?}", banner, expected),
        )?;
        Ok(banner)
    }
}
