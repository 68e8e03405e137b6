use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// The "Log in" modal opened from the navbar.
pub struct LoginDialog<B: BrowserTrait> {
    session: Session<B>,
    username_input: Locator,
    password_input: Locator,
    login_button: Locator,
    close_button: Locator,
}

impl<B: BrowserTrait> LoginDialog<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            username_input: Locator::css("#loginusername"),
            password_input: Locator::css("#loginpassword"),
            login_button: Locator::role(Role::Button, "Log in"),
            close_button: Locator::label("Close").within(Locator::role(Role::Dialog, "Log in")),
        }
    }

    pub async fn fill_username(&self, username: &str) -> Result<()> {
        self.session.fill(&self.username_input, username).await
    }

    pub async fn fill_password(&self, password: &str) -> Result<()> {
        self.session.fill(&self.password_input, password).await
    }

    pub async fn submit(&self) -> Result<()> {
        self.session.click(&self.login_button).await
    }

    pub async fn close(&self) -> Result<()> {
        self.session.click(&self.close_button).await
    }
}
