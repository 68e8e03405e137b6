use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// The "Sign up" modal opened from the navbar. Field locators go through the
/// role/label route rather than ids so they cannot land on the login modal's
/// identically-labelled (but hidden) fields.
pub struct SignUpDialog<B: BrowserTrait> {
    session: Session<B>,
    username_input: Locator,
    password_input: Locator,
    sign_up_button: Locator,
    close_button: Locator,
}

impl<B: BrowserTrait> SignUpDialog<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            username_input: Locator::role(Role::Textbox, "Username:"),
            password_input: Locator::role(Role::Textbox, "Password:"),
            sign_up_button: Locator::role(Role::Button, "Sign up"),
            close_button: Locator::label("Close").within(Locator::role(Role::Dialog, "Sign up")),
        }
    }

    pub async fn fill_username(&self, username: &str) -> Result<()> {
        self.session.fill(&self.username_input, username).await
    }

    pub async fn fill_password(&self, password: &str) -> Result<()> {
        self.session.fill(&self.password_input, password).await
    }

    pub async fn submit(&self) -> Result<()> {
        self.session.click(&self.sign_up_button).await
    }

    pub async fn close(&self) -> Result<()> {
        self.session.click(&self.close_button).await
    }
}
