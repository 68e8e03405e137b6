use tracing::info;

use super::{expect_alert, messages};
use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::pages::{ContactPage, NavBar};

/// Contact form journey. Independent of any other flow; only needs a fresh
/// session pointed at the front page.
pub struct ContactFlow<B: BrowserTrait> {
    session: Session<B>,
    nav_bar: NavBar<B>,
    contact_page: ContactPage<B>,
}

impl<B: BrowserTrait> ContactFlow<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            nav_bar: NavBar::new(session.clone()),
            contact_page: ContactPage::new(session.clone()),
            session,
        }
    }

    /// Open the contact modal, fill it out, send it through the guarded
    /// submit, and consume the thank-you alert.
    pub async fn submit_message(&self, email: &str, name: &str, message: &str) -> Result<()> {
        info!(email, "submitting a contact message");
        self.nav_bar.click_contact().await?;
        self.contact_page.wait_until_visible().await?;

        self.contact_page.fill_email(email).await?;
        self.contact_page.fill_name(name).await?;
        self.contact_page.fill_message(message).await?;

        self.contact_page.click_send().await?;
        expect_alert(&self.session, messages::CONTACT_THANKS).await
    }
}
