use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::Locator;

/// The "New message" contact modal. The shop's form labels are miswired
/// (the name field's label reads "Contact Email:"), so the inputs are bound
/// by id rather than by accessible name.
pub struct ContactPage<B: BrowserTrait> {
    session: Session<B>,
    contact_modal: Locator,
    email_input: Locator,
    name_input: Locator,
    message_input: Locator,
    send_button: Locator,
}

impl<B: BrowserTrait> ContactPage<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            contact_modal: Locator::css("#exampleModal"),
            email_input: Locator::css("#recipient-email"),
            name_input: Locator::css("#recipient-name"),
            message_input: Locator::css("#message-text"),
            send_button: Locator::css("button.btn.btn-primary")
                .with_text("Send message")
                .within(Locator::css("#exampleModal")),
        }
    }

    pub async fn wait_until_visible(&self) -> Result<()> {
        self.session.wait_for_visible(&self.contact_modal).await
    }

    pub async fn fill_email(&self, email: &str) -> Result<()> {
        self.session.fill(&self.email_input, email).await
    }

    pub async fn fill_name(&self, name: &str) -> Result<()> {
        self.session.fill(&self.name_input, name).await
    }

    pub async fn fill_message(&self, message: &str) -> Result<()> {
        self.session.fill(&self.message_input, message).await
    }

    /// Guarded submit: modal and button visible, button scrolled into view,
    /// focused and enabled, before the click.
    pub async fn click_send(&self) -> Result<()> {
        self.session
            .guarded_click(&self.contact_modal, &self.send_button)
            .await
    }
}
