use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// Purchase confirmation overlay shown after a successful order.
pub struct ThankYouDialog<B: BrowserTrait> {
    session: Session<B>,
    thank_you_heading: Locator,
    success_graphic: Locator,
    ok_button: Locator,
}

impl<B: BrowserTrait> ThankYouDialog<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            thank_you_heading: Locator::role(Role::Heading, "Thank you for your purchase!"),
            success_graphic: Locator::css(".sa-placeholder"),
            ok_button: Locator::role(Role::Button, "OK"),
        }
    }

    pub async fn click_ok(&self) -> Result<()> {
        self.session.click(&self.ok_button).await
    }

    pub async fn is_thank_you_visible(&self) -> Result<bool> {
        self.session.is_visible(&self.thank_you_heading).await
    }

    pub async fn is_success_graphic_visible(&self) -> Result<bool> {
        self.session.is_visible(&self.success_graphic).await
    }

    /// Whether the confirmation currently shows `text` anywhere (substring
    /// match). Used to check the order summary echoes the submitted fields.
    pub async fn is_text_visible(&self, text: &str) -> Result<bool> {
        self.session.is_visible(&Locator::text(text)).await
    }

    pub async fn wait_until_visible(&self) -> Result<()> {
        self.session.wait_for_visible(&self.thank_you_heading).await
    }
}
