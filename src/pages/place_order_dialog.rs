use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// The "Place order" modal opened from the cart page. Submission goes
/// through the guarded modal-click contract because the purchase button can
/// receive a click while the modal is still transitioning in.
pub struct PlaceOrderDialog<B: BrowserTrait> {
    session: Session<B>,
    order_modal: Locator,
    name_input: Locator,
    country_input: Locator,
    city_input: Locator,
    credit_card_input: Locator,
    month_input: Locator,
    year_input: Locator,
    purchase_button: Locator,
    close_button: Locator,
}

impl<B: BrowserTrait> PlaceOrderDialog<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            order_modal: Locator::css("#orderModal"),
            name_input: Locator::css("#name"),
            country_input: Locator::css("#country"),
            city_input: Locator::css("#city"),
            credit_card_input: Locator::css("#card"),
            month_input: Locator::css("#month"),
            year_input: Locator::css("#year"),
            purchase_button: Locator::css(r#"button[onclick="purchaseOrder()"]"#),
            close_button: Locator::role(Role::Button, "Close"),
        }
    }

    pub async fn fill_name(&self, name: &str) -> Result<()> {
        self.session.fill(&self.name_input, name).await
    }

    pub async fn fill_country(&self, country: &str) -> Result<()> {
        self.session.fill(&self.country_input, country).await
    }

    pub async fn fill_city(&self, city: &str) -> Result<()> {
        self.session.fill(&self.city_input, city).await
    }

    pub async fn fill_credit_card(&self, card_number: &str) -> Result<()> {
        self.session.fill(&self.credit_card_input, card_number).await
    }

    pub async fn fill_month(&self, month: &str) -> Result<()> {
        self.session.fill(&self.month_input, month).await
    }

    pub async fn fill_year(&self, year: &str) -> Result<()> {
        self.session.fill(&self.year_input, year).await
    }

    /// Guarded submit: modal and button visible, button scrolled into view,
    /// focused and enabled, before the click.
    pub async fn submit(&self) -> Result<()> {
        self.session
            .guarded_click(&self.order_modal, &self.purchase_button)
            .await
    }

    pub async fn close(&self) -> Result<()> {
        self.session.click(&self.close_button).await
    }

    /// The order form counts as visible once its card, city and month fields
    /// all are.
    pub async fn dialog_is_visible(&self) -> Result<bool> {
        Ok(self.session.is_visible(&self.credit_card_input).await?
            && self.session.is_visible(&self.city_input).await?
            && self.session.is_visible(&self.month_input).await?)
    }

    pub async fn wait_until_visible(&self) -> Result<()> {
        self.session.wait_for_visible(&self.order_modal).await
    }
}
