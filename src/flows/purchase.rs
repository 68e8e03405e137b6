use tracing::info;

use super::{checkpoint, expect_alert, messages};
use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::pages::{CartPage, FrontPage, NavBar, PlaceOrderDialog, ProductPage, ThankYouDialog};

pub const BUYER_NAME: &str = "buyer";
pub const BUYER_COUNTRY: &str = "Finland";
pub const BUYER_CITY: &str = "Helsinki";
pub const CARD_NUMBER: &str = "1234567890";
pub const CARD_MONTH: &str = "1";
pub const CARD_YEAR: &str = "2000";

/// The full shopping journey: three products in, one deleted, order placed,
/// purchase confirmed, cart left empty.
///
/// Cart contents accumulate across steps, so the steps must run in
/// declaration order on one session; nothing here is parallelizable.
pub struct PurchaseFlow<B: BrowserTrait> {
    session: Session<B>,
    nav_bar: NavBar<B>,
    front_page: FrontPage<B>,
    product_page: ProductPage<B>,
    cart_page: CartPage<B>,
    place_order_dialog: PlaceOrderDialog<B>,
    thank_you_dialog: ThankYouDialog<B>,
}

impl<B: BrowserTrait> PurchaseFlow<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            nav_bar: NavBar::new(session.clone()),
            front_page: FrontPage::new(session.clone()),
            product_page: ProductPage::new(session.clone()),
            cart_page: CartPage::new(session.clone()),
            place_order_dialog: PlaceOrderDialog::new(session.clone()),
            thank_you_dialog: ThankYouDialog::new(session.clone()),
            session,
        }
    }

    /// Phones category, third card, into the cart.
    pub async fn add_phone_to_cart(&self) -> Result<()> {
        info!("adding a phone to the cart");
        self.front_page.click_phones().await?;
        self.front_page.click_third_item().await?;
        self.add_current_product().await
    }

    /// Back home, Laptops category, second card, into the cart.
    pub async fn add_laptop_to_cart(&self) -> Result<()> {
        info!("adding a laptop to the cart");
        self.nav_bar.click_home().await?;
        self.front_page.click_laptops().await?;
        self.front_page.click_second_item().await?;
        self.add_current_product().await
    }

    /// Back via the brand link, Monitors category, first card, into the cart.
    pub async fn add_monitor_to_cart(&self) -> Result<()> {
        info!("adding a monitor to the cart");
        self.nav_bar.click_product_store().await?;
        self.front_page.click_monitors().await?;
        self.front_page.click_first_item().await?;
        self.add_current_product().await
    }

    /// Open the cart, expect the three items added so far, delete one, and
    /// open the order form.
    pub async fn review_cart(&self) -> Result<()> {
        info!("reviewing the cart");
        self.nav_bar.click_cart().await?;
        self.cart_page.wait_until_loaded().await?;

        let count = self.cart_page.wait_for_item_count(3).await?;
        checkpoint(count == 3, format!("expected 3 items in cart, found {}", count))?;

        self.cart_page.delete_first_item().await?;
        let count = self.cart_page.wait_for_item_count(2).await?;
        checkpoint(
            count == 2,
            format!("expected 2 items after deletion, found {}", count),
        )?;

        // The order modal animates in; the guarded submit can still race the
        // transition, so turn transitions off for this document.
        self.session
            .inject_css(".modal.fade { transition: none !important; }")
            .await?;

        self.cart_page.click_place_order().await?;
        self.place_order_dialog.wait_until_visible().await?;
        checkpoint(
            self.place_order_dialog.dialog_is_visible().await?,
            "order form fields are not visible",
        )
    }

    /// The shop must refuse the order while name and credit card are blank,
    /// and keep refusing with only the name filled in.
    pub async fn reject_submission_without_required_fields(&self) -> Result<()> {
        info!("submitting the order form without required fields");
        self.place_order_dialog.submit().await?;
        expect_alert(&self.session, messages::MISSING_NAME_AND_CARD).await?;

        self.place_order_dialog.fill_name(BUYER_NAME).await?;
        self.place_order_dialog.submit().await?;
        expect_alert(&self.session, messages::MISSING_NAME_AND_CARD).await
    }

    /// Fill the remaining fields and submit. Assumes
    /// `reject_submission_without_required_fields` already filled the name.
    /// The confirmation must echo the submitted name and card number.
    pub async fn complete_purchase(&self) -> Result<()> {
        info!("completing the purchase");
        self.place_order_dialog.fill_country(BUYER_COUNTRY).await?;
        self.place_order_dialog.fill_city(BUYER_CITY).await?;
        self.place_order_dialog.fill_credit_card(CARD_NUMBER).await?;
        self.place_order_dialog.fill_month(CARD_MONTH).await?;
        self.place_order_dialog.fill_year(CARD_YEAR).await?;
        self.place_order_dialog.submit().await?;

        self.thank_you_dialog.wait_until_visible().await?;
        checkpoint(
            self.thank_you_dialog.is_success_graphic_visible().await?,
            "success graphic is not visible",
        )?;
        checkpoint(
            self.thank_you_dialog.is_thank_you_visible().await?,
            "thank-you heading is not visible",
        )?;
        checkpoint(
            self.thank_you_dialog
                .is_text_visible(&format!("Card Number: {}", CARD_NUMBER))
                .await?,
            "confirmation does not echo the card number",
        )?;
        checkpoint(
            self.thank_you_dialog
                .is_text_visible(&format!("Name: {}", BUYER_NAME))
                .await?,
            "confirmation does not echo the buyer name",
        )?;
        self.thank_you_dialog.click_ok().await
    }

    /// A completed purchase must leave the cart empty.
    pub async fn verify_cart_is_empty(&self) -> Result<()> {
        info!("verifying the cart is empty");
        self.nav_bar.click_cart().await?;
        self.cart_page.wait_until_loaded().await?;
        // An empty cart produces no row to wait on, so give the asynchronous
        // table render its bounded grace period before reading the count.
        self.session.settle().await?;
        let count = self.cart_page.item_count().await?;
        checkpoint(count == 0, format!("expected an empty cart, found {}", count))
    }

    async fn add_current_product(&self) -> Result<()> {
        self.product_page.click_add_to_cart().await?;
        expect_alert(&self.session, messages::PRODUCT_ADDED).await
    }
}
