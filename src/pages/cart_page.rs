use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// Cart page. Rows are rendered asynchronously after the page loads, so the
/// count query comes in two forms: an immediate read and a polling variant
/// for checkpoints that expect a specific number of rows.
pub struct CartPage<B: BrowserTrait> {
    session: Session<B>,
    place_order_button: Locator,
    cart_rows: Locator,
    first_delete_link: Locator,
}

impl<B: BrowserTrait> CartPage<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            place_order_button: Locator::role(Role::Button, "Place Order"),
            cart_rows: Locator::css(".success"),
            first_delete_link: Locator::role(Role::Link, "Delete").first(),
        }
    }

    pub async fn click_place_order(&self) -> Result<()> {
        self.session.click(&self.place_order_button).await
    }

    /// Number of rows currently in the cart table.
    pub async fn item_count(&self) -> Result<usize> {
        self.session.count(&self.cart_rows).await
    }

    /// Poll until the cart shows `expected` rows (or the wait budget runs
    /// out) and return the final observed count for the caller to assert on.
    pub async fn wait_for_item_count(&self, expected: usize) -> Result<usize> {
        self.session.wait_for_count(&self.cart_rows, expected).await
    }

    /// Wait until the cart page itself has rendered; the Place Order button
    /// is present on the page regardless of cart contents.
    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.session.wait_for_visible(&self.place_order_button).await
    }

    pub async fn delete_first_item(&self) -> Result<()> {
        self.session.click(&self.first_delete_link).await
    }
}
