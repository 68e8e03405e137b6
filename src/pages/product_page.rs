use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// Single product view. The shop acknowledges a successful add with a
/// "Product added" native alert, which the flow consumes.
pub struct ProductPage<B: BrowserTrait> {
    session: Session<B>,
    add_to_cart_link: Locator,
}

impl<B: BrowserTrait> ProductPage<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            add_to_cart_link: Locator::role(Role::Link, "Add to cart"),
        }
    }

    pub async fn click_add_to_cart(&self) -> Result<()> {
        self.session.click(&self.add_to_cart_link).await
    }
}
