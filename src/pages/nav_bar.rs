use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// Top navigation bar, present on every page of the shop.
pub struct NavBar<B: BrowserTrait> {
    session: Session<B>,
    sign_up_link: Locator,
    login_link: Locator,
    cart_link: Locator,
    home_link: Locator,
    contact_link: Locator,
    product_store_link: Locator,
    name_of_user: Locator,
}

impl<B: BrowserTrait> NavBar<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            sign_up_link: Locator::role(Role::Link, "Sign up"),
            login_link: Locator::role(Role::Link, "Log in"),
            // "Cart" and "Contact" are exact: other links contain them as
            // substrings once a user is logged in.
            cart_link: Locator::role_exact(Role::Link, "Cart"),
            contact_link: Locator::role_exact(Role::Link, "Contact"),
            home_link: Locator::role(Role::Link, "Home (current)"),
            product_store_link: Locator::role(Role::Link, "PRODUCT STORE"),
            name_of_user: Locator::css("#nameofuser"),
        }
    }

    pub async fn click_sign_up(&self) -> Result<()> {
        self.session.click(&self.sign_up_link).await
    }

    pub async fn click_login(&self) -> Result<()> {
        self.session.click(&self.login_link).await
    }

    pub async fn click_cart(&self) -> Result<()> {
        self.session.click(&self.cart_link).await
    }

    pub async fn click_home(&self) -> Result<()> {
        self.session.click(&self.home_link).await
    }

    pub async fn click_contact(&self) -> Result<()> {
        self.session.click(&self.contact_link).await
    }

    pub async fn click_product_store(&self) -> Result<()> {
        self.session.click(&self.product_store_link).await
    }

    /// Wait for the logged-in banner to appear and return its text. The
    /// element is present but empty until the shop acknowledges the login.
    pub async fn wait_for_logged_in_user(&self) -> Result<String> {
        self.session.wait_for_visible(&self.name_of_user).await?;
        self.session.text(&self.name_of_user).await
    }
}
