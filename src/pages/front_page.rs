use crate::browser::Session;
use crate::core::BrowserTrait;
use crate::errors::Result;
use crate::locator::{Locator, Role};

/// Product listing on the front page: category links plus the card grid.
/// Both the card image and the item name are clickable; the first `<a>` in a
/// card is the image link, which is the one this page object clicks.
pub struct FrontPage<B: BrowserTrait> {
    session: Session<B>,
    phones_link: Locator,
    laptops_link: Locator,
    monitors_link: Locator,
    product_cards: Locator,
}

impl<B: BrowserTrait> FrontPage<B> {
    pub fn new(session: Session<B>) -> Self {
        Self {
            session,
            phones_link: Locator::role(Role::Link, "Phones"),
            laptops_link: Locator::role(Role::Link, "Laptops"),
            monitors_link: Locator::role(Role::Link, "Monitors"),
            product_cards: Locator::css("div.card.h-100"),
        }
    }

    pub async fn click_phones(&self) -> Result<()> {
        self.session.click(&self.phones_link).await
    }

    pub async fn click_laptops(&self) -> Result<()> {
        self.session.click(&self.laptops_link).await
    }

    pub async fn click_monitors(&self) -> Result<()> {
        self.session.click(&self.monitors_link).await
    }

    pub async fn click_first_item(&self) -> Result<()> {
        self.click_item(0).await
    }

    pub async fn click_second_item(&self) -> Result<()> {
        self.click_item(1).await
    }

    pub async fn click_third_item(&self) -> Result<()> {
        self.click_item(2).await
    }

    /// Open the product page of the nth listed card (0-based).
    pub async fn click_item(&self, index: usize) -> Result<()> {
        let image_link = Locator::css("a")
            .first()
            .within(self.product_cards.clone().nth(index));
        self.session.click(&image_link).await
    }
}
