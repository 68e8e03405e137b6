//! Page objects for the demo shop: one type per logical screen or modal,
//! each constructed with a session handle and exposing semantic actions and
//! queries. Raw locators never leave this module.

pub mod cart_page;
pub mod contact_page;
pub mod front_page;
pub mod login_dialog;
pub mod nav_bar;
pub mod place_order_dialog;
pub mod product_page;
pub mod sign_up_dialog;
pub mod thank_you_dialog;

pub use cart_page::CartPage;
pub use contact_page::ContactPage;
pub use front_page::FrontPage;
pub use login_dialog::LoginDialog;
pub use nav_bar::NavBar;
pub use place_order_dialog::PlaceOrderDialog;
pub use product_page::ProductPage;
pub use sign_up_dialog::SignUpDialog;
pub use thank_you_dialog::ThankYouDialog;
