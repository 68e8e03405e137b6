pub mod browser;

pub use browser::BrowserTrait;
