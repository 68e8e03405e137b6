pub mod chrome;
pub mod dialog;
pub mod session;

pub use chrome::ChromeBrowser;
pub use dialog::{DialogKind, NativeDialog};
pub use session::Session;
