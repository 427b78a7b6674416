//! HTTP handlers for the authentication endpoints.

pub mod callback;
pub mod login;
pub mod logout;
pub mod me;

pub use callback::callback_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use me::me_handler;
