//! Authentication route handlers
//!
//! - Registration and login with Basic credentials
//! - Access-token rotation from a refresh token
//! - Token blocking
//! - A private probe returning the caller's identity

pub mod login;
pub mod private;
pub mod register;
pub mod token;

pub use login::login;
pub use private::private;
pub use register::register;
pub use token::{access_token, block_token};
