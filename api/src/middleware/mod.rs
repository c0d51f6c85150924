pub mod auth;
pub mod cors;

pub use auth::{AuthContext, BearerGate, TokenAuthenticator};
pub use cors::create_cors;
