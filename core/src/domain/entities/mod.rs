//! Domain entities representing core business objects.

pub mod movie;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use movie::{Movie, MovieFilter};
pub use token::{TokenPair, TokenPayload, TokenType};
pub use user::{NewUser, Principal, Role, User};
