//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{Movie, MovieFilter, NewUser, Principal, Role, TokenPair, TokenPayload, TokenType, User};
pub use value_objects::{Cursor, CursorRow, OrderDirection, OrderSpec};
