//! Value objects for the domain layer.

pub mod cursor;

pub use cursor::{Cursor, CursorRow, OrderDirection, OrderSpec};
