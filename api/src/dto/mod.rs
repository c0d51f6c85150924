pub mod auth;
pub mod movie;

pub use auth::{AccessTokenResponse, BlockTokenRequest};
pub use movie::MovieListQuery;
