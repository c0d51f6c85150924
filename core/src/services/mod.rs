//! Business services containing domain logic and use cases.

pub mod auth;
pub mod movie;
pub mod pagination;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use movie::MovieService;
pub use pagination::{CursorPage, CursorPaginator, OrderedQuery};
pub use token::{
    AuthDecision, JwtSigner, SecretStore, TokenCache, TokenService, TokenServiceConfig,
    TokenSigner, VerifyFailure,
};
