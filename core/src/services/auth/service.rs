//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::{parse_basic_credential, TokenCache, TokenService};

use super::config::AuthServiceConfig;

/// Authentication service for account registration and login
pub struct AuthService<U, C>
where
    U: UserRepository,
    C: TokenCache,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService<C>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, C> AuthService<U, C>
where
    U: UserRepository,
    C: TokenCache,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<C>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<C>> {
        &self.token_service
    }

    /// Register a new account from a `Basic base64(email:password)` header
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user with role `user`
    /// * `Err(DomainError)` - Malformed credential, email taken, or persistence failure
    pub async fn register(&self, raw_header: &str) -> DomainResult<User> {
        let credential = parse_basic_credential(raw_header)?;

        if self
            .user_repository
            .find_by_email(&credential.identifier)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(credential.secret).await?;
        let user = self
            .user_repository
            .create(NewUser::new(credential.identifier, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    /// Authenticate a `Basic base64(email:password)` header and issue a token pair
    ///
    /// Unknown email and wrong password both yield `InvalidLogin`.
    pub async fn login(&self, raw_header: &str) -> DomainResult<TokenPair> {
        let credential = parse_basic_credential(raw_header)?;

        let user = self
            .user_repository
            .find_by_email(&credential.identifier)
            .await?
            .ok_or(AuthError::InvalidLogin)?;

        if !self.verify_password(credential.secret, user.password_hash.clone()).await? {
            tracing::debug!(user_id = user.id, "Password mismatch");
            return Err(AuthError::InvalidLogin.into());
        }

        let tokens = self.token_service.issue_token_pair(&user.principal())?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(tokens)
    }

    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let rounds = self.config.hash_rounds;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, rounds))
            .await
            .map_err(DomainError::internal)?
            .map_err(DomainError::internal)
    }

    async fn verify_password(&self, password: String, hash: String) -> DomainResult<bool> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(DomainError::internal)?
            .map_err(DomainError::internal)
    }
}
