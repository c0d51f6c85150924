//! Bearer-token gate for protecting API endpoints.
//!
//! The gate runs the token service's incoming-request check on every call.
//! A request without credentials, or whose token fails verification for a
//! reason other than expiry, continues unauthenticated; blocked, expired and
//! malformed credentials are rejected. Authenticated requests carry an
//! [`AuthContext`] in their extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use reel_core::{
    domain::entities::{
        token::{TokenPayload, TokenType},
        user::Role,
    },
    errors::DomainError,
    services::token::{AuthDecision, TokenCache, TokenService, TokenSigner},
};
use serde::Serialize;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_domain_error;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: i64,
    pub role: Role,
    pub token_type: TokenType,
}

impl AuthContext {
    /// `None` when the payload's type is neither access nor refresh
    pub fn from_payload(payload: &TokenPayload) -> Option<Self> {
        Some(Self {
            user_id: payload.sub,
            role: payload.role,
            token_type: payload.kind()?,
        })
    }
}

/// Incoming-request check the gate delegates to
#[async_trait(?Send)]
pub trait TokenAuthenticator: Send + Sync {
    async fn authenticate(&self, raw_header: Option<&str>) -> Result<AuthDecision, DomainError>;
}

#[async_trait(?Send)]
impl<C, S> TokenAuthenticator for TokenService<C, S>
where
    C: TokenCache,
    S: TokenSigner,
{
    async fn authenticate(&self, raw_header: Option<&str>) -> Result<AuthDecision, DomainError> {
        TokenService::authenticate(self, raw_header).await
    }
}

/// Bearer-token gate middleware factory
#[derive(Clone)]
pub struct BearerGate {
    authenticator: Arc<dyn TokenAuthenticator>,
}

impl BearerGate {
    pub fn new(authenticator: Arc<dyn TokenAuthenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerGateMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}

/// Bearer-token gate middleware service
pub struct BearerGateMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn TokenAuthenticator>,
}

impl<S, B> Service<ServiceRequest> for BearerGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);

        Box::pin(async move {
            let header = authorization_header(&req);

            let decision = match authenticator.authenticate(header.as_deref()).await {
                Ok(decision) => decision,
                Err(error) => {
                    let response = handle_domain_error(&error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            if let Some(context) = decision.payload().and_then(AuthContext::from_payload) {
                log::debug!("Authenticated user {} ({:?})", context.user_id, context.token_type);
                req.extensions_mut().insert(context);
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Raw `Authorization` header, `None` when absent or not valid UTF-8 text
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_string)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
