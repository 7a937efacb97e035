//! Session identification for HTTP routes.
//!
//! Stateful endpoints read the caller's session from the `X-Session-Id`
//! header. The value must be a UUID; clients generate one and keep sending it.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use deva_domain::SessionId;

use super::http::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";

/// Extractor for the caller's session.
///
/// Rejects with 400 Bad Request when the header is missing or is not a UUID.
#[derive(Debug, Clone, Copy)]
pub struct Session(pub SessionId);

fn parse_header(parts: &Parts) -> Result<SessionId, ApiError> {
    let raw = parts
        .headers
        .get(SESSION_HEADER)
        .ok_or_else(|| ApiError::BadRequest("Missing X-Session-Id header".into()))?;
    raw.to_str()
        .ok()
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .map(SessionId::from_uuid)
        .ok_or_else(|| ApiError::BadRequest("X-Session-Id must be a UUID".into()))
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_header(parts).map(Session)
    }
}

/// `Option<Session>` for endpoints that work without a session: a missing
/// or malformed header is simply no session.
impl<S> OptionalFromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parse_header(parts).ok().map(Session))
    }
}
