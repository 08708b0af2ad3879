use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    session::{Principal, Role, Session},
};

/// Header pair accepted in `Env::Local` instead of a bearer token.
pub const LOCAL_USER_ID_HEADER: &str = "x-user-id";
pub const LOCAL_USER_ROLE_HEADER: &str = "x-user-role";

/// Claims
///
/// Payload of the session JWT issued by the auth backend at sign-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id.
    pub sub: Uuid,
    /// "user" or "therapist".
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn principal(&self) -> Option<Principal> {
        Role::parse(&self.role).map(|role| Principal { id: self.sub, role })
    }
}

fn local_bypass(parts: &Parts) -> Option<Principal> {
    let header = |name: &str| parts.headers.get(name).and_then(|value| value.to_str().ok());

    let id = Uuid::parse_str(header(LOCAL_USER_ID_HEADER)?).ok()?;
    let role = Role::parse(header(LOCAL_USER_ROLE_HEADER)?)?;
    Some(Principal { id, role })
}

/// Decodes a bearer token into a principal. Any failure means there is no
/// session: an expired token is a cleared session, not an error.
pub fn principal_from_token(token: &str, secret: &str) -> Option<Principal> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.validate_exp = true;

    match decode::<Claims>(token, &decoding_key, &validation) {
        Ok(data) => {
            let principal = data.claims.principal();
            if principal.is_none() {
                tracing::warn!(role = %data.claims.role, "session token carries an unknown role");
            }
            principal
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::ExpiredSignature => tracing::debug!("session token expired"),
                _ => tracing::warn!(error = %e, "rejected session token"),
            }
            None
        }
    }
}

/// Session Extractor
///
/// Resolves the ambient session of a request so handlers can pass it
/// explicitly into the navigator:
/// 1. `Env::Local` only: the `x-user-id` / `x-user-role` header pair.
/// 2. `Authorization: Bearer <jwt>` validated with the configured secret.
/// 3. Otherwise the visitor is unauthenticated.
///
/// Never rejects: navigation for anonymous visitors is a normal case.
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        if config.env == Env::Local {
            if let Some(principal) = local_bypass(parts) {
                return Ok(Session::from(principal));
            }
        }

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let session = match token {
            Some(token) => Session::from(principal_from_token(token, &config.jwt_secret)),
            None => Session::Unauthenticated,
        };
        Ok(session)
    }
}
