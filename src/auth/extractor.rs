//! Actix-web extractor for bearer-token authentication.
//!
//! # Security
//! - Raw tokens are wrapped in `SecretString` immediately after extraction
//! - Tokens are never logged or exposed in debug output
//! - In demo mode the JWT secret is never read; the fixed demo identity is
//!   returned without touching the token machinery

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::future::{ready, Ready};

use crate::config::AuthConfig;
use crate::error::ErrorResponse;
use crate::models::AuthenticatedUser;

/// Authentication error for extractors.
#[derive(Debug)]
pub struct AuthError {
    message: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::UNAUTHORIZED).json(ErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message: self.message.clone(),
        })
    }
}

/// Token claims we read. `sub` is the user id.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

#[derive(Debug, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

/// Extract the bearer token from the Authorization header, wrapping it
/// in SecretString. Returns None if missing or not a Bearer scheme.
fn extract_bearer_token(req: &HttpRequest) -> Option<SecretString> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| SecretString::from(s.to_string()))
}

/// Extractor that requires an authenticated user.
///
/// Use this in handlers that require authentication:
/// ```ignore
/// async fn protected_handler(auth: BearerAuth) -> impl Responder {
///     // auth.user contains the authenticated user info
/// }
/// ```
pub struct BearerAuth {
    pub user: AuthenticatedUser,
}

impl FromRequest for BearerAuth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let auth_config = match req.app_data::<web::Data<AuthConfig>>() {
            Some(config) => config,
            None => {
                return ready(Err(AuthError {
                    message: "Internal configuration error".to_string(),
                }));
            }
        };

        // Demo mode short circuit: fixed identity, no token validation at all
        if auth_config.demo_mode {
            return ready(Ok(BearerAuth {
                user: AuthenticatedUser::demo_user(),
            }));
        }

        let token = match extract_bearer_token(req) {
            Some(token) => token,
            None => {
                return ready(Err(AuthError {
                    message: "Missing bearer token. Provide Authorization: Bearer <token>."
                        .to_string(),
                }));
            }
        };

        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens from hosted auth providers carry an audience claim we
        // don't configure here
        validation.validate_aud = false;

        let decoded = decode::<Claims>(
            token.expose_secret(),
            &DecodingKey::from_secret(auth_config.jwt_secret.as_bytes()),
            &validation,
        );

        match decoded {
            Ok(data) => {
                let claims = data.claims;
                let full_name = claims
                    .full_name
                    .or_else(|| claims.user_metadata.and_then(|m| m.full_name));

                ready(Ok(BearerAuth {
                    user: AuthenticatedUser {
                        id: claims.sub,
                        email: claims.email,
                        full_name,
                    },
                }))
            }
            Err(_) => ready(Err(AuthError {
                message: "Invalid authentication token".to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn demo_config() -> web::Data<AuthConfig> {
        web::Data::new(AuthConfig {
            demo_mode: true,
            jwt_secret: "unused".to_string(),
        })
    }

    #[actix_rt::test]
    async fn test_demo_mode_yields_demo_user() {
        let req = TestRequest::default()
            .app_data(demo_config())
            .to_http_request();

        let auth = BearerAuth::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(auth.user.email, "demo@scoresweep.com");
        assert_eq!(auth.user.id, "demo-user-id");
    }

    #[actix_rt::test]
    async fn test_demo_mode_ignores_garbage_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .app_data(demo_config())
            .to_http_request();

        let auth = BearerAuth::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(auth.user.email, "demo@scoresweep.com");
    }

    #[actix_rt::test]
    async fn test_missing_token_rejected() {
        let config = web::Data::new(AuthConfig {
            demo_mode: false,
            jwt_secret: "test-secret".to_string(),
        });
        let req = TestRequest::default().app_data(config).to_http_request();

        let result = BearerAuth::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }

    #[actix_rt::test]
    async fn test_invalid_token_rejected() {
        let config = web::Data::new(AuthConfig {
            demo_mode: false,
            jwt_secret: "test-secret".to_string(),
        });
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .app_data(config)
            .to_http_request();

        let result = BearerAuth::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }
}
