use crate::models::Claims;
use actix_web::{dev::ServiceRequest, web, Error, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Issues and validates the bearer tokens handed out by the auth endpoints.
/// The signing secret is injected at construction, never read from the
/// process environment.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for a verified account, valid for one hour.
    ///
    /// Every call embeds a fresh `jti`, so two tokens for the same account
    /// are never identical.
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::hours(1))
            .expect("valid timestamp")
            .timestamp();

        let claims = Claims {
            id: user_id.to_owned(),
            sub: email.to_owned(),
            email: email.to_owned(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Checks signature and expiry, returning the claims on success.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default()).map(|data| data.claims)
    }
}

/// Bearer-token gate for the protected routes. On success the decoded claims
/// are attached to the request for downstream handlers.
pub async fn validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let tokens = match req.app_data::<web::Data<TokenService>>() {
        Some(tokens) => tokens.clone(),
        None => {
            return Err((
                actix_web::error::ErrorInternalServerError("Token service not configured"),
                req,
            ))
        }
    };

    match tokens.validate(credentials.token()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => Err((actix_web::error::ErrorUnauthorized("Invalid token"), req)),
    }
}
