use actix_web::{HttpRequest, Result as ActixResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::models::{AuthenticatedUser, Role};

pub const TOKEN_LIFETIME_SECS: u64 = 24 * 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (user id)
    pub role: String, // User role at issue time
    pub exp: usize,   // Expiration time
    pub iat: usize,   // Issued at
}

#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn generate_token(
        &self,
        user_id: i64,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expires_in = Duration::seconds(TOKEN_LIFETIME_SECS as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: (now + expires_in).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn verify_token(
        &self,
        token: &str,
    ) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let auth_header = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    Some(auth_header.to_string())
}

pub fn verify_jwt(req: &HttpRequest, jwt_manager: &JwtManager) -> ActixResult<AuthenticatedUser> {
    let token = extract_token_from_header(req)
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing Authorization header"))?;

    let token_data = jwt_manager
        .verify_token(&token)
        .map_err(|_| actix_web::error::ErrorUnauthorized("Invalid token"))?;

    let id = token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| actix_web::error::ErrorUnauthorized("Invalid token subject"))?;
    let role = token_data
        .claims
        .role
        .parse::<Role>()
        .map_err(|_| actix_web::error::ErrorUnauthorized("Invalid token role"))?;

    Ok(AuthenticatedUser { id, role })
}
