//! JWT 토큰 발급 서비스 구현
//!
//! 가입에 성공한 사용자에게 HS256으로 서명한 액세스 토큰을 발급합니다.
//! 리프레시나 폐기는 하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::models::token::TokenClaims,
    errors::{AppError, AppResult},
};

/// 토큰 서명 포트
///
/// 가입 서비스는 토큰 형식을 알지 못하고 불투명한 문자열만 받습니다.
pub trait TokenSigner: Send + Sync {
    /// 사용자 ID를 주체로 하는 토큰을 발급합니다.
    fn sign(&self, user_id: &str) -> AppResult<String>;
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하며 유효 시간은 설정을 따릅니다.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtTokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료 시간을 확인합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = token_service.verify_token(&token)?;
    /// println!("User ID: {}", claims.sub);
    /// ```
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
    }
}

impl TokenSigner for JwtTokenService {
    fn sign(&self, user_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::TokenError(format!("만료 시각 계산 실패: {}시간", self.expiration_hours))
            })?;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenError(format!("JWT 토큰 생성 실패: {}", e)))
    }
}
