//! # Authentication Configuration Module
//!
//! 가입 성공 시 발급하는 JWT 토큰의 서명 설정을 관리합니다.
//! 토큰은 발급만 하며 갱신/폐기 같은 수명 관리는 하지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="1"
//! ```

use chrono::{Duration, Utc};
use super::{ConfigError, ConfigSource, Environment};

const DEV_JWT_SECRET: &str = "dev-only-jwt-secret";

/// JWT 서명 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 서명 키
    pub secret: String,
    /// 토큰 유효 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 프로덕션에서는 `JWT_SECRET`이 반드시 필요합니다.
    /// 그 외 환경에서는 경고를 남기고 개발용 키를 사용합니다.
    pub fn from_source(source: &ConfigSource<'_>, environment: &Environment) -> Result<Self, ConfigError> {
        let secret = match source.get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_JWT_SECRET.to_string()
            }
        };

        let expiration_hours = source.parse_or("JWT_EXPIRATION_HOURS", 1i64)?;
        if expiration_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                reason: "must be positive".to_string(),
            });
        }

        let representable = Duration::try_hours(expiration_hours)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .is_some();
        if !representable {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                reason: format!("{} hours is out of range", expiration_hours),
            });
        }

        Ok(Self { secret, expiration_hours })
    }
}
