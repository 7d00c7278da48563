//! # Configuration Module
//!
//! 서비스 설정을 한 곳에서 만들어 각 컴포넌트 생성자에 참조로 넘겨주는 모듈입니다.
//! Spring Framework의 `@ConfigurationProperties`와 비슷하게 환경 변수를
//! 타입이 있는 구조체로 바인딩하며, 프로세스 시작 시 단 한 번만 생성됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS, MongoDB 설정
//! - [`auth_config`] - JWT 서명 설정
//! - [`location_config`] - 역지오코딩 API와 가입 허용 지역 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 한 번 만들고 참조로 전달
//!
//! 컴포넌트는 환경 변수를 직접 읽지 않습니다. `AppConfig`가 `main`에서 만들어지고
//! 필요한 하위 설정만 생성자로 전달됩니다.
//!
//! ### 2. 조용히 넘어가지 않기
//!
//! 숫자 파싱 실패나 필수 값 누락은 기본값으로 대체하지 않고 [`ConfigError`]로
//! 시작을 중단시킵니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use geo_signup_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export LOCATION_API_KEY="openweathermap-app-id"
//! export JWT_SECRET="your-super-secret-key"   # production에서 필수
//!
//! # 선택
//! export ENVIRONMENT="development"
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="geo_signup_dev"
//! export REGION_COUNTRY_CODE="EG"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod location_config;

pub use data_config::*;
pub use auth_config::*;
pub use location_config::*;

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// 설정 로드 실패
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수가 없음
    #[error("{0} must be set")]
    Missing(&'static str),

    /// 값을 해석할 수 없거나 허용 범위를 벗어남
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 키로 문자열 값을 찾아주는 설정 원천
///
/// 운영에서는 프로세스 환경 변수, 테스트에서는 `HashMap`을 감쌉니다.
/// 공백뿐인 값은 설정되지 않은 것으로 취급합니다.
pub struct ConfigSource<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> ConfigSource<'a> {
    pub fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    pub fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(key) {
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: format!("'{}': {}", raw, e),
            }),
            None => Ok(default),
        }
    }
}

/// 애플리케이션 전체 설정
///
/// `main`에서 한 번 생성되어 각 서비스 생성자에 필요한 부분만 참조로 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub location_api: LocationApiConfig,
    pub region: RegionConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();
        Self::from_source(&ConfigSource::new(&lookup))
    }

    /// 임의의 설정 원천에서 설정을 읽습니다.
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_source(source);

        Ok(Self {
            server: ServerConfig::from_source(source)?,
            cors: CorsConfig::from_source(source),
            database: DatabaseConfig::from_source(source)?,
            jwt: JwtConfig::from_source(source, &environment)?,
            location_api: LocationApiConfig::from_source(source)?,
            region: RegionConfig::from_source(source)?,
            environment,
        })
    }
}
