//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS, MongoDB 연결 설정을 관리합니다.

use std::time::Duration;
use super::{ConfigError, ConfigSource};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값으로 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        let name = source
            .get("ENVIRONMENT")
            .or_else(|| source.get("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
    /// Actix 워커 스레드 수. 기본값: 4
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let workers = source.parse_or("SERVER_WORKERS", 4usize)?;
        if workers == 0 {
            return Err(ConfigError::Invalid {
                key: "SERVER_WORKERS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            host: source.string_or("HOST", "0.0.0.0"),
            port: source.parse_or("PORT", 8080u16)?,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS`를 콤마로 나누어 읽습니다.
    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        let raw = source.string_or("CORS_ALLOWED_ORIGINS", "http://localhost:3000");

        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub uri: String,
    /// 사용할 데이터베이스 이름. 기본값: "geo_signup_dev"
    pub name: String,
    /// 연결, 서버 선택, 개별 작업에 적용되는 제한 시간
    pub timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let timeout_secs = source.parse_or("DATABASE_TIMEOUT_SECONDS", 5u64)?;

        Ok(Self {
            uri: source.string_or("MONGODB_URI", "mongodb://localhost:27017"),
            name: source.string_or("DATABASE_NAME", "geo_signup_dev"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
