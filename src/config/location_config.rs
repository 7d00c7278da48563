//! 위치 관련 설정 모듈
//!
//! 역지오코딩 API 접속 정보와 가입 허용 지역(경계 상자, 국가 코드)을 관리합니다.
//! 기본값은 이집트 기준입니다.

use std::cmp::Ordering;
use std::time::Duration;
use super::{ConfigError, ConfigSource};

/// 역지오코딩 API 설정
#[derive(Debug, Clone)]
pub struct LocationApiConfig {
    /// 조회 엔드포인트. 기본값: OpenWeatherMap current weather API
    pub base_url: String,
    /// API 인증 키 (`appid` 쿼리 파라미터)
    pub api_key: String,
    /// 요청 제한 시간
    pub timeout: Duration,
}

impl LocationApiConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let timeout_secs = source.parse_or("LOCATION_API_TIMEOUT_SECONDS", 5u64)?;

        Ok(Self {
            base_url: source.string_or(
                "LOCATION_API_URL",
                "http://api.openweathermap.org/data/2.5/weather",
            ),
            api_key: source.required("LOCATION_API_KEY")?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// 가입 허용 지역 설정
///
/// 경계 상자는 닫힌 구간이며, 국가 코드는 조회 결과를 최종 확인하는 기준입니다.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    /// ISO 3166-1 alpha-2 국가 코드. 기본값: "EG"
    pub country_code: String,
    /// 도시를 확인하지 못했을 때 저장하는 값. 기본값: "Unknown"
    pub unknown_city: String,
}

impl RegionConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, ConfigError> {
        let config = Self {
            min_latitude: source.parse_or("REGION_MIN_LAT", 22.0)?,
            max_latitude: source.parse_or("REGION_MAX_LAT", 31.5)?,
            min_longitude: source.parse_or("REGION_MIN_LON", 24.7)?,
            max_longitude: source.parse_or("REGION_MAX_LON", 36.9)?,
            country_code: source.string_or("REGION_COUNTRY_CODE", "EG").to_uppercase(),
            unknown_city: source.string_or("UNKNOWN_CITY", "Unknown"),
        };

        if !ordered(config.min_latitude, config.max_latitude) {
            return Err(ConfigError::Invalid {
                key: "REGION_MIN_LAT",
                reason: "must not exceed REGION_MAX_LAT".to_string(),
            });
        }
        if !ordered(config.min_longitude, config.max_longitude) {
            return Err(ConfigError::Invalid {
                key: "REGION_MIN_LON",
                reason: "must not exceed REGION_MAX_LON".to_string(),
            });
        }

        Ok(config)
    }
}

/// NaN이 섞이면 false
fn ordered(min: f64, max: f64) -> bool {
    matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal))
}
