//! 역지오코딩 모델
//!
//! OpenWeatherMap current weather 응답 중 위치 확인에 쓰는 필드만 매핑합니다.
//! 필수 필드가 빠진 응답도 우선 역직렬화한 뒤 [`WeatherLocationResponse::into_location`]에서 거부합니다.

use serde::Deserialize;

/// 좌표로 확인한 위치
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub city: String,
    /// ISO 3166-1 alpha-2 국가 코드
    pub country_code: String,
}

/// `GET /data/2.5/weather?lat=..&lon=..&appid=..` 응답
///
/// ```json
/// { "name": "Cairo", "sys": { "country": "EG" } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherLocationResponse {
    pub name: Option<String>,
    pub sys: Option<WeatherSys>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSys {
    pub country: Option<String>,
}

impl WeatherLocationResponse {
    /// 도시와 국가 코드가 모두 비어 있지 않을 때만 위치를 돌려줍니다.
    pub fn into_location(self) -> Option<ResolvedLocation> {
        let city = non_blank(self.name)?;
        let country_code = non_blank(self.sys.and_then(|sys| sys.country))?;

        Some(ResolvedLocation { city, country_code })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
