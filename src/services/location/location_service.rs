//! 역지오코딩 서비스 구현
//!
//! 좌표로 도시와 국가 코드를 확인합니다. 운영 구현은 OpenWeatherMap의
//! current weather API 응답에서 `name`과 `sys.country`를 읽습니다.
//!
//! 재시도와 캐싱은 하지 않습니다. 한 번의 GET이 실패하면 곧바로
//! `AppError::LookupFailure`입니다.

use async_trait::async_trait;
use reqwest::{Client, Request};
use crate::{
    config::LocationApiConfig,
    domain::models::location::{ResolvedLocation, WeatherLocationResponse},
    errors::{AppError, AppResult},
};

/// 좌표 → 위치 조회 포트
#[async_trait]
pub trait LocationLookup: Send + Sync {
    /// 좌표의 도시와 국가 코드를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::LookupFailure` - 전송 실패, 시간 초과, 2xx 외 상태, 해석 불가 응답,
    ///   도시 또는 국가 코드 누락
    async fn resolve(&self, latitude: f64, longitude: f64) -> AppResult<ResolvedLocation>;
}

/// OpenWeatherMap 기반 위치 조회 서비스
///
/// 요청마다 클라이언트를 만들지 않고 생성 시 만든 커넥션 풀을 재사용합니다.
#[derive(Clone)]
pub struct OpenWeatherLocationService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherLocationService {
    /// 설정된 제한 시간을 가진 HTTP 클라이언트를 만듭니다.
    pub fn new(config: &LocationApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `GET {base_url}?lat=..&lon=..&appid=..` 요청을 만듭니다.
    fn build_request(&self, latitude: f64, longitude: f64) -> Result<Request, reqwest::Error> {
        self.client
            .get(&self.base_url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .build()
    }
}

#[async_trait]
impl LocationLookup for OpenWeatherLocationService {
    async fn resolve(&self, latitude: f64, longitude: f64) -> AppResult<ResolvedLocation> {
        let request = self
            .build_request(latitude, longitude)
            .map_err(|e| AppError::LookupFailure(format!("위치 조회 요청 생성 실패: {}", e)))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| AppError::LookupFailure(format!("위치 조회 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::LookupFailure(format!("위치 조회 실패: status {}", status)));
        }

        let body = response
            .json::<WeatherLocationResponse>()
            .await
            .map_err(|e| AppError::LookupFailure(format!("위치 조회 응답 파싱 실패: {}", e)))?;

        let location = body.into_location().ok_or_else(|| {
            AppError::LookupFailure("위치 조회 응답에 도시 또는 국가 코드가 없습니다".to_string())
        })?;

        log::debug!(
            "위치 확인: ({}, {}) → {}, {}",
            latitude, longitude, location.city, location.country_code
        );

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    const CAIRO_BODY: &str = r#"{"name":"Cairo","sys":{"country":"EG"}}"#;

    fn service(base_url: &str) -> OpenWeatherLocationService {
        OpenWeatherLocationService::new(&LocationApiConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    /// 요청 하나에 고정 응답을 돌려주는 로컬 HTTP 서버를 띄우고 URL을 반환합니다.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/data/2.5/weather", address)
    }

    #[test]
    fn test_request_carries_coordinates_and_key() {
        let request = service("http://api.openweathermap.org/data/2.5/weather")
            .build_request(30.0444, 31.2357)
            .unwrap();
        let query: HashMap<String, String> = request.url().query_pairs().into_owned().collect();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/data/2.5/weather");
        assert_eq!(query["lat"], "30.0444");
        assert_eq!(query["lon"], "31.2357");
        assert_eq!(query["appid"], "test-key");
    }

    #[test]
    fn test_invalid_base_url_fails_to_build() {
        assert!(service("not a url").build_request(30.0, 31.0).is_err());
    }

    #[actix_web::test]
    async fn test_transport_failure_is_lookup_failure() {
        let result = service("http://127.0.0.1:9/weather").resolve(30.0444, 31.2357).await;

        assert!(matches!(result, Err(AppError::LookupFailure(_))));
    }

    #[actix_web::test]
    async fn test_successful_reply_resolves_location() {
        let url = serve_once("200 OK", CAIRO_BODY);

        let location = service(&url).resolve(30.0444, 31.2357).await.unwrap();

        assert_eq!(location.city, "Cairo");
        assert_eq!(location.country_code, "EG");
    }

    #[actix_web::test]
    async fn test_non_success_status_is_lookup_failure() {
        let url = serve_once("401 Unauthorized", CAIRO_BODY);

        let result = service(&url).resolve(30.0444, 31.2357).await;

        assert!(matches!(result, Err(AppError::LookupFailure(msg)) if msg.contains("401")));
    }

    #[actix_web::test]
    async fn test_undecodable_body_is_lookup_failure() {
        let url = serve_once("200 OK", "<html>upstream error</html>");

        let result = service(&url).resolve(30.0444, 31.2357).await;

        assert!(matches!(result, Err(AppError::LookupFailure(_))));
    }

    #[actix_web::test]
    async fn test_missing_city_and_country_is_lookup_failure() {
        let url = serve_once("200 OK", "{}");

        let result = service(&url).resolve(30.0444, 31.2357).await;

        assert!(matches!(result, Err(AppError::LookupFailure(_))));
    }
}
