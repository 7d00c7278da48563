//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 그룹화하고, JSON 추출기 에러를 API 에러 형식으로 맞춥니다.
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `GET /health` | 헬스체크 |
//! | `POST /user/signup` | [`handlers::users::sign_up`] |
//! | `GET /user/{user_id}` | [`handlers::users::get_profile`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(registration_service.clone())
//!     .app_data(profile_service.clone())
//!     .configure(configure_all_routes)
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 서비스(`web::Data`)는 호출하는 쪽에서 `App`에 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::sign_up)
            .service(handlers::users::get_profile)
    );
}

/// 본문 파싱 실패(형식 오류, 필드 누락, 잘못된 Content-Type)를 `validation_error`로 응답
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "geo_signup_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "geocoding": "OpenWeatherMap"
        }
    }))
}
