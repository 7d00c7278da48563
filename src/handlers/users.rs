//! # User HTTP Handlers
//!
//! 가입과 프로필 조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user/signup` | 지역 제한 가입 | 201 Created |
//! | `GET` | `/user/{user_id}` | 프로필 조회 | 200 OK |
//!
//! 서비스는 `web::Data`로 주입되며, 본문 형식 오류와 필드 검증 실패는
//! 모두 `validation_error` (400)로 응답합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::users::request::CreateUserRequest,
    errors::AppError,
    services::users::{ProfileService, UserRegistrationService},
};

/// 가입 핸들러
///
/// ## 성공 (201 Created)
///
/// ```json
/// {
///   "user": {
///     "id": "0b9e6f5c-3a51-4b25-9d44-6f0f3f1f6a10",
///     "name": "Mona",
///     "email": "mona@example.com",
///     "city": "Cairo",
///     "latitude": 30.0444,
///     "longitude": 31.2357,
///     "created_at": "2024-01-15T10:30:00Z",
///     "updated_at": "2024-01-15T10:30:00Z"
///   },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
///
/// ## 실패
///
/// - **400** `validation_error` / `location_out_of_region`
/// - **409** `duplicate_email`
/// - **500** `location_lookup_failed` / `internal_error`
///
/// ```bash
/// curl -X POST http://localhost:8080/user/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Mona","email":"mona@example.com","latitude":30.0444,"longitude":31.2357}'
/// ```
#[post("/signup")]
pub async fn sign_up(
    service: web::Data<UserRegistrationService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 프로필 조회 핸들러
///
/// 이름, 이메일, 도시만 반환합니다.
///
/// ```json
/// { "name": "Mona", "email": "mona@example.com", "city": "Cairo" }
/// ```
#[get("/{user_id}")]
pub async fn get_profile(
    service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_profile(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
