//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 가입/프로필 요청 경로에서 발생하는 모든 실패를 하나의 열거형으로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 응답을 만듭니다.
//!
//! ## 응답 정책
//!
//! `Display` 구현은 로그용으로 실패한 단계와 원인을 모두 담지만,
//! 응답 본문에는 종류별로 고정된 코드와 메시지만 내려갑니다.
//! 드라이버 에러 같은 내부 정보는 절대 본문에 포함되지 않습니다.
//!
//! ```json
//! { "error": "duplicate_email", "message": "이미 사용 중인 이메일입니다" }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, StoreContext};
//!
//! let user = collection
//!     .find_one(doc! { "email": email })
//!     .await
//!     .store_context("이메일로 사용자 조회")?;
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 형식이 잘못되었거나 범위를 벗어난 요청 필드 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 이미 등록된 이메일 (409 Conflict)
    #[error("Duplicate email")]
    DuplicateEmail,

    /// 좌표가 가입 허용 지역 밖 (400 Bad Request)
    #[error("Location out of region: {0}")]
    LocationOutOfRegion(String),

    /// 역지오코딩 업스트림 실패 (500, 일반 메시지)
    #[error("Location lookup failed: {0}")]
    LookupFailure(String),

    /// 해당 ID의 사용자가 없음 (404 Not Found)
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// 예기치 못한 저장소 실패 (500, 일반 메시지)
    #[error("Store error: {0}")]
    StoreError(String),

    /// 토큰 서명 실패 (500, 일반 메시지)
    #[error("Token error: {0}")]
    TokenError(String),
}

impl AppError {
    /// 응답 본문에 들어가는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::DuplicateEmail => "duplicate_email",
            AppError::LocationOutOfRegion(_) => "location_out_of_region",
            AppError::LookupFailure(_) => "location_lookup_failed",
            AppError::UserNotFound(_) => "user_not_found",
            AppError::StoreError(_) | AppError::TokenError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출되는 메시지
    ///
    /// 검증 에러만 입력에 대한 상세 내용을 그대로 전달합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(detail) => detail.clone(),
            AppError::DuplicateEmail => "이미 사용 중인 이메일입니다".to_string(),
            AppError::LocationOutOfRegion(_) => "가입은 허용된 지역 내에서만 가능합니다".to_string(),
            AppError::LookupFailure(_) => "위치 정보를 확인할 수 없습니다".to_string(),
            AppError::UserNotFound(_) => "사용자를 찾을 수 없습니다".to_string(),
            AppError::StoreError(_) | AppError::TokenError(_) => "서버 오류가 발생했습니다".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::LocationOutOfRegion(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::LookupFailure(_)
            | AppError::StoreError(_)
            | AppError::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열은 내부 원인을 로그로만 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::warn!("요청 거부: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.code(),
            "message": self.public_message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 저장소 드라이버 에러를 단계 정보와 함께 `StoreError`로 변환하는 확장 trait
pub trait StoreContext<T> {
    /// 어느 단계에서 실패했는지 함께 기록합니다.
    fn store_context(self, step: &str) -> AppResult<T>;
}

impl<T, E> StoreContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn store_context(self, step: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StoreError(format!("{}: {}", step, e)))
    }
}
