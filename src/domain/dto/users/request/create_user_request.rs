//! # 사용자 가입 요청 DTO
//!
//! `POST /user/signup` 요청 본문을 정의합니다.
//! 클라이언트 입력 데이터의 형식 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 길이: 1-100자
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 중복 여부는 서비스 계층과 저장소 유니크 인덱스에서 검증
//!
//! ### 좌표 (`latitude`, `longitude`)
//! - 유한한 실수, 소수점 이하 최대 8자리
//! - 허용 지역 범위는 설정된 경계 상자로 서비스 계층에서 검사
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "John Doe",
//!   "email": "john.doe@example.com",
//!   "latitude": 30.0456789,
//!   "longitude": 31.2345678
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 좌표에 허용되는 소수점 이하 자릿수
const MAX_COORDINATE_DECIMALS: usize = 8;

/// 가입 요청 DTO
///
/// 네 필드 모두 필수이며, 누락 시 JSON 추출 단계에서 400으로 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_coordinates"))]
pub struct CreateUserRequest {
    /// 사용자 이름
    #[validate(length(
        min = 1,
        max = 100,
        message = "이름은 1-100자 사이여야 합니다"
    ))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 위도 (십진 도)
    pub latitude: f64,

    /// 경도 (십진 도)
    pub longitude: f64,
}

/// 위도와 경도가 유한한 값이며 소수점 이하 8자리 이내인지 검증
fn validate_coordinates(req: &CreateUserRequest) -> Result<(), ValidationError> {
    for value in [req.latitude, req.longitude] {
        if !value.is_finite() {
            return Err(ValidationError::new("invalid_coordinate")
                .with_message("좌표는 유한한 숫자여야 합니다".into()));
        }

        if decimal_places(value) > MAX_COORDINATE_DECIMALS {
            return Err(ValidationError::new("coordinate_precision")
                .with_message("좌표는 소수점 이하 8자리까지 허용됩니다".into()));
        }
    }

    Ok(())
}

/// `f64`의 최단 왕복 표현 기준 소수점 이하 자릿수
fn decimal_places(value: f64) -> usize {
    let repr = value.to_string();
    repr.split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}
