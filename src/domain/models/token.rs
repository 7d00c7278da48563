//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준 클레임 중 가입 토큰에 필요한 최소 항목만 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `user_id`: 사용자 ID (sub와 동일하지만 명시적 접근용)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}
