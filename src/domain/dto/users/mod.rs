//! 사용자 관련 DTO 모듈
//!
//! 가입 요청과 가입/프로필 응답을 정의합니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
