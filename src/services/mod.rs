//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 있으며, 저장소/외부 조회/토큰 서명은 trait 포트로 주입됩니다.
//!
//! # Features
//!
//! - 지역 제한 사용자 가입 ([`users::UserRegistrationService`])
//! - 프로필 조회 ([`users::ProfileService`])
//! - 경계 상자 검사와 역지오코딩 ([`location`])
//! - JWT 토큰 발급 ([`auth`])

pub mod users;
pub mod location;
pub mod auth;
