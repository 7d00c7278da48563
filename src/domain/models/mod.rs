//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델을 정의합니다.
//!
//! - [`token`] - 가입 시 발급하는 JWT 클레임
//! - [`location`] - 역지오코딩 API 응답과 조회 결과

pub mod token;
pub mod location;
