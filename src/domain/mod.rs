//! # Domain Layer Module
//!
//! 가입 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - users 컬렉션에 저장되는 User, 신규 사용자 값, 프로필 projection
//! ├── dto       - HTTP 요청/응답 본문
//! └── models    - JWT 클레임, 역지오코딩 응답 같은 외부 연동 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;
