//! 지역 제한 가입 서비스 백엔드
//!
//! 허용 지역(기본값: 이집트) 안에서만 가입을 받는 사용자 서비스입니다.
//! 좌표를 경계 상자로 먼저 거르고, 역지오코딩으로 국가를 확인한 뒤
//! 사용자를 저장하고 JWT 토큰을 발급합니다.
//!
//! # Features
//!
//! - **지역 제한 가입**: 경계 상자 검사 + 역지오코딩 국가 확인
//! - **프로필 조회**: 이름, 이메일, 도시만 노출
//! - **JWT 발급**: HS256, 설정된 유효 시간
//! - **MongoDB**: 사용자 데이터 영구 저장, 이메일 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/프로필 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Repositories   │     │  Location lookup │ ← 역지오코딩 API
//! └─────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geo_signup_backend::config::AppConfig;
//! use geo_signup_backend::services::users::UserRegistrationService;
//!
//! let config = AppConfig::from_env()?;
//! let registration = UserRegistrationService::new(store, lookup, signer, &config.region);
//! let response = registration.register(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod test_support;
