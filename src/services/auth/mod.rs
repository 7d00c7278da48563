//! 인증 토큰 서비스 모듈
//!
//! 가입 성공 시 발급하는 JWT 토큰을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리 (기본 1시간)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{JwtTokenService, TokenSigner};
//!
//! let token_service = JwtTokenService::new(&config.jwt);
//! let token = token_service.sign(&user.id)?;
//! ```

pub mod token_service;

pub use token_service::*;
