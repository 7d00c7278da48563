//! 위치 검증 서비스 모듈
//!
//! 가입 좌표가 허용 지역 안에 있는지 두 단계로 확인합니다.
//!
//! - [`RegionValidator`]: 설정된 경계 상자에 대한 로컬 포함 검사 (외부 호출 없음)
//! - [`LocationLookup`]: 역지오코딩으로 도시와 국가 코드를 확인하는 포트
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::location::{LocationLookup, RegionValidator};
//!
//! let validator = RegionValidator::new(&config.region);
//! if validator.is_within_region(30.0444, 31.2357) {
//!     let location = lookup.resolve(30.0444, 31.2357).await?;
//! }
//! ```

pub mod region_validator;
pub mod location_service;

pub use region_validator::*;
pub use location_service::*;
