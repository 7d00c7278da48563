//! 사용자 서비스 모듈
//!
//! 지역 제한 가입과 프로필 조회 비즈니스 로직을 제공합니다.
//! 두 서비스 모두 생성자로 협력 객체를 받으며 전역 상태를 쓰지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{ProfileService, UserRegistrationService};
//!
//! let registration = UserRegistrationService::new(store.clone(), lookup, signer, &config.region);
//! let response = registration.register(request).await?;
//!
//! let profiles = ProfileService::new(store);
//! let profile = profiles.get_profile(&response.user.id).await?;
//! ```

pub mod registration_service;
pub mod profile_service;

pub use registration_service::*;
pub use profile_service::*;
