//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): `users` 컬렉션에 저장되는 영속 엔티티
//! - [`NewUser`](user::NewUser): 가입 흐름이 저장소에 넘기는 신규 사용자 값
//! - [`UserProfile`](user::UserProfile): 이름, 이메일, 도시만 담는 조회용 projection
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::NewUser;
//!
//! let new_user = NewUser::new(
//!     request.name,
//!     request.email,
//!     &location.city,
//!     &region.unknown_city,
//!     request.latitude,
//!     request.longitude,
//! );
//! ```

pub mod user;
