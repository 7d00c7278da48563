//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스가 의존하는 [`UserStore`](users::user_repo::UserStore) 포트와
//! MongoDB 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::{MongoUserRepository, UserStore};
//!
//! let user_repo = MongoUserRepository::new(database, config.database.timeout);
//! user_repo.create_indexes().await?;
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
