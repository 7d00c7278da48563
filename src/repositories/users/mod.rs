//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) trait과 MongoDB 기반
//! [`MongoUserRepository`](user_repo::MongoUserRepository)를 제공합니다.

pub mod user_repo;
