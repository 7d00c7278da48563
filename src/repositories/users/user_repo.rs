//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! 서비스는 [`UserStore`] trait에만 의존하며, 운영 구현은 MongoDB를 사용하는
//! [`MongoUserRepository`]입니다.
//!
//! ## 특징
//!
//! - **저장소가 식별자와 시각의 주인**: `create`가 UUID와 생성/수정 시각을 채움
//! - **유니크 인덱스가 최종 판단**: 중복 키 쓰기 실패는 `DuplicateEmail`로 변환
//! - **제한 시간**: 모든 작업은 설정된 시간 안에 끝나지 않으면 `StoreError`
//! - **projection 조회**: 프로필 경로는 이름, 이메일, 도시만 읽음

use std::future::IntoFuture;
use std::time::Duration;
use actix_web::rt::time::timeout;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::{
    db::Database,
    domain::entities::users::user::{NewUser, User, UserProfile},
    errors::{AppError, AppResult, StoreContext},
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const USERS_COLLECTION: &str = "users";

/// 사용자 저장소 인터페이스
///
/// 가입/프로필 서비스가 의존하는 포트입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자를 찾습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자를 찾되 이름, 이메일, 도시만 읽습니다.
    async fn find_profile_by_id(&self, id: &str) -> AppResult<Option<UserProfile>>;

    /// 신규 사용자에 ID와 생성/수정 시각을 부여해 엔티티를 만듭니다.
    ///
    /// 아직 저장하지 않으며, 저장은 [`UserStore::save`]가 담당합니다.
    fn create(&self, new_user: NewUser) -> User;

    /// 엔티티를 저장합니다. 없으면 삽입, 있으면 교체하며 `updated_at`을 갱신합니다.
    ///
    /// 이메일 유니크 제약 위반은 `AppError::DuplicateEmail`입니다.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
#[derive(Clone)]
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Database,
    /// 개별 작업 제한 시간
    op_timeout: Duration,
}

impl MongoUserRepository {
    pub fn new(db: Database, op_timeout: Duration) -> Self {
        Self { db, op_timeout }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(USERS_COLLECTION)
    }

    /// 작업에 제한 시간을 적용하고 드라이버 에러에 단계 정보를 붙입니다.
    async fn bounded<T, F>(&self, step: &str, operation: F) -> AppResult<T>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        timeout(self.op_timeout, operation.into_future())
            .await
            .map_err(|_| AppError::StoreError(format!("{}: {:?} 안에 응답 없음", step, self.op_timeout)))?
            .store_context(step)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **이메일 유니크 인덱스** (`email_unique`): 동시 가입 경쟁에서도 중복 이메일 방지
    /// 2. **생성일 인덱스** (`created_at_desc`): 최근 가입자 정렬
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성은 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.bounded(
            "인덱스 생성",
            self.collection::<User>().create_indexes([email_index, created_at_index]),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.bounded(
            "이메일로 사용자 조회",
            self.collection::<User>().find_one(doc! { "email": email }),
        )
        .await
    }

    async fn find_profile_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        self.bounded(
            "ID로 프로필 조회",
            self.collection::<UserProfile>()
                .find_one(doc! { "_id": id })
                .projection(doc! { "_id": 0, "name": 1, "email": 1, "city": 1 }),
        )
        .await
    }

    fn create(&self, new_user: NewUser) -> User {
        User::from_new(new_user, Uuid::new_v4().to_string(), DateTime::now())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.updated_at = DateTime::now();

        let result = timeout(
            self.op_timeout,
            self.collection::<User>()
                .replace_one(doc! { "_id": user.id.as_str() }, &user)
                .upsert(true)
                .into_future(),
        )
        .await
        .map_err(|_| AppError::StoreError(format!("사용자 저장: {:?} 안에 응답 없음", self.op_timeout)))?;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateEmail),
            Err(e) => Err(AppError::StoreError(format!("사용자 저장: {}", e))),
        }
    }
}

/// 유니크 인덱스 위반 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
