//! 테스트용 메모리 구현
//!
//! 서비스와 핸들러 테스트가 MongoDB나 외부 API 없이 돌도록
//! [`UserStore`]와 [`LocationLookup`]의 메모리 구현을 제공합니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use uuid::Uuid;
use crate::{
    config::{JwtConfig, RegionConfig},
    domain::entities::users::user::{NewUser, User, UserProfile},
    domain::models::location::ResolvedLocation,
    errors::{AppError, AppResult},
    repositories::users::user_repo::UserStore,
    services::{
        auth::JwtTokenService,
        location::LocationLookup,
        users::{ProfileService, UserRegistrationService},
    },
};

pub(crate) const TEST_JWT_SECRET: &str = "test-secret";

/// 강제로 일으킬 저장 실패
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SaveFailure {
    /// 유니크 인덱스 위반 (사전 검사를 통과한 동시 가입)
    Duplicate,
    /// 드라이버 장애
    Unavailable,
}

/// ID를 키로 사용자를 보관하는 저장소
///
/// 실제 저장소처럼 `save` 시점에 이메일 유니크 제약을 검사합니다.
#[derive(Default)]
pub(crate) struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
    save_calls: AtomicUsize,
    save_failure: Mutex<Option<SaveFailure>>,
}

impl InMemoryUserStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn fail_saves_with(&self, failure: SaveFailure) {
        *self.save_failure.lock().unwrap() = Some(failure);
    }

    /// 저장된 사용자 수
    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn get(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }

    /// 가입 흐름을 거치지 않고 사용자를 바로 넣습니다.
    pub(crate) fn insert(&self, name: &str, email: &str, city: &str) -> User {
        let user = User::from_new(
            NewUser::new(name.to_string(), email.to_string(), city, "Unknown", 30.0444, 31.2357),
            Uuid::new_v4().to_string(),
            DateTime::now(),
        );
        self.users.lock().unwrap().insert(user.id.clone(), user.clone());
        user
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_profile_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.users.lock().unwrap().get(id).map(UserProfile::from))
    }

    fn create(&self, new_user: NewUser) -> User {
        User::from_new(new_user, Uuid::new_v4().to_string(), DateTime::now())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        match *self.save_failure.lock().unwrap() {
            Some(SaveFailure::Duplicate) => return Err(AppError::DuplicateEmail),
            Some(SaveFailure::Unavailable) => {
                return Err(AppError::StoreError("사용자 저장: connection refused".to_string()))
            }
            None => {}
        }

        let mut users = self.users.lock().unwrap();
        if users.values().any(|other| other.email == user.email && other.id != user.id) {
            return Err(AppError::DuplicateEmail);
        }

        user.updated_at = DateTime::now();
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

/// 미리 정한 결과를 돌려주는 위치 조회
pub(crate) struct StubLocationLookup {
    result: Result<ResolvedLocation, String>,
    calls: AtomicUsize,
}

impl StubLocationLookup {
    pub(crate) fn resolving(city: &str, country_code: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(ResolvedLocation {
                city: city.to_string(),
                country_code: country_code.to_string(),
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationLookup for StubLocationLookup {
    async fn resolve(&self, _latitude: f64, _longitude: f64) -> AppResult<ResolvedLocation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(AppError::LookupFailure)
    }
}

pub(crate) fn egypt_region() -> RegionConfig {
    RegionConfig {
        min_latitude: 22.0,
        max_latitude: 31.5,
        min_longitude: 24.7,
        max_longitude: 36.9,
        country_code: "EG".to_string(),
        unknown_city: "Unknown".to_string(),
    }
}

pub(crate) fn token_service() -> JwtTokenService {
    JwtTokenService::new(&JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_hours: 1,
    })
}

pub(crate) fn registration_service(
    store: Arc<InMemoryUserStore>,
    lookup: Arc<StubLocationLookup>,
) -> UserRegistrationService {
    UserRegistrationService::new(store, lookup, Arc::new(token_service()), &egypt_region())
}

pub(crate) fn profile_service(store: Arc<InMemoryUserStore>) -> ProfileService {
    ProfileService::new(store)
}
