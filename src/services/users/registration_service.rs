//! # 사용자 가입 서비스 구현
//!
//! 가입 요청 하나를 다음 순서로 처리하며, 처음 실패한 단계에서 끝납니다.
//!
//! ```text
//! 1. 이메일 중복 확인        → DuplicateEmail
//! 2. 경계 상자 검사 (로컬)    → LocationOutOfRegion (외부 조회, 저장 없음)
//! 3. 역지오코딩 조회          → LookupFailure
//! 4. 국가 코드 확인          → LocationOutOfRegion
//! 5. 저장 (create → save)   → DuplicateEmail / StoreError
//! 6. 토큰 발급
//! ```
//!
//! 1번은 빠른 거절일 뿐이며, 동시 가입 경쟁은 저장소의 유니크 인덱스가 최종 판단합니다.

use std::sync::Arc;
use crate::{
    config::RegionConfig,
    domain::{
        dto::users::{request::CreateUserRequest, response::SignUpResponse},
        entities::users::user::NewUser,
    },
    errors::{AppError, AppResult},
    repositories::users::user_repo::UserStore,
    services::{auth::TokenSigner, location::{LocationLookup, RegionValidator}},
};

/// 지역 제한 가입 서비스
pub struct UserRegistrationService {
    store: Arc<dyn UserStore>,
    lookup: Arc<dyn LocationLookup>,
    signer: Arc<dyn TokenSigner>,
    validator: RegionValidator,
    country_code: String,
    unknown_city: String,
}

impl UserRegistrationService {
    pub fn new(
        store: Arc<dyn UserStore>,
        lookup: Arc<dyn LocationLookup>,
        signer: Arc<dyn TokenSigner>,
        region: &RegionConfig,
    ) -> Self {
        Self {
            store,
            lookup,
            signer,
            validator: RegionValidator::new(region),
            country_code: region.country_code.clone(),
            unknown_city: region.unknown_city.clone(),
        }
    }

    /// 새 사용자 가입
    ///
    /// 요청 필드 형식 검증은 핸들러에서 끝난 상태여야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateEmail` - 이미 등록된 이메일
    /// * `AppError::LocationOutOfRegion` - 경계 상자 밖이거나 다른 국가로 확인됨
    /// * `AppError::LookupFailure` - 위치 조회 실패
    /// * `AppError::StoreError` - 저장소 장애 (토큰은 발급되지 않음)
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<SignUpResponse> {
        let CreateUserRequest {
            name,
            email,
            latitude,
            longitude,
        } = request;

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        if !self.validator.is_within_region(latitude, longitude) {
            return Err(AppError::LocationOutOfRegion(format!(
                "({}, {}) 좌표가 경계 상자 밖입니다",
                latitude, longitude
            )));
        }

        let location = self.lookup.resolve(latitude, longitude).await?;

        if !location.country_code.eq_ignore_ascii_case(&self.country_code) {
            return Err(AppError::LocationOutOfRegion(format!(
                "({}, {}) 좌표가 {}로 확인되었습니다",
                latitude, longitude, location.country_code
            )));
        }

        let new_user = NewUser::new(
            name,
            email,
            &location.city,
            &self.unknown_city,
            latitude,
            longitude,
        );
        let user = self.store.save(self.store.create(new_user)).await?;

        let token = self.signer.sign(&user.id)?;

        log::info!("✅ 가입 완료: {} ({})", user.id, user.city);

        Ok(SignUpResponse::new(user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        registration_service, token_service, InMemoryUserStore, SaveFailure, StubLocationLookup,
    };

    fn request(email: &str, latitude: f64, longitude: f64) -> CreateUserRequest {
        CreateUserRequest {
            name: "Mona".to_string(),
            email: email.to_string(),
            latitude,
            longitude,
        }
    }

    #[actix_web::test]
    async fn test_cairo_signup_persists_city_and_issues_token() {
        let store = InMemoryUserStore::new();
        let service = registration_service(store.clone(), StubLocationLookup::resolving("Cairo", "EG"));

        let response = service.register(request("mona@example.com", 30.0444, 31.2357)).await.unwrap();

        let persisted = store.get(&response.user.id).unwrap();
        assert_eq!(persisted.city, "Cairo");
        assert_eq!(persisted.email, "mona@example.com");
        assert_eq!(response.user.city, "Cairo");

        assert!(!response.token.is_empty());
        let claims = token_service().verify_token(&response.token).unwrap();
        assert_eq!(claims.sub, response.user.id);
    }

    #[actix_web::test]
    async fn test_second_registration_is_duplicate() {
        let store = InMemoryUserStore::new();
        let service = registration_service(store.clone(), StubLocationLookup::resolving("Cairo", "EG"));

        service.register(request("mona@example.com", 30.0444, 31.2357)).await.unwrap();
        let result = service.register(request("mona@example.com", 30.0444, 31.2357)).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_outside_bounding_box_skips_lookup_and_persistence() {
        let store = InMemoryUserStore::new();
        let lookup = StubLocationLookup::resolving("Amman", "JO");
        let service = registration_service(store.clone(), lookup.clone());

        let result = service.register(request("mona@example.com", 35.0, 40.0)).await;

        assert!(matches!(result, Err(AppError::LocationOutOfRegion(_))));
        assert_eq!(lookup.calls(), 0);
        assert_eq!(store.save_calls(), 0);
    }

    #[actix_web::test]
    async fn test_lookup_failure_persists_nothing() {
        let store = InMemoryUserStore::new();
        let service = registration_service(store.clone(), StubLocationLookup::failing("connection refused"));

        let result = service.register(request("mona@example.com", 30.0444, 31.2357)).await;

        assert!(matches!(result, Err(AppError::LookupFailure(_))));
        assert_eq!(store.save_calls(), 0);
    }

    #[actix_web::test]
    async fn test_country_mismatch_persists_nothing() {
        let store = InMemoryUserStore::new();
        // 경계 상자 동쪽 끝은 사우디아라비아와 겹침
        let service = registration_service(store.clone(), StubLocationLookup::resolving("Tabuk", "SA"));

        let result = service.register(request("mona@example.com", 28.3, 36.5)).await;

        assert!(matches!(result, Err(AppError::LocationOutOfRegion(_))));
        assert_eq!(store.save_calls(), 0);
    }

    #[actix_web::test]
    async fn test_country_code_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        let service = registration_service(store, StubLocationLookup::resolving("Giza", "eg"));

        assert!(service.register(request("mona@example.com", 30.0131, 31.2089)).await.is_ok());
    }

    #[actix_web::test]
    async fn test_unique_violation_on_save_is_duplicate() {
        let store = InMemoryUserStore::new();
        store.fail_saves_with(SaveFailure::Duplicate);
        let service = registration_service(store.clone(), StubLocationLookup::resolving("Cairo", "EG"));

        let result = service.register(request("mona@example.com", 30.0444, 31.2357)).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_store_failure_issues_no_token() {
        let store = InMemoryUserStore::new();
        store.fail_saves_with(SaveFailure::Unavailable);
        let service = registration_service(store.clone(), StubLocationLookup::resolving("Cairo", "EG"));

        let result = service.register(request("mona@example.com", 30.0444, 31.2357)).await;

        assert!(matches!(result, Err(AppError::StoreError(_))));
        assert_eq!(store.len(), 0);
    }
}
