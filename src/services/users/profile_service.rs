//! 사용자 프로필 조회 서비스

use std::sync::Arc;
use crate::{
    domain::entities::users::user::UserProfile,
    errors::{AppError, AppResult},
    repositories::users::user_repo::UserStore,
};

/// 읽기 전용 프로필 조회 서비스
///
/// 이름, 이메일, 도시 외의 필드는 반환하지 않습니다.
pub struct ProfileService {
    store: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// ID로 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 해당 ID의 사용자가 없음
    /// * `AppError::StoreError` - 저장소 장애
    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserProfile> {
        self.store
            .find_profile_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }
}
