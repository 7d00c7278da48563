use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 가입 응답에 포함되는 사용자 DTO
///
/// 타임스탬프는 RFC 3339 문자열로 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            city,
            latitude,
            longitude,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            name,
            email,
            city,
            latitude,
            longitude,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 가입 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user: UserResponse,
    pub token: String,
}

impl SignUpResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: UserResponse::from(user),
            token,
        }
    }
}
