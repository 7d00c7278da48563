//! User Entity Implementation
//!
//! 가입한 사용자를 표현하는 영속 엔티티와, 가입 흐름이 저장소에 넘기는
//! 신규 사용자 값을 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나에 대응합니다.
/// `id`와 두 타임스탬프는 저장소만 채웁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열, `_id`로 저장
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이름 (1-100자)
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 역지오코딩으로 확인한 도시, 확인하지 못한 경우 설정된 대체 값
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 저장소가 발급한 ID와 시각으로 엔티티를 완성합니다.
    pub fn from_new(new_user: NewUser, id: String, now: DateTime) -> Self {
        let NewUser {
            name,
            email,
            city,
            latitude,
            longitude,
        } = new_user;

        Self {
            id,
            name,
            email,
            city,
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 아직 저장되지 않은 신규 사용자
///
/// 가입 요청 필드와 조회된 도시를 빠짐없이 명시해서 담습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewUser {
    /// 도시가 비어 있으면 `unknown_city`로 대체합니다.
    pub fn new(
        name: String,
        email: String,
        city: &str,
        unknown_city: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let city = match city.trim() {
            "" => unknown_city.to_string(),
            resolved => resolved.to_string(),
        };

        Self {
            name,
            email,
            city,
            latitude,
            longitude,
        }
    }
}

/// 프로필 조회용 projection
///
/// 좌표와 타임스탬프는 이 경로로 절대 노출되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub city: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            city: user.city.clone(),
        }
    }
}
