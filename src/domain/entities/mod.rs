//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//! 모든 엔티티는 `serde`로 BSON과 상호 변환되며, 문서 키 `_id`는 저장소가 발급한 문자열입니다.

pub mod users;
