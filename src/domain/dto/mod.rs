//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티를 그대로 내보내지 않고, 응답마다 노출할 필드를 명시적으로 고릅니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # 클라이언트 → 서버 (validator 검증 포함)
//!     └── response/   # 서버 → 클라이언트
//! ```

pub mod users;
