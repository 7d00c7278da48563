//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 가입/프로필 비즈니스 로직              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data`로 받고 `Result<HttpResponse, AppError>`를 반환합니다.
//! 에러 → 상태 코드 변환은 `AppError`의 `ResponseError` 구현이 담당합니다.

pub mod users;
