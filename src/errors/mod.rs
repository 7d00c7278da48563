//! 에러 타입 모듈
//!
//! 요청 처리 중 발생하는 [`AppError`]와 저장소 에러 변환용 확장 trait을 제공합니다.

pub mod errors;

pub use errors::*;
