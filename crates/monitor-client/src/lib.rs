//! 주식 모니터 백엔드 HTTP 클라이언트.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `ApiClient`: 베이스 URL, 10초 타임아웃, JSON 기본 헤더를 가진
//!   공유 HTTP 어댑터 (GET/POST/DELETE)
//! - `StockApi`: 논리 연산별 함수 하나씩의 얇은 파사드
//! - `ApiError`: 네트워크 / 타임아웃 / HTTP 상태 에러 분류
//!
//! 재시도, 백오프, 서킷 브레이커는 없습니다. 호출당 한 번만 시도하며
//! 모든 에러는 해석 없이 호출자에게 전파됩니다.

pub mod api;
pub mod client;
pub mod error;

pub use api::StockApi;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
