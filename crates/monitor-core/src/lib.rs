//! # Monitor Core
//!
//! 주식 모니터 클라이언트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 클라이언트 전반에서 사용되는 기본 타입을 제공합니다:
//! - 감시 종목 및 종목 등록 타입
//! - 종목별 전략 설정
//! - 알림 설정
//! - 캔들(K선) 시계열 및 서버 계산 지표 구조체
//! - SPA 라우트 테이블
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod logging;
pub mod routes;
pub mod types;

pub use config::*;
pub use logging::*;
pub use routes::*;
pub use types::*;
