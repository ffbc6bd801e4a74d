//! 설정 관리.
//!
//! 클라이언트 설정은 기본값 또는 환경 변수 두 가지로 만들 수 있습니다:
//!
//! - `MONITOR_API_BASE_URL` (기본값: "http://127.0.0.1:8000/api")
//! - `MONITOR_API_TIMEOUT_MS` (기본값: "10000")

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 기본 API 베이스 URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// 기본 요청 타임아웃 (밀리초).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// API 클라이언트 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 모든 요청이 상대 경로로 해석되는 베이스 URL
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// 주어진 베이스 URL로 설정을 생성합니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// 타임아웃을 지정합니다.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// 환경 변수에서 설정을 생성합니다. 없는 값은 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MONITOR_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_ms = std::env::var("MONITOR_API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            base_url,
            timeout_ms,
        }
    }

    /// 타임아웃을 `Duration`으로 반환합니다.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 끝의 `/`를 제거한 베이스 URL을 반환합니다.
    ///
    /// 경로 결합 시 `//`가 생기지 않도록 합니다.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
