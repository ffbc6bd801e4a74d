//! API 클라이언트 에러 타입.

use thiserror::Error;

/// API 호출 관련 에러.
///
/// 이 계층은 에러를 복구하거나 재시도하지 않고 그대로 전파합니다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 네트워크/연결 에러 (연결 거부, DNS 실패 등)
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃 (10초 초과)
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 2xx가 아닌 HTTP 응답. 서버가 보낸 본문을 그대로 담습니다.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP 상태 코드
        status: u16,
        /// 서버 응답 본문 (무가공)
        body: String,
    },

    /// 2xx 응답 본문의 역직렬화 실패
    #[error("Parse error: {0}")]
    Parse(String),
}

/// API 호출을 위한 Result 타입.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 타임아웃 에러인지 확인합니다.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    /// 2xx가 아닌 응답의 상태 코드를 반환합니다.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 호출자가 재시도해 볼 만한 에러인지 확인합니다.
    ///
    /// 이 계층 자체는 재시도하지 않습니다. UI가 재시도 버튼을 띄울지
    /// 판단하는 용도입니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::Parse(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
