//! 공유 HTTP 어댑터.
//!
//! 모든 엔드포인트 호출이 거치는 단일 `reqwest::Client`입니다.
//! 생성 시점에 베이스 URL, 10초 타임아웃, JSON 기본 헤더가 고정되며
//! 이후에는 가변 상태가 없으므로 동시 호출 간에 안전하게 공유됩니다.

use crate::error::{ApiError, ApiResult};
use monitor_core::ApiConfig;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// 공유 HTTP 클라이언트 어댑터.
///
/// `Clone`이 저렴하며(내부 `reqwest::Client`는 `Arc` 기반) 여러 태스크에서
/// 동시에 사용할 수 있습니다. 호출당 한 번만 시도합니다.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    /// 주어진 설정으로 어댑터를 생성합니다.
    pub fn new(config: ApiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// 기본 설정(로컬 백엔드, 10초 타임아웃)으로 어댑터를 생성합니다.
    pub fn with_defaults() -> Self {
        Self::new(ApiConfig::default())
    }

    /// 환경 변수 설정으로 어댑터를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// 현재 설정 참조를 반환합니다.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 베이스 URL에 경로를 결합합니다. `path`는 `/`로 시작해야 합니다.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url_trimmed(), path)
    }

    /// GET 요청을 보내고 응답 본문을 역직렬화합니다.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        self.execute(self.client.get(&url)).await
    }

    /// 쿼리 파라미터가 있는 GET 요청을 보냅니다.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");
        self.execute(self.client.get(&url).query(query)).await
    }

    /// JSON 본문과 함께 POST 요청을 보냅니다.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.execute(self.client.post(&url).json(body)).await
    }

    /// DELETE 요청을 보냅니다.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        self.execute(self.client.delete(&url)).await
    }

    /// 요청을 보내고 상태를 검사한 뒤 본문을 역직렬화합니다.
    ///
    /// 2xx가 아니면 본문을 그대로 `ApiError::Http`에 담아 돌려줍니다.
    /// 본문 해석은 호출자 몫입니다.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            error!(status = status.as_u16(), %body, "API request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse response body: {}", e)))
    }
}

/// 경로 세그먼트를 퍼센트 인코딩합니다.
///
/// 종목 코드는 사용자 입력이므로 경로에 끼워 넣기 전에 반드시
/// 인코딩해야 합니다.
pub(crate) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
