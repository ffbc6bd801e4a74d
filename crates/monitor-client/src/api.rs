//! 주식 모니터 API 파사드.
//!
//! 논리 연산마다 함수 하나씩, 요청을 만들어 어댑터에 넘기는
//! 순수 패스스루입니다. 응답 본문은 가공 없이 그대로 전달됩니다.
//!
//! 엔드포인트 경로는 백엔드 라우터 기준입니다:
//! `/stock/*`, `/strategies/*`, `/notifications/*`.

use crate::client::{encode_segment, ApiClient};
use crate::error::ApiResult;
use monitor_core::{
    ApiConfig, BacktestRequest, KlineSeries, NewStock, NotifySettings, Period, StatusReply, Stock,
    StockKind, Strategy,
};
use serde_json::Value;

/// 주식 모니터 백엔드 파사드.
#[derive(Debug, Clone)]
pub struct StockApi {
    client: ApiClient,
}

impl StockApi {
    /// 주어진 어댑터 위에 파사드를 생성합니다.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 주어진 설정으로 파사드를 생성합니다.
    pub fn with_config(config: ApiConfig) -> Self {
        Self::new(ApiClient::new(config))
    }

    /// 내부 어댑터 참조를 반환합니다.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // ========================================
    // 감시 목록 (watchlist)
    // ========================================

    /// 감시 종목 목록을 조회합니다. `GET /stock/list`
    pub async fn list_stocks(&self) -> ApiResult<Vec<Stock>> {
        self.client.get("/stock/list").await
    }

    /// 종목을 감시 목록에 추가합니다. `POST /stock/add`
    pub async fn add_stock(&self, stock: &NewStock) -> ApiResult<Stock> {
        self.client.post("/stock/add", stock).await
    }

    /// 종목을 감시 목록에서 제거합니다. `DELETE /stock/delete/{code}`
    pub async fn delete_stock(&self, stock_code: &str) -> ApiResult<StatusReply> {
        let path = format!("/stock/delete/{}", encode_segment(stock_code));
        self.client.delete(&path).await
    }

    // ========================================
    // 전략 (strategies)
    // ========================================

    /// 종목의 전략 설정을 조회합니다. `GET /strategies/{code}`
    ///
    /// 전략이 없으면 백엔드가 기본값(30/70, 일봉, RSI 14)을 돌려줍니다.
    pub async fn strategy(&self, stock_code: &str) -> ApiResult<Strategy> {
        let path = format!("/strategies/{}", encode_segment(stock_code));
        self.client.get(&path).await
    }

    /// 전략 설정을 갱신합니다. `POST /strategies/update`
    pub async fn update_strategy(&self, strategy: &Strategy) -> ApiResult<StatusReply> {
        self.client.post("/strategies/update", strategy).await
    }

    // ========================================
    // 알림 설정 (notifications)
    // ========================================

    /// 알림 설정을 조회합니다. `GET /notifications/settings`
    pub async fn notify_settings(&self) -> ApiResult<NotifySettings> {
        self.client.get("/notifications/settings").await
    }

    /// 알림 설정을 갱신합니다. `POST /notifications/update`
    pub async fn update_notify_settings(
        &self,
        settings: &NotifySettings,
    ) -> ApiResult<StatusReply> {
        self.client.post("/notifications/update", settings).await
    }

    // ========================================
    // 시세/지표 (market data)
    // ========================================

    /// 종목 지표 요약을 조회합니다. `GET /stock/metrics/{code}`
    ///
    /// 응답 형태는 백엔드 버전에 따라 달라지므로 무가공 JSON으로
    /// 전달합니다.
    pub async fn stock_metrics(&self, stock_code: &str) -> ApiResult<Value> {
        let path = format!("/stock/metrics/{}", encode_segment(stock_code));
        self.client.get(&path).await
    }

    /// 캔들 시계열을 조회합니다. `GET /stock/kline/{code}?period=...`
    ///
    /// `period`는 경로가 아니라 쿼리 파라미터로 전달됩니다.
    pub async fn kline(&self, stock_code: &str, period: Period) -> ApiResult<KlineSeries> {
        let path = format!("/stock/kline/{}", encode_segment(stock_code));
        self.client
            .get_with_query(&path, &[("period", period.as_query_value())])
            .await
    }

    /// 지표가 포함된 확장 캔들 시계열을 조회합니다.
    /// `GET /stock/kline-enhanced/{code}?period=...&stock_type=...`
    pub async fn kline_enhanced(
        &self,
        stock_code: &str,
        period: Period,
        kind: StockKind,
    ) -> ApiResult<KlineSeries> {
        let path = format!("/stock/kline-enhanced/{}", encode_segment(stock_code));
        let kind = kind.to_string();
        self.client
            .get_with_query(
                &path,
                &[
                    ("period", period.as_query_value()),
                    ("stock_type", kind.as_str()),
                ],
            )
            .await
    }

    // ========================================
    // 백테스트 (backtest)
    // ========================================

    /// 백테스트를 실행합니다. `POST /stock/backtest`
    ///
    /// 결과 리포트의 형태는 백엔드가 결정하므로 무가공 JSON으로
    /// 전달합니다.
    pub async fn run_backtest(&self, request: &BacktestRequest) -> ApiResult<Value> {
        self.client.post("/stock/backtest", request).await
    }
}
