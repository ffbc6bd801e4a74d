//! StockApi 파사드 통합 테스트.
//!
//! mockito 서버에 대고 각 연산이 문서화된 메서드/경로/쿼리/본문과
//! 정확히 일치하는 요청을 만드는지 검증합니다.

use mockito::Matcher;
use monitor_client::{ApiError, StockApi};
use monitor_core::{
    ApiConfig, BacktestRequest, NewStock, NotifySettings, Period, StockKind, Strategy,
};
use serde_json::{json, Value};

fn api_for(server: &mockito::Server) -> StockApi {
    StockApi::with_config(ApiConfig::new(format!("{}/api", server.url())))
}

#[tokio::test]
async fn list_stocks_hits_documented_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/stock/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": 1, "stock_code": "588200", "stock_name": "科创50ETF", "stock_type": "etf"}]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let stocks = api_for(&server).list_stocks().await.unwrap();

    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].stock_code, "588200");
    assert_eq!(stocks[0].stock_type, StockKind::Etf);
    mock.assert_async().await;
}

#[tokio::test]
async fn add_stock_posts_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/stock/add")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "stock_code": "600036",
            "stock_name": "招商银行",
            "stock_type": "stock"
        })))
        .with_status(200)
        .with_body(
            r#"{"id": 2, "stock_code": "600036", "stock_name": "招商银行", "stock_type": "stock"}"#,
        )
        .create_async()
        .await;

    let stock = api_for(&server)
        .add_stock(&NewStock::new("600036", "招商银行"))
        .await
        .unwrap();

    assert_eq!(stock.id, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_stock_percent_encodes_code_segment() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/stock/delete/600%20036")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let reply = api_for(&server).delete_stock("600 036").await.unwrap();

    assert!(reply.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn strategy_accepts_backend_default_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/strategies/588200")
        .with_status(200)
        // 전략 미등록 시 stock_code 없이 기본값만 내려온다
        .with_body(
            r#"{"rsi_low": 30, "rsi_high": 70, "rsi_period": "daily", "rsi_length": 14, "enable_push": true}"#,
        )
        .create_async()
        .await;

    let strategy = api_for(&server).strategy("588200").await.unwrap();

    assert_eq!(strategy.rsi_low, 30.0);
    assert_eq!(strategy.rsi_period, Period::Daily);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_strategy_posts_full_settings() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/strategies/update")
        .match_body(Matcher::Json(json!({
            "stock_code": "588200",
            "rsi_low": 25.0,
            "rsi_high": 75.0,
            "rsi_period": "60",
            "rsi_length": 14,
            "enable_push": false
        })))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let mut strategy = Strategy::default_for("588200");
    strategy.rsi_low = 25.0;
    strategy.rsi_high = 75.0;
    strategy.rsi_period = Period::Min60;
    strategy.enable_push = false;

    let reply = api_for(&server).update_strategy(&strategy).await.unwrap();

    assert!(reply.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn notify_settings_roundtrip() {
    let mut server = mockito::Server::new_async().await;
    let get_mock = server
        .mock("GET", "/api/notifications/settings")
        .with_status(200)
        .with_body(r#"{"id": 1, "user_id": 1, "email": "a@b.c", "telegram_id": null}"#)
        .create_async()
        .await;
    let update_mock = server
        .mock("POST", "/api/notifications/update")
        .match_body(Matcher::Json(json!({"email": "a@b.c", "telegram_id": "42"})))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let api = api_for(&server);
    let mut settings = api.notify_settings().await.unwrap();
    assert_eq!(settings.email.as_deref(), Some("a@b.c"));

    settings.telegram_id = Some("42".to_string());
    let reply = api.update_notify_settings(&settings).await.unwrap();
    assert!(reply.is_ok());

    get_mock.assert_async().await;
    update_mock.assert_async().await;
}

#[tokio::test]
async fn kline_sends_period_as_query_parameter() {
    let mut server = mockito::Server::new_async().await;
    // period가 경로 세그먼트로 가면 이 mock에 매칭되지 않는다
    let mock = server
        .mock("GET", "/api/stock/kline/588200")
        .match_query(Matcher::UrlEncoded("period".into(), "daily".into()))
        .with_status(200)
        .with_body(
            r#"{"kline": [{"time": "2024-01-02", "open": 1.0, "high": 1.2, "low": 0.9, "close": 1.1, "volume": 100.0}],
                "rsi": [], "markers": []}"#,
        )
        .create_async()
        .await;

    let series = api_for(&server)
        .kline("588200", Period::Daily)
        .await
        .unwrap();

    assert_eq!(series.len(), 1);
    assert!(series.is_consistent());
    mock.assert_async().await;
}

#[tokio::test]
async fn kline_enhanced_sends_period_and_stock_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/stock/kline-enhanced/588200")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("period".into(), "30".into()),
            Matcher::UrlEncoded("stock_type".into(), "etf".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"kline": []}"#)
        .create_async()
        .await;

    let series = api_for(&server)
        .kline_enhanced("588200", Period::Min30, StockKind::Etf)
        .await
        .unwrap();

    assert!(series.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn run_backtest_posts_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/stock/backtest")
        .match_body(Matcher::Json(json!({
            "stock_code": "600036",
            "rsi_lower": 30.0,
            "rsi_upper": 70.0,
            "period": "daily"
        })))
        .with_status(200)
        .with_body(r#"{"return_pct": 12.5, "trades": 8}"#)
        .create_async()
        .await;

    let report = api_for(&server)
        .run_backtest(&BacktestRequest::new("600036"))
        .await
        .unwrap();

    // 리포트 본문은 무가공으로 전달된다
    assert_eq!(report["trades"], 8);
    mock.assert_async().await;
}

#[tokio::test]
async fn stock_metrics_passes_body_through_unmodified() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({"rsi": 28.4, "price": 1.07, "anything": ["the", "server", "sends"]});
    let mock = server
        .mock("GET", "/api/stock/metrics/588200")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let metrics = api_for(&server).stock_metrics("588200").await.unwrap();

    assert_eq!(metrics, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_body_surfaces_verbatim_with_single_attempt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/stock/list")
        .with_status(500)
        .with_body(r#"{"error": "db down"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = api_for(&server).list_stocks().await.unwrap_err();

    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, r#"{"error": "db down"}"#);
        }
        other => panic!("Expected ApiError::Http, got {:?}", other),
    }
    // expect(1): 재시도 없이 정확히 한 번만 호출
    mock.assert_async().await;
}

#[tokio::test]
async fn slow_server_rejects_with_timeout() {
    // 연결만 받고 아무 것도 응답하지 않는 서버
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        // 클라이언트 타임아웃이 지날 때까지 연결을 잡아둔다
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        drop(socket);
    });

    let config = ApiConfig::new(format!("http://{}/api", addr)).with_timeout_ms(100);
    let err = StockApi::with_config(config).list_stocks().await.unwrap_err();

    assert!(err.is_timeout());
    match err {
        ApiError::Timeout(_) => {}
        other => panic!("Expected ApiError::Timeout, got {:?}", other),
    }
    server.abort();
}

#[tokio::test]
async fn adapter_passes_opaque_body_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/notifications/update")
        .match_body(Matcher::Json(json!({"enabled": true})))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    // 어댑터 범용 verb로 임의 JSON을 그대로 전달할 수 있다
    let api = api_for(&server);
    let reply: Value = api
        .client()
        .post("/notifications/update", &json!({"enabled": true}))
        .await
        .unwrap();

    assert_eq!(reply["status"], "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_surfaces_as_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/stock/kline/000000")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"detail": "No data found"}"#)
        .create_async()
        .await;

    let err = api_for(&server)
        .kline("000000", Period::Daily)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}
