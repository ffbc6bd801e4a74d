//! 백테스트 실행 명령어.

use anyhow::Result;
use monitor_client::StockApi;
use monitor_core::{BacktestRequest, Period};
use tracing::info;

/// 백엔드에서 T+1 RSI 전략 백테스트를 실행하고 리포트를 출력합니다.
pub async fn run(
    api: &StockApi,
    code: String,
    lower: f64,
    upper: f64,
    period: Period,
) -> Result<()> {
    info!(stock_code = %code, lower, upper, %period, "Running backtest");

    let request = BacktestRequest {
        stock_code: code.clone(),
        rsi_lower: lower,
        rsi_upper: upper,
        period,
    };

    let report = api.run_backtest(&request).await?;

    println!("종목 {} 백테스트 결과 (RSI {}/{}, {})", code, lower, upper, period);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
