//! 종목별 전략 설정 명령어.

use anyhow::Result;
use monitor_client::StockApi;
use monitor_core::Period;

/// 종목의 전략 설정을 출력합니다.
pub async fn run_show(api: &StockApi, code: String) -> Result<()> {
    let strategy = api.strategy(&code).await?;

    println!("종목 {} 전략 설정", code);
    println!("  RSI 하한:    {}", strategy.rsi_low);
    println!("  RSI 상한:    {}", strategy.rsi_high);
    println!("  계산 주기:   {}", strategy.rsi_period);
    println!("  RSI 길이:    {}", strategy.rsi_length);
    println!(
        "  푸시 알림:   {}",
        if strategy.enable_push { "켜짐" } else { "꺼짐" }
    );

    Ok(())
}

/// 종목의 전략 설정을 갱신합니다.
///
/// 지정하지 않은 값은 현재 설정(또는 백엔드 기본값)을 유지합니다.
pub async fn run_set(
    api: &StockApi,
    code: String,
    low: Option<f64>,
    high: Option<f64>,
    period: Option<Period>,
    no_push: bool,
) -> Result<()> {
    let mut strategy = api.strategy(&code).await?;
    // 기본값 응답에는 stock_code가 비어 있다
    strategy.stock_code = code.clone();

    if let Some(low) = low {
        strategy.rsi_low = low;
    }
    if let Some(high) = high {
        strategy.rsi_high = high;
    }
    if let Some(period) = period {
        strategy.rsi_period = period;
    }
    if no_push {
        strategy.enable_push = false;
    }

    let reply = api.update_strategy(&strategy).await?;
    if reply.is_ok() {
        println!(
            "전략 갱신 완료: {} (RSI {}/{}, {})",
            code, strategy.rsi_low, strategy.rsi_high, strategy.rsi_period
        );
    }

    Ok(())
}
