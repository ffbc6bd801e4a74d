//! 캔들 응답 형태 진단 명령어.
//!
//! 백엔드에서 확장 캔들 시계열을 하나 받아 섹션별 개수와 첫/마지막
//! 항목을 표준 출력으로 찍습니다. 프론트엔드 차트가 기대하는 응답
//! 형태를 개발 중에 손으로 확인하는 용도입니다.

use anyhow::Result;
use monitor_client::StockApi;
use monitor_core::{KlineSeries, Period, StockKind};

/// 확장 캔들 시계열을 조회하고 응답 구조를 출력합니다.
pub async fn run(api: &StockApi, code: String, period: Period, etf: bool) -> Result<()> {
    let kind = if etf { StockKind::Etf } else { StockKind::Stock };
    let series = api.kline_enhanced(&code, period, kind).await?;

    print_shape(&code, &series);

    Ok(())
}

fn print_shape(code: &str, series: &KlineSeries) {
    println!("=== API Response Structure ({}) ===", code);
    for (name, count) in series.section_counts() {
        println!("{:<16} {}", name, count);
    }

    println!("\n=== K-line Data ===");
    if let (Some(first), Some(last)) = (series.kline.first(), series.kline.last()) {
        println!("First: {} close={}", first.time, first.close);
        println!("Last:  {} close={}", last.time, last.close);
    } else {
        println!("(empty)");
    }

    println!("\n=== RSI Data ===");
    if let (Some(first), Some(last)) = (series.rsi.first(), series.rsi.last()) {
        println!("First: {} value={:.2}", first.time, first.value);
        println!("Last:  {} value={:.2}", last.time, last.value);
    } else {
        println!("(empty)");
    }

    println!("\n=== MACD Data ===");
    println!("MACD:      {}", series.macd.len());
    println!("Signal:    {}", series.macd_signal.len());
    println!("Histogram: {}", series.macd_histogram.len());

    println!("\n=== Markers ===");
    if let Some(first) = series.markers.first() {
        println!("Count: {}", series.markers.len());
        println!("First: {} {}", first.time, first.text);
    } else {
        println!("(none)");
    }

    println!(
        "\nConsistency: {}",
        if series.is_consistent() { "ok" } else { "MISMATCH" }
    );
}
