//! 감시 목록 명령어 (list / add / remove).

use anyhow::Result;
use monitor_client::StockApi;
use monitor_core::{NewStock, StockKind};
use tracing::info;

/// 감시 종목 목록을 출력합니다.
pub async fn run_list(api: &StockApi) -> Result<()> {
    let stocks = api.list_stocks().await?;

    if stocks.is_empty() {
        println!("감시 중인 종목이 없습니다.");
        return Ok(());
    }

    println!("{:<6} {:<10} {:<8} 이름", "ID", "코드", "구분");
    for stock in &stocks {
        println!(
            "{:<6} {:<10} {:<8} {}",
            stock.id, stock.stock_code, stock.stock_type, stock.stock_name
        );
    }
    println!("\n총 {}개 종목", stocks.len());

    Ok(())
}

/// 종목을 감시 목록에 추가합니다.
pub async fn run_add(api: &StockApi, code: String, name: String, etf: bool) -> Result<()> {
    let kind = if etf { StockKind::Etf } else { StockKind::Stock };
    let stock = api
        .add_stock(&NewStock::new(code, name).with_kind(kind))
        .await?;

    info!(stock_code = %stock.stock_code, id = stock.id, "Stock added");
    println!("종목 추가 완료: {} ({})", stock.stock_name, stock.stock_code);

    Ok(())
}

/// 종목을 감시 목록에서 제거합니다.
pub async fn run_remove(api: &StockApi, code: String) -> Result<()> {
    let reply = api.delete_stock(&code).await?;

    if reply.is_ok() {
        println!("종목 제거 완료: {}", code);
    } else {
        println!("백엔드 응답: {}", reply.status);
    }

    Ok(())
}
