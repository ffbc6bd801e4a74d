//! 감시 종목 타입.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 종목 구분 (일반 주식 / ETF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockKind {
    /// 일반 주식
    Stock,
    /// ETF
    Etf,
}

impl Default for StockKind {
    fn default() -> Self {
        StockKind::Stock
    }
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockKind::Stock => f.write_str("stock"),
            StockKind::Etf => f.write_str("etf"),
        }
    }
}

impl FromStr for StockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" => Ok(StockKind::Stock),
            "etf" => Ok(StockKind::Etf),
            _ => Err(format!("Unknown stock kind: {}", s)),
        }
    }
}

/// 감시 목록에 등록된 종목.
///
/// 백엔드 `/stock/list` 및 `/stock/add` 응답 본문.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// 백엔드 레코드 ID
    pub id: i64,
    /// 종목 코드 (예: "588200")
    pub stock_code: String,
    /// 종목 이름
    pub stock_name: String,
    /// 종목 구분
    #[serde(default)]
    pub stock_type: StockKind,
}

/// 종목 등록 요청 본문 (`/stock/add`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    /// 종목 코드
    pub stock_code: String,
    /// 종목 이름
    pub stock_name: String,
    /// 종목 구분 (기본값: stock)
    #[serde(default)]
    pub stock_type: StockKind,
}

impl NewStock {
    /// 일반 주식 등록 요청을 생성합니다.
    pub fn new(stock_code: impl Into<String>, stock_name: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            stock_name: stock_name.into(),
            stock_type: StockKind::Stock,
        }
    }

    /// 종목 구분을 지정합니다.
    pub fn with_kind(mut self, kind: StockKind) -> Self {
        self.stock_type = kind;
        self
    }
}

/// 상태만 내려주는 백엔드 응답 (`{"status": "ok"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReply {
    /// 상태 문자열
    pub status: String,
}

impl StatusReply {
    /// 상태가 "ok"인지 확인합니다.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_deserialize_without_type() {
        // 구버전 백엔드 응답에는 stock_type이 없을 수 있다
        let json = r#"{"id": 3, "stock_code": "588200", "stock_name": "科创50ETF"}"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.stock_type, StockKind::Stock);
    }

    #[test]
    fn test_new_stock_serializes_kind() {
        let body = NewStock::new("510300", "沪深300ETF").with_kind(StockKind::Etf);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stock_type"], "etf");
    }

    #[test]
    fn test_status_reply() {
        let reply: StatusReply = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(reply.is_ok());
    }
}
