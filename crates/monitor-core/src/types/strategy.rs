//! 종목별 RSI 알림 전략 설정.

use super::Period;
use serde::{Deserialize, Serialize};

/// 단일 종목에 연결된 전략 설정.
///
/// `/strategies/{code}` 응답이자 `/strategies/update` 요청 본문.
/// 백엔드는 전략이 없으면 기본값(30/70, 일봉, RSI 14)을 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// 대상 종목 코드
    ///
    /// 전략 미등록 종목의 기본값 응답에는 포함되지 않습니다.
    #[serde(default)]
    pub stock_code: String,
    /// RSI 매수 신호 하한
    pub rsi_low: f64,
    /// RSI 매도 신호 상한
    pub rsi_high: f64,
    /// RSI 계산 주기
    #[serde(default)]
    pub rsi_period: Period,
    /// RSI 기간 길이
    #[serde(default = "default_rsi_length")]
    pub rsi_length: u32,
    /// 푸시 알림 활성화 여부
    pub enable_push: bool,
}

fn default_rsi_length() -> u32 {
    14
}

impl Strategy {
    /// 백엔드 기본값과 동일한 전략을 생성합니다.
    pub fn default_for(stock_code: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            rsi_low: 30.0,
            rsi_high: 70.0,
            rsi_period: Period::Daily,
            rsi_length: 14,
            enable_push: true,
        }
    }
}

/// 백테스트 실행 요청 본문 (`/stock/backtest`).
///
/// 백엔드의 T+1 RSI 전략 파라미터와 동일합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    /// 대상 종목 코드
    pub stock_code: String,
    /// RSI 매수 하한 (기본 30)
    #[serde(default = "default_rsi_lower")]
    pub rsi_lower: f64,
    /// RSI 매도 상한 (기본 70)
    #[serde(default = "default_rsi_upper")]
    pub rsi_upper: f64,
    /// 데이터 주기 (기본 daily)
    #[serde(default)]
    pub period: Period,
}

fn default_rsi_lower() -> f64 {
    30.0
}

fn default_rsi_upper() -> f64 {
    70.0
}

impl BacktestRequest {
    /// 기본 파라미터(30/70, 일봉)로 요청을 생성합니다.
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            rsi_lower: 30.0,
            rsi_upper: 70.0,
            period: Period::Daily,
        }
    }
}
