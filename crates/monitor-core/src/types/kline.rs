//! 캔들(K선) 시계열 및 서버 계산 지표 타입.
//!
//! 백엔드는 OHLCV 본체와 함께 이동평균, 볼린저 밴드, RSI, MACD,
//! 거래량 막대, 매수/매도 마커를 병렬 배열로 내려줍니다.
//! 지표 배열은 워밍업 구간만큼 본체보다 짧을 수 있으며, 지표 계산이
//! 실패하면 본체만 내려옵니다.

use serde::{Deserialize, Serialize};

/// 단일 캔들 (OHLCV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlinePoint {
    /// 시간 문자열 (일봉: `YYYY-MM-DD`, 분봉: `YYYY-MM-DD HH:MM`)
    pub time: String,
    /// 시가
    pub open: f64,
    /// 고가
    pub high: f64,
    /// 저가
    pub low: f64,
    /// 종가
    pub close: f64,
    /// 거래량
    pub volume: f64,
}

/// 지표 시계열의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    /// 시간 문자열
    pub time: String,
    /// 지표 값
    pub value: f64,
}

/// 거래량 히스토그램 막대 (상승/하락 색상 포함).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    /// 시간 문자열
    pub time: String,
    /// 거래량
    pub value: f64,
    /// 차트 색상 코드
    pub color: String,
}

/// 차트 마커 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    /// 캔들 아래 (매수 신호)
    BelowBar,
    /// 캔들 위 (매도 신호)
    AboveBar,
}

/// 차트 마커 모양.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    /// 위쪽 화살표
    ArrowUp,
    /// 아래쪽 화살표
    ArrowDown,
}

/// RSI 기반 매수/매도 신호 마커.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalMarker {
    /// 시간 문자열
    pub time: String,
    /// 마커 위치
    pub position: MarkerPosition,
    /// 색상 코드
    pub color: String,
    /// 마커 모양
    pub shape: MarkerShape,
    /// 마커 라벨 (예: "B:28")
    pub text: String,
}

/// 캔들 시계열 전체 응답 (`/stock/kline/{code}`).
///
/// 모든 지표 섹션은 응답에서 빠질 수 있으며 그 경우 빈 배열로 처리됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KlineSeries {
    /// OHLCV 본체
    #[serde(default)]
    pub kline: Vec<KlinePoint>,
    /// 5일 이동평균
    #[serde(default)]
    pub ma5: Vec<IndicatorPoint>,
    /// 10일 이동평균
    #[serde(default)]
    pub ma10: Vec<IndicatorPoint>,
    /// 20일 이동평균
    #[serde(default)]
    pub ma20: Vec<IndicatorPoint>,
    /// 60일 이동평균
    #[serde(default)]
    pub ma60: Vec<IndicatorPoint>,
    /// 볼린저 밴드 상단
    #[serde(default)]
    pub boll_upper: Vec<IndicatorPoint>,
    /// 볼린저 밴드 중단
    #[serde(default)]
    pub boll_mid: Vec<IndicatorPoint>,
    /// 볼린저 밴드 하단
    #[serde(default)]
    pub boll_lower: Vec<IndicatorPoint>,
    /// RSI
    #[serde(default)]
    pub rsi: Vec<IndicatorPoint>,
    /// MACD 본선
    #[serde(default)]
    pub macd: Vec<IndicatorPoint>,
    /// MACD 시그널선
    #[serde(default)]
    pub macd_signal: Vec<IndicatorPoint>,
    /// MACD 히스토그램
    #[serde(default)]
    pub macd_histogram: Vec<IndicatorPoint>,
    /// 거래량 막대
    #[serde(default)]
    pub volume: Vec<VolumeBar>,
    /// 매수/매도 신호 마커
    #[serde(default)]
    pub markers: Vec<SignalMarker>,
}

impl KlineSeries {
    /// 본체 캔들 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.kline.len()
    }

    /// 본체가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.kline.is_empty()
    }

    /// 보조 배열의 개수가 본체와 모순되지 않는지 확인합니다.
    ///
    /// 지표 배열은 워밍업 구간 때문에 본체보다 짧을 수 있지만
    /// 길 수는 없습니다. 거래량 막대는 캔들마다 하나씩 생성됩니다.
    pub fn is_consistent(&self) -> bool {
        let n = self.kline.len();
        let derived_ok = [
            &self.ma5,
            &self.ma10,
            &self.ma20,
            &self.ma60,
            &self.boll_upper,
            &self.boll_mid,
            &self.boll_lower,
            &self.rsi,
            &self.macd,
            &self.macd_signal,
            &self.macd_histogram,
        ]
        .iter()
        .all(|series| series.len() <= n);

        let volume_ok = self.volume.is_empty() || self.volume.len() == n;
        let markers_ok = self.markers.len() <= n;

        derived_ok && volume_ok && markers_ok
    }

    /// 섹션별 (이름, 개수) 목록을 반환합니다.
    ///
    /// 진단 출력에서 응답 형태를 요약할 때 사용합니다.
    pub fn section_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("kline", self.kline.len()),
            ("ma5", self.ma5.len()),
            ("ma10", self.ma10.len()),
            ("ma20", self.ma20.len()),
            ("ma60", self.ma60.len()),
            ("boll_upper", self.boll_upper.len()),
            ("boll_mid", self.boll_mid.len()),
            ("boll_lower", self.boll_lower.len()),
            ("rsi", self.rsi.len()),
            ("macd", self.macd.len()),
            ("macd_signal", self.macd_signal.len()),
            ("macd_histogram", self.macd_histogram.len()),
            ("volume", self.volume.len()),
            ("markers", self.markers.len()),
        ]
    }
}
