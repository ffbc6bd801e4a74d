//! 캔들 데이터 조회 주기 정의.
//!
//! 백엔드는 일/주/월봉과 분봉(1, 5, 15, 30, 60분)을 지원하며
//! 쿼리 파라미터로 문자열 값을 받습니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 캔들 조회 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Period {
    /// 일봉
    Daily,
    /// 주봉
    Weekly,
    /// 월봉
    Monthly,
    /// 1분봉
    Min1,
    /// 5분봉
    Min5,
    /// 15분봉
    Min15,
    /// 30분봉
    Min30,
    /// 60분봉
    Min60,
}

impl Period {
    /// 백엔드 쿼리 파라미터 값으로 변환합니다.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Min1 => "1",
            Period::Min5 => "5",
            Period::Min15 => "15",
            Period::Min30 => "30",
            Period::Min60 => "60",
        }
    }

    /// 분봉 여부를 반환합니다.
    ///
    /// 분봉은 시간 값이 `YYYY-MM-DD HH:MM` 형식으로 내려옵니다.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Period::Min1 | Period::Min5 | Period::Min15 | Period::Min30 | Period::Min60
        )
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Daily
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "d" => Ok(Period::Daily),
            "weekly" | "w" => Ok(Period::Weekly),
            "monthly" | "m" => Ok(Period::Monthly),
            "1" => Ok(Period::Min1),
            "5" => Ok(Period::Min5),
            "15" => Ok(Period::Min15),
            "30" => Ok(Period::Min30),
            "60" => Ok(Period::Min60),
            _ => Err(format!("Unknown period: {}", s)),
        }
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.as_query_value().to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values_match_backend() {
        assert_eq!(Period::Daily.as_query_value(), "daily");
        assert_eq!(Period::Min60.as_query_value(), "60");
        assert_eq!(Period::Weekly.as_query_value(), "weekly");
    }

    #[test]
    fn test_parse_roundtrip() {
        for p in [
            Period::Daily,
            Period::Weekly,
            Period::Monthly,
            Period::Min1,
            Period::Min5,
            Period::Min15,
            Period::Min30,
            Period::Min60,
        ] {
            assert_eq!(p.as_query_value().parse::<Period>(), Ok(p));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("4h".parse::<Period>().is_err());
    }

    #[test]
    fn test_intraday() {
        assert!(Period::Min30.is_intraday());
        assert!(!Period::Daily.is_intraday());
    }
}
