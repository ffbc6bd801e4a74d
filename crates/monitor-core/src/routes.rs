//! SPA 라우트 테이블.
//!
//! UI 경로와 페이지 식별자의 선언적 매핑입니다. 가드, 중첩 라우트,
//! 비동기 해석은 없으며 단일 `:param` 세그먼트만 지원합니다.

use serde::{Deserialize, Serialize};

/// 페이지 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// 감시 종목 목록
    StockList,
    /// 알림 설정
    NotifySettings,
    /// 종목 차트 (종목 코드로 파라미터화)
    Chart,
}

/// 라우트 정의 (경로 패턴 → 페이지).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    /// 경로 패턴 (예: "/chart/:code")
    pub path: &'static str,
    /// 대상 페이지
    pub page: Page,
}

/// 전체 라우트 테이블.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        page: Page::StockList,
    },
    RouteDef {
        path: "/notify",
        page: Page::NotifySettings,
    },
    RouteDef {
        path: "/chart/:code",
        page: Page::Chart,
    },
];

/// 라우트 매칭 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// 매칭된 페이지
    pub page: Page,
    /// `:param` 세그먼트에 매칭된 값
    pub param: Option<String>,
}

/// 요청 경로를 라우트 테이블에 대해 해석합니다.
///
/// 리터럴 세그먼트는 정확히 일치해야 하고 `:`로 시작하는 세그먼트는
/// 비어 있지 않은 아무 값에나 매칭됩니다.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let request: Vec<&str> = path.trim_end_matches('/').split('/').collect();

    for route in ROUTES {
        let pattern: Vec<&str> = route.path.trim_end_matches('/').split('/').collect();
        if pattern.len() != request.len() {
            continue;
        }

        let mut param = None;
        let mut matched = true;
        for (pat, seg) in pattern.iter().zip(request.iter()) {
            if let Some(_name) = pat.strip_prefix(':') {
                if seg.is_empty() {
                    matched = false;
                    break;
                }
                param = Some((*seg).to_string());
            } else if pat != seg {
                matched = false;
                break;
            }
        }

        if matched {
            return Some(RouteMatch {
                page: route.page,
                param,
            });
        }
    }

    None
}
