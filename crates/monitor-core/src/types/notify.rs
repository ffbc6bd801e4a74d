//! 알림 설정 타입.

use serde::{Deserialize, Serialize};

/// 사용자 알림 설정.
///
/// `/notifications/settings` 응답이자 `/notifications/update` 요청 본문.
/// 설정이 없으면 백엔드는 빈 객체를 돌려줍니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifySettings {
    /// 알림 수신 이메일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 텔레그램 챗 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<String>,
}

impl NotifySettings {
    /// 수신 채널이 하나라도 설정되어 있는지 확인합니다.
    pub fn has_channel(&self) -> bool {
        self.email.is_some() || self.telegram_id.is_some()
    }
}
