//! 알림 설정 명령어.

use anyhow::Result;
use monitor_client::StockApi;
use monitor_core::NotifySettings;

/// 현재 알림 설정을 출력합니다.
pub async fn run_show(api: &StockApi) -> Result<()> {
    let settings = api.notify_settings().await?;

    if !settings.has_channel() {
        println!("설정된 알림 채널이 없습니다.");
        return Ok(());
    }

    println!("알림 설정");
    println!(
        "  이메일:   {}",
        settings.email.as_deref().unwrap_or("(없음)")
    );
    println!(
        "  텔레그램: {}",
        settings.telegram_id.as_deref().unwrap_or("(없음)")
    );

    Ok(())
}

/// 알림 설정을 갱신합니다.
pub async fn run_set(
    api: &StockApi,
    email: Option<String>,
    telegram_id: Option<String>,
) -> Result<()> {
    let settings = NotifySettings { email, telegram_id };
    let reply = api.update_notify_settings(&settings).await?;

    if reply.is_ok() {
        println!("알림 설정 갱신 완료");
    } else {
        println!("백엔드 응답: {}", reply.status);
    }

    Ok(())
}
