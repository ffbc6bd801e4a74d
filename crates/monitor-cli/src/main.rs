//! 주식 모니터 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 감시 종목 목록
//! monitor list
//!
//! # 종목 추가 / 제거
//! monitor add -c 588200 -n 科创50ETF --etf
//! monitor remove -c 588200
//!
//! # 전략 조회 및 갱신
//! monitor strategy -c 588200
//! monitor strategy -c 588200 --low 25 --high 75 --period 60
//!
//! # 캔들 응답 형태 진단 (개발용)
//! monitor inspect
//! monitor inspect -c 600036 --period 30
//! ```

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use monitor_client::StockApi;
use monitor_core::{init_logging_from_env, ApiConfig, Period};
use tracing::error;

mod commands;

#[derive(Parser)]
#[command(name = "monitor")]
#[command(about = "Stock monitor CLI - 주식 모니터 백엔드 조작 도구", long_about = None)]
#[command(version)]
struct Cli {
    /// API 베이스 URL (기본: MONITOR_API_BASE_URL 또는 로컬 백엔드)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 감시 종목 목록 보기
    List,

    /// 종목을 감시 목록에 추가
    Add {
        /// 종목 코드 (예: 588200)
        #[arg(short, long)]
        code: String,

        /// 종목 이름
        #[arg(short, long)]
        name: String,

        /// ETF 여부
        #[arg(long, default_value = "false")]
        etf: bool,
    },

    /// 종목을 감시 목록에서 제거
    Remove {
        /// 종목 코드
        #[arg(short, long)]
        code: String,
    },

    /// 종목 전략 조회 및 갱신
    Strategy {
        /// 종목 코드
        #[arg(short, long)]
        code: String,

        /// RSI 매수 하한
        #[arg(long)]
        low: Option<f64>,

        /// RSI 매도 상한
        #[arg(long)]
        high: Option<f64>,

        /// RSI 계산 주기 (daily, weekly, monthly, 1, 5, 15, 30, 60)
        #[arg(long)]
        period: Option<String>,

        /// 푸시 알림 비활성화
        #[arg(long, default_value = "false")]
        no_push: bool,
    },

    /// 알림 설정 조회 및 갱신
    Notify {
        /// 알림 수신 이메일
        #[arg(long)]
        email: Option<String>,

        /// 텔레그램 챗 ID
        #[arg(long)]
        telegram: Option<String>,
    },

    /// 백엔드에서 백테스트 실행
    Backtest {
        /// 종목 코드
        #[arg(short, long)]
        code: String,

        /// RSI 매수 하한 (기본 30)
        #[arg(long, default_value = "30")]
        lower: f64,

        /// RSI 매도 상한 (기본 70)
        #[arg(long, default_value = "70")]
        upper: f64,

        /// 데이터 주기 (기본 daily)
        #[arg(long, default_value = "daily")]
        period: String,
    },

    /// 캔들 응답 형태 진단 (개발용)
    Inspect {
        /// 종목 코드 (기본: 588200)
        #[arg(short, long, default_value = "588200")]
        code: String,

        /// 데이터 주기 (기본 daily)
        #[arg(long, default_value = "daily")]
        period: String,

        /// ETF 여부
        #[arg(long, default_value = "true")]
        etf: bool,
    },
}

fn parse_period(s: &str) -> anyhow::Result<Period> {
    s.parse::<Period>()
        .map_err(|e| anyhow!("{}. Supported: daily, weekly, monthly, 1, 5, 15, 30, 60", e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 트레이싱 초기화
    init_logging_from_env().map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let cli = Cli::parse();

    let config = match &cli.base_url {
        Some(url) => ApiConfig::new(url.clone()),
        None => ApiConfig::from_env(),
    };
    let api = StockApi::with_config(config);

    let result = match cli.command {
        Commands::List => commands::watchlist::run_list(&api).await,

        Commands::Add { code, name, etf } => {
            commands::watchlist::run_add(&api, code, name, etf).await
        }

        Commands::Remove { code } => commands::watchlist::run_remove(&api, code).await,

        Commands::Strategy {
            code,
            low,
            high,
            period,
            no_push,
        } => {
            let period = period.as_deref().map(parse_period).transpose()?;
            if low.is_none() && high.is_none() && period.is_none() && !no_push {
                commands::strategy::run_show(&api, code).await
            } else {
                commands::strategy::run_set(&api, code, low, high, period, no_push).await
            }
        }

        Commands::Notify { email, telegram } => {
            if email.is_none() && telegram.is_none() {
                commands::notify::run_show(&api).await
            } else {
                commands::notify::run_set(&api, email, telegram).await
            }
        }

        Commands::Backtest {
            code,
            lower,
            upper,
            period,
        } => {
            let period = parse_period(&period)?;
            commands::backtest::run(&api, code, lower, upper, period).await
        }

        Commands::Inspect { code, period, etf } => {
            let period = parse_period(&period)?;
            commands::inspect::run(&api, code, period, etf).await
        }
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        return Err(e);
    }

    Ok(())
}
