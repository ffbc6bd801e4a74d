//! 백엔드 API 계약 전반에서 사용되는 공통 타입.

mod kline;
mod notify;
mod period;
mod stock;
mod strategy;

pub use kline::*;
pub use notify::*;
pub use period::*;
pub use stock::*;
pub use strategy::*;
