pub mod common;
pub mod evaluations;
pub mod weights;

pub use common::response::ApiResponse;

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    InternalServerError = 1005,
    ExportFailed = 2005,
}

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
