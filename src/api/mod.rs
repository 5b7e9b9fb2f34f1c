// ==========================================
// SES-MT 360 - API 层
// ==========================================
// 职责: 面向前端的业务接口, 统一错误类型
// ==========================================

pub mod advisory_api;
pub mod dashboard_api;
pub mod error;

pub use advisory_api::AdvisoryApi;
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
