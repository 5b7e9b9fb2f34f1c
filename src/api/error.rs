// ==========================================
// SES-MT 360 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换下层错误为可展示的错误消息
// 说明: AI 研判失败在 Advisor 内部降级, 不会出现在此处
// ==========================================

use crate::app::store::StoreTransitionError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl From<StoreTransitionError> for ApiError {
    fn from(err: StoreTransitionError) -> Self {
        ApiError::InvalidStateTransition {
            from: err.from,
            to: err.to,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
