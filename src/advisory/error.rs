// ==========================================
// SES-MT 360 - AI 研判错误类型
// ==========================================
// 职责: 描述 AI 服务调用的失败原因
// 说明: 此类错误一律由 Advisor 本地降级处理, 不向终端用户抛出
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// 未配置服务凭证
    #[error("AI 服务未配置凭证")]
    NotConfigured,

    #[error("AI 服务请求超时")]
    Timeout,

    #[error("AI 服务网络错误: {0}")]
    Transport(String),

    #[error("AI 服务返回 HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("AI 服务返回空内容")]
    EmptyResponse,

    #[error("AI 服务响应格式错误: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AdvisoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdvisoryError::Timeout
        } else if err.is_decode() {
            AdvisoryError::MalformedResponse(err.to_string())
        } else {
            AdvisoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AdvisoryError {
    fn from(err: serde_json::Error) -> Self {
        AdvisoryError::MalformedResponse(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, AdvisoryError>;
