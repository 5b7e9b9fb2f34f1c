use crate::api::error::ApiError;
use crate::domain::types::Region;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、参数解析、序列化
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::InvalidStateTransition { from, to } => {
                Some(serde_json::json!({ "from": from, "to": to }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 解析卫生区参数（空字符串表示全部）
pub(super) fn parse_region(region: Option<String>) -> Result<Option<Region>, String> {
    match region.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name
            .parse::<Region>()
            .map(Some)
            .map_err(|e| map_api_error(ApiError::InvalidInput(e))),
    }
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}
