// ==========================================
// SES-MT 360 - AI 研判服务参数
// ==========================================
// 职责: Gemini 凭证、模型、地址与超时
// 红线: 凭证不进入日志与配置快照
// ==========================================

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// 默认模型
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// AI 研判服务连接参数
///
/// 凭证不参与 Debug 输出与序列化
#[derive(Clone, Serialize)]
pub struct AdvisorSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AdvisorSettings {
    /// 是否配置了凭证
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for AdvisorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
