// ==========================================
// SES-MT 360 - AI 研判层
// ==========================================
// 职责: 外部语言模型协作（可替换）与本地降级
// 架构: Advisor → AdvisoryService (Gemini / Offline / Stub)
// ==========================================

pub mod advisor;
pub mod error;
pub mod fallback;
pub mod gemini_client;
pub mod offline;
pub mod prompt;
pub mod service;

pub use advisor::Advisor;
pub use error::{AdvisoryError, ServiceResult};
pub use fallback::{fallback_advisory, fallback_risk};
pub use gemini_client::GeminiClient;
pub use offline::OfflineAdvisoryService;
pub use service::{AdvisoryContext, AdvisoryService, FreeTextContextEntry, ModelAdvisory};

use crate::config::advisor_settings::AdvisorSettings;
use std::sync::Arc;

/// 按配置选择研判服务
///
/// 有凭证时使用 Gemini; 无凭证或客户端初始化失败时使用离线服务
pub fn build_service(settings: &AdvisorSettings) -> Arc<dyn AdvisoryService> {
    if !settings.has_credential() {
        tracing::info!("未配置 AI 凭证, 研判将使用本地降级结果");
        return Arc::new(OfflineAdvisoryService);
    }

    match GeminiClient::new(settings) {
        Ok(client) => {
            tracing::info!(model = %settings.model, "AI 研判服务: Gemini");
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Gemini 客户端初始化失败, 改用离线服务");
            Arc::new(OfflineAdvisoryService)
        }
    }
}
