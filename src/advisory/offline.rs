// ==========================================
// SES-MT 360 - 离线研判服务
// ==========================================
// 职责: 未配置凭证时的占位实现
// 行为: 所有调用返回 NotConfigured, 由 Advisor 走本地降级
// ==========================================

use crate::advisory::error::{AdvisoryError, ServiceResult};
use crate::advisory::service::{
    AdvisoryContext, AdvisoryService, FreeTextContextEntry, ModelAdvisory,
};
use async_trait::async_trait;

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAdvisoryService;

#[async_trait]
impl AdvisoryService for OfflineAdvisoryService {
    fn name(&self) -> &str {
        "offline"
    }

    async fn structured_advisory(
        &self,
        _context: &AdvisoryContext,
        _locale: &str,
    ) -> ServiceResult<ModelAdvisory> {
        Err(AdvisoryError::NotConfigured)
    }

    async fn free_text(
        &self,
        _question: &str,
        _context: &[FreeTextContextEntry],
        _locale: &str,
    ) -> ServiceResult<String> {
        Err(AdvisoryError::NotConfigured)
    }
}
