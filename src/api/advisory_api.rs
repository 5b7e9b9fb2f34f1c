// ==========================================
// SES-MT 360 - 研判 API
// ==========================================
// 职责: 市镇 AI 研判、自由问答、情报报告文本与文件导出
// 架构: API 层 → Advisor → AdvisoryService
// 说明: AI 失败由 Advisor 降级, 本层不产生 AI 相关错误
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::advisory::Advisor;
use crate::api::dashboard_api::DashboardApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::advisory::AdvisoryResult;
use crate::report::{report_file_name, write_text_report, IntelligenceReport};

// ==========================================
// AdvisoryApi - 研判 API
// ==========================================
pub struct AdvisoryApi {
    advisor: Advisor,
    dashboard: Arc<DashboardApi>,
}

impl AdvisoryApi {
    /// 创建研判 API
    ///
    /// # 参数
    /// - advisor: 研判编排器
    /// - dashboard: 驾驶舱 API（提供数据集）
    pub fn new(advisor: Advisor, dashboard: Arc<DashboardApi>) -> Self {
        Self { advisor, dashboard }
    }

    pub fn locale(&self) -> &'static str {
        self.advisor.locale()
    }

    /// 市镇研判（AI 失败时返回本地降级结果）
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): ID 不存在
    pub async fn analyze(&self, municipality_id: u32) -> ApiResult<AdvisoryResult> {
        let record = self.dashboard.get_municipality(municipality_id)?;
        Ok(self.advisor.analyze(&record).await)
    }

    /// 自由问答
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 问题为空
    pub async fn ask(&self, question: &str) -> ApiResult<String> {
        if question.trim().is_empty() {
            return Err(ApiError::InvalidInput("问题不能为空".to_string()));
        }
        let records = self.dashboard.records();
        Ok(self.advisor.ask(question, &records).await)
    }

    /// 生成情报报告文本（复制到剪贴板）
    pub fn report_text(
        &self,
        municipality_id: u32,
        result: &AdvisoryResult,
        generated_at: NaiveDateTime,
    ) -> ApiResult<String> {
        let record = self.dashboard.get_municipality(municipality_id)?;
        Ok(IntelligenceReport::new(&record, result, generated_at).render(self.locale()))
    }

    /// 导出情报报告到文本文件
    ///
    /// # 返回
    /// - Ok(PathBuf): 写入的文件路径
    /// - Err(ApiError::ExportError): 写入失败
    pub fn export_text_report(
        &self,
        municipality_id: u32,
        result: &AdvisoryResult,
        generated_at: NaiveDateTime,
        dir: &Path,
    ) -> ApiResult<PathBuf> {
        let record = self.dashboard.get_municipality(municipality_id)?;
        let content =
            IntelligenceReport::new(&record, result, generated_at).render(self.locale());
        let file_name = report_file_name(&record.name, generated_at.date(), self.locale());

        write_text_report(dir, &file_name, &content)
            .map_err(|e| ApiError::ExportError(format!("{}: {}", dir.display(), e)))
    }
}
