// ==========================================
// SES-MT 360 - 研判编排
// ==========================================
// 职责: 本地预测 → 调用 AI 服务 → 失败时本地降级
// 红线: 任何 AI 失败都不得向调用方抛出错误
// ==========================================

use crate::advisory::fallback::fallback_advisory;
use crate::advisory::prompt::free_text_context;
use crate::advisory::service::{AdvisoryContext, AdvisoryService};
use crate::domain::advisory::{AdvisoryResult, AdvisorySource};
use crate::domain::municipality::MunicipalityRecord;
use crate::engine::projection::ProjectionEngine;
use crate::i18n::tr;
use std::sync::Arc;

// ==========================================
// Advisor - 研判编排器
// ==========================================
pub struct Advisor {
    service: Arc<dyn AdvisoryService>,
    projection_engine: ProjectionEngine,
    locale: &'static str,
}

impl Advisor {
    /// 创建研判编排器
    ///
    /// # 参数
    /// - service: AI 研判能力（Gemini / 离线 / 测试桩）
    /// - locale: 提示词与降级文本语言
    pub fn new(service: Arc<dyn AdvisoryService>, locale: &'static str) -> Self {
        Self {
            service,
            projection_engine: ProjectionEngine::new(),
            locale,
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// 构造研判上下文（含本地预测）
    pub fn context_for(&self, record: &MunicipalityRecord) -> AdvisoryContext {
        let projection = self
            .projection_engine
            .project(record.ig_aps, record.avoidable_admissions as f64);
        AdvisoryContext::from_record(record, projection)
    }

    /// 市镇研判
    ///
    /// # 返回
    /// - 模型研判（附本地预测）
    /// - AI 失败时: 本地降级研判
    pub async fn analyze(&self, record: &MunicipalityRecord) -> AdvisoryResult {
        let context = self.context_for(record);

        match self
            .service
            .structured_advisory(&context, self.locale)
            .await
        {
            Ok(advisory) => {
                tracing::info!(
                    municipality = %record.name,
                    service = self.service.name(),
                    risk = %advisory.risk,
                    "AI 研判完成"
                );
                AdvisoryResult {
                    risk: advisory.risk,
                    financial_impact: advisory.financial_impact,
                    recommendation: advisory.recommendation,
                    projection: Some(context.projection),
                    source: AdvisorySource::Model,
                }
            }
            Err(e) => {
                tracing::warn!(
                    municipality = %record.name,
                    service = self.service.name(),
                    error = %e,
                    "AI 研判失败, 使用本地降级结果"
                );
                fallback_advisory(&context.projection, self.locale)
            }
        }
    }

    /// 自由问答
    ///
    /// # 说明
    /// - 上下文只携带指标 < 65 的市镇
    /// - 空问题不调用服务
    /// - 失败返回中性错误文本, 空回答返回固定提示
    pub async fn ask(&self, question: &str, records: &[MunicipalityRecord]) -> String {
        let question = question.trim();
        if question.is_empty() {
            return tr("ask.blank_question", self.locale);
        }

        let context = free_text_context(records);
        match self.service.free_text(question, &context, self.locale).await {
            Ok(answer) if answer.trim().is_empty() => tr("ask.empty", self.locale),
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(
                    service = self.service.name(),
                    error = %e,
                    "AI 问答失败"
                );
                tr("ask.error", self.locale)
            }
        }
    }
}
