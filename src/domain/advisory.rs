// ==========================================
// SES-MT 360 - 研判结果实体
// ==========================================
// 职责: 外部 AI 服务（或本地降级）给出的风险研判
// 生命周期: 每次选择市镇时生成, 新请求覆盖旧结果
// ==========================================

use crate::domain::projection::ImpactProjection;
use crate::domain::types::AdvisoryRisk;
use serde::{Deserialize, Serialize};

/// 研判来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisorySource {
    /// 语言模型给出
    Model,
    /// AI 不可用时本地合成
    Fallback,
}

/// 研判结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryResult {
    pub risk: AdvisoryRisk,
    /// 财务/UTI 压力评述
    pub financial_impact: String,
    pub recommendation: String,
    /// 触发本次研判的本地预测
    pub projection: Option<ImpactProjection>,
    pub source: AdvisorySource,
}

impl AdvisoryResult {
    pub fn is_fallback(&self) -> bool {
        self.source == AdvisorySource::Fallback
    }
}
