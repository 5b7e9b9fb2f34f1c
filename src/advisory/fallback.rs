// ==========================================
// SES-MT 360 - 本地降级研判
// ==========================================
// 职责: AI 不可用时, 仅依据本地预测合成研判结果
// 规则: 饱和风险 HIGH → 研判 HIGH; 其余 → MEDIUM
// ==========================================

use crate::domain::advisory::{AdvisoryResult, AdvisorySource};
use crate::domain::projection::ImpactProjection;
use crate::domain::types::{AdvisoryRisk, SaturationRisk};
use crate::i18n::{tr, tr_with_args};
use crate::report::format::format_currency;

/// 饱和风险 → 研判风险
pub fn fallback_risk(saturation: SaturationRisk) -> AdvisoryRisk {
    match saturation {
        SaturationRisk::High => AdvisoryRisk::High,
        SaturationRisk::Moderate | SaturationRisk::Low => AdvisoryRisk::Medium,
    }
}

/// 合成降级研判
///
/// 结果完全由预测值决定, 同一输入总是得到同一输出
pub fn fallback_advisory(projection: &ImpactProjection, locale: &str) -> AdvisoryResult {
    let amount = format_currency(projection.financial_impact, locale);
    let icu_days = projection.estimated_icu_days.to_string();

    AdvisoryResult {
        risk: fallback_risk(projection.saturation_risk),
        financial_impact: tr_with_args(
            "fallback.financial",
            locale,
            &[("amount", amount.as_str()), ("icu_days", icu_days.as_str())],
        ),
        recommendation: tr("fallback.recommendation", locale),
        projection: Some(projection.clone()),
        source: AdvisorySource::Fallback,
    }
}
