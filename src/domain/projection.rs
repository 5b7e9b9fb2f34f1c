// ==========================================
// SES-MT 360 - 影响预测值对象
// ==========================================
// 职责: APS 未达标造成的住院/UTI/财务影响预测
// 红线: 按需重算, 不持久化
// ==========================================

use crate::domain::types::SaturationRisk;
use serde::{Deserialize, Serialize};

/// 影响预测
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactProjection {
    /// 新增可避免住院 (整数)
    pub new_avoidable_admissions: u32,
    /// 预计转入 UTI 的患者数 (1 位小数)
    pub projected_icu_patients: f64,
    /// 预计额外 UTI 床日 (整数)
    pub estimated_icu_days: u32,
    /// 财务影响总额 (2 位小数)
    pub financial_impact: f64,
    pub saturation_risk: SaturationRisk,
    /// 预计时间窗口（天, 常量）
    pub estimated_timeframe_days: u32,
}
