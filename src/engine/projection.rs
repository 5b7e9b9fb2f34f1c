// ==========================================
// SES-MT 360 - 影响预测引擎
// ==========================================
// 职责: APS 指标偏差 → 住院增量 / UTI 压力 / 财务影响
// 输入: APS 综合指标 (0-100) + 可避免住院基线
// 输出: ImpactProjection
// ==========================================
// 红线: 纯函数, 无状态, 无副作用
// ==========================================

use crate::domain::projection::ImpactProjection;
use crate::domain::types::SaturationRisk;

// ==========================================
// 模型常量
// ==========================================

/// ISF 目标值 (0-10 口径)
pub const TARGET_ISF: f64 = 7.0;
/// 每例可避免住院平均费用
pub const COST_PER_AVOIDABLE_ADMISSION: f64 = 4250.00;
/// UTI 每床日平均费用
pub const COST_PER_ICU_DAY: f64 = 2100.00;
/// APS 失效导致失代偿的平均 UTI 住院天数
pub const AVERAGE_ICU_STAY_DAYS: f64 = 5.5;
/// 新增住院中转入 UTI 的比例
pub const ICU_CONVERSION_RATE: f64 = 0.15;
/// 每低于目标 1 分, 住院量放大 12%
pub const GROWTH_PER_POINT_BELOW_TARGET: f64 = 0.12;
/// 预计时间窗口（天）
pub const ESTIMATED_TIMEFRAME_DAYS: u32 = 45;

/// 风险阈值: 偏差 > 2.0 → HIGH
pub const HIGH_RISK_DEVIATION: f64 = 2.0;
/// 风险阈值: 偏差 > 1.0 → MODERATE
pub const MODERATE_RISK_DEVIATION: f64 = 1.0;

/// 计数类输出的上限
const MAX_REPORTED_COUNT: f64 = u32::MAX as f64;

// ==========================================
// ProjectionEngine - 影响预测引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算影响预测
    ///
    /// # 参数
    /// - `indicator`: APS 综合指标 (0-100)
    /// - `baseline_admissions`: 当前可避免住院数（调用方保证非负）
    ///
    /// # 说明
    /// 舍入沿报告值链式进行: 新增住院取整后再推算 UTI 患者(1 位小数),
    /// UTI 床日由已舍入的患者数推算, 财务影响由已舍入的住院数与床日计算.
    /// 住院数与床日以 u32 报告, 超出上限时先截断再参与后续推算.
    pub fn project(&self, indicator: f64, baseline_admissions: f64) -> ImpactProjection {
        // 1. 偏差（只计短板, 超额不抵扣）
        let deviation = Self::deviation(indicator);

        // 2. 住院量增长
        let growth_factor = 1.0 + deviation * GROWTH_PER_POINT_BELOW_TARGET;
        let projected_admissions = baseline_admissions * growth_factor;
        let new_admissions = (projected_admissions - baseline_admissions)
            .max(0.0)
            .round()
            .min(MAX_REPORTED_COUNT);

        // 3. UTI 压力
        let icu_patients = round_to(new_admissions * ICU_CONVERSION_RATE, 1);
        let icu_days = (icu_patients * AVERAGE_ICU_STAY_DAYS)
            .round()
            .min(MAX_REPORTED_COUNT);

        // 4. 财务影响
        let financial_impact = round_to(
            new_admissions * COST_PER_AVOIDABLE_ADMISSION + icu_days * COST_PER_ICU_DAY,
            2,
        );

        ImpactProjection {
            new_avoidable_admissions: new_admissions as u32,
            projected_icu_patients: icu_patients,
            estimated_icu_days: icu_days as u32,
            financial_impact,
            saturation_risk: Self::classify(deviation),
            estimated_timeframe_days: ESTIMATED_TIMEFRAME_DAYS,
        }
    }

    /// 指标相对目标的偏差 (0-10 口径, 下限 0)
    pub fn deviation(indicator: f64) -> f64 {
        let score = indicator / 10.0;
        (TARGET_ISF - score).max(0.0)
    }

    /// 由偏差判定床位饱和风险
    pub fn classify(deviation: f64) -> SaturationRisk {
        if deviation > HIGH_RISK_DEVIATION {
            SaturationRisk::High
        } else if deviation > MODERATE_RISK_DEVIATION {
            SaturationRisk::Moderate
        } else {
            SaturationRisk::Low
        }
    }
}

/// 便捷函数
pub fn calculate_projected_impact(indicator: f64, baseline_admissions: f64) -> ImpactProjection {
    ProjectionEngine::new().project(indicator, baseline_admissions)
}

/// 按小数位四舍五入
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
