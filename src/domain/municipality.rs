// ==========================================
// SES-MT 360 - 市镇记录实体
// ==========================================
// 职责: 市镇级 APS 指标快照
// 红线: 生成后只读, 不允许修改
// ==========================================

use crate::domain::types::{Region, Trend};
use serde::{Deserialize, Serialize};

/// 历史指标期次（四个月度周期, 固定顺序）
pub const HISTORY_PERIODS: [&str; 4] = ["2024 Q2", "2024 Q3", "2025 Q1", "2025 Q2"];

/// 历史指标点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub period: String,
    pub value: f64,
}

// ==========================================
// MunicipalityRecord - 市镇记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityRecord {
    pub id: u32,
    pub name: String,
    pub region: Region,
    pub population: u32,
    /// APS 覆盖率 (%)
    pub aps_coverage_pct: f64,
    /// APS 综合指标 (0-100)
    pub ig_aps: f64,
    /// 高血压覆盖率 (%)
    pub hypertension_coverage_pct: f64,
    /// 可避免住院 (ICSAP) 基线数量
    pub avoidable_admissions: u32,
    pub estimated_hospital_cost: f64,
    /// 历史指标（固定四期）
    pub history: Vec<HistoryPoint>,
}

impl MunicipalityRecord {
    /// ISF 评分 (0-10)
    pub fn isf_score(&self) -> f64 {
        self.ig_aps / 10.0
    }

    /// 指标趋势: 比较首末两期
    ///
    /// 历史不足两期时视为稳定
    pub fn trend(&self) -> Trend {
        match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) if self.history.len() >= 2 => {
                Trend::from_delta(last.value - first.value)
            }
            _ => Trend::Stable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_history(values: &[f64]) -> MunicipalityRecord {
        MunicipalityRecord {
            id: 1,
            name: "Jangada".to_string(),
            region: Region::BaixadaCuiabana,
            population: 8000,
            aps_coverage_pct: 97.0,
            ig_aps: 80.0,
            hypertension_coverage_pct: 60.0,
            avoidable_admissions: 10,
            estimated_hospital_cost: 40000.0,
            history: values
                .iter()
                .zip(HISTORY_PERIODS.iter())
                .map(|(v, p)| HistoryPoint {
                    period: p.to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_isf_score() {
        assert_eq!(record_with_history(&[]).isf_score(), 8.0);
    }

    #[test]
    fn test_trend() {
        assert_eq!(record_with_history(&[70.0, 71.0, 72.0, 73.0]).trend(), Trend::Rising);
        assert_eq!(record_with_history(&[75.0, 71.0, 72.0, 73.0]).trend(), Trend::Declining);
        assert_eq!(record_with_history(&[73.0, 71.0, 72.0, 73.0]).trend(), Trend::Stable);
        assert_eq!(record_with_history(&[73.0]).trend(), Trend::Stable);
    }
}
