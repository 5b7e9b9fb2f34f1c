// ==========================================
// SES-MT 360 - 驾驶舱分析引擎
// ==========================================
// 职责: 全州统计、检索过滤、区域/全州对标序列
// 输入: 只读市镇记录
// 输出: 驾驶舱聚合视图
// ==========================================

use crate::domain::municipality::MunicipalityRecord;
use crate::domain::types::Region;
use crate::engine::catalog::collation_key;
use crate::engine::projection::round_to;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 低于该指标的市镇计为"危急"
pub const CRITICAL_INDICATOR_THRESHOLD: f64 = 60.0;
/// 区域对标偏移系数
const REGIONAL_OFFSET_WEIGHT: f64 = 0.8;
/// 全州对标偏移系数
const STATE_OFFSET_WEIGHT: f64 = 0.9;

// ==========================================
// 聚合视图
// ==========================================

/// 全州统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub municipality_count: usize,
    pub average_ig_aps: f64,
    /// 指标 < 60 的市镇数
    pub critical_count: usize,
    pub total_hospital_cost: f64,
}

/// 卫生区汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: Region,
    pub municipality_count: usize,
    pub average_ig_aps: f64,
    pub critical_count: usize,
    pub population: u64,
}

/// 对标序列中的一期
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub period: String,
    pub municipality: f64,
    pub regional_average: f64,
    pub state_average: f64,
}

/// 市镇检索条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityFilter {
    /// 名称关键字（不区分大小写/重音）
    pub search: String,
    /// None 表示全部卫生区
    pub region: Option<Region>,
}

impl MunicipalityFilter {
    pub fn matches(&self, record: &MunicipalityRecord) -> bool {
        let needle = collation_key(self.search.trim());
        let matches_search = needle.is_empty() || collation_key(&record.name).contains(&needle);
        let matches_region = self.region.map_or(true, |r| r == record.region);
        matches_search && matches_region
    }
}

// ==========================================
// AnalyticsEngine - 驾驶舱分析引擎
// ==========================================
// 红线: 无状态, 不修改输入
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// 全州统计
    pub fn stats(&self, records: &[MunicipalityRecord]) -> DashboardStats {
        DashboardStats {
            municipality_count: records.len(),
            average_ig_aps: Self::average_indicator(records.iter()),
            critical_count: records
                .iter()
                .filter(|r| r.ig_aps < CRITICAL_INDICATOR_THRESHOLD)
                .count(),
            total_hospital_cost: round_to(
                records.iter().map(|r| r.estimated_hospital_cost).sum(),
                2,
            ),
        }
    }

    /// 各卫生区汇总（按卫生区展示顺序）
    pub fn region_summaries(&self, records: &[MunicipalityRecord]) -> Vec<RegionSummary> {
        Region::ALL
            .iter()
            .map(|region| {
                let members: Vec<&MunicipalityRecord> =
                    records.iter().filter(|r| r.region == *region).collect();
                RegionSummary {
                    region: *region,
                    municipality_count: members.len(),
                    average_ig_aps: round_to(Self::average_indicator(members.iter().copied()), 1),
                    critical_count: members
                        .iter()
                        .filter(|r| r.ig_aps < CRITICAL_INDICATOR_THRESHOLD)
                        .count(),
                    population: members.iter().map(|r| r.population as u64).sum(),
                }
            })
            .collect()
    }

    /// 按条件检索市镇（结果按名称排序）
    pub fn filter<'a>(
        &self,
        records: &'a [MunicipalityRecord],
        filter: &MunicipalityFilter,
    ) -> Vec<&'a MunicipalityRecord> {
        let mut matched: Vec<&MunicipalityRecord> =
            records.iter().filter(|r| filter.matches(r)).collect();
        matched.sort_by_cached_key(|r| collation_key(&r.name));
        matched
    }

    /// 生成市镇与区域/全州平均的对标序列
    ///
    /// # 参数
    /// - `record`: 选中市镇
    /// - `all`: 全部市镇（用于计算区域与全州平均）
    /// - `rng`: 对标曲线抖动的随机源
    ///
    /// # 说明
    /// 对标曲线 = 市镇历史 + (平均 - 当前值) * 系数 + [-1, 1) 抖动
    pub fn comparison_series<R: Rng>(
        &self,
        record: &MunicipalityRecord,
        all: &[MunicipalityRecord],
        rng: &mut R,
    ) -> Vec<ComparisonPoint> {
        let regional_avg =
            Self::average_indicator(all.iter().filter(|r| r.region == record.region));
        let state_avg = Self::average_indicator(all.iter());

        let regional_offset = (regional_avg - record.ig_aps) * REGIONAL_OFFSET_WEIGHT;
        let state_offset = (state_avg - record.ig_aps) * STATE_OFFSET_WEIGHT;

        record
            .history
            .iter()
            .map(|point| ComparisonPoint {
                period: point.period.clone(),
                municipality: point.value,
                regional_average: round_to(
                    point.value + regional_offset + rng.gen_range(-1.0..1.0),
                    1,
                ),
                state_average: round_to(
                    point.value + state_offset + rng.gen_range(-1.0..1.0),
                    1,
                ),
            })
            .collect()
    }

    fn average_indicator<'a>(records: impl Iterator<Item = &'a MunicipalityRecord>) -> f64 {
        let (sum, count) = records.fold((0.0, 0usize), |(sum, count), r| (sum + r.ig_aps, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }
}
