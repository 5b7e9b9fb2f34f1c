// ==========================================
// SES-MT 360 - 驾驶舱 API
// ==========================================
// 职责: 全州统计、卫生区汇总、市镇检索、预测、对标序列
// 架构: API 层 → Engine 层 (AnalyticsEngine / ProjectionEngine)
// 数据: 启动时生成的只读数据集 (Arc<[MunicipalityRecord]>)
// ==========================================

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::municipality::MunicipalityRecord;
use crate::domain::projection::ImpactProjection;
use crate::engine::analytics::{
    AnalyticsEngine, ComparisonPoint, DashboardStats, MunicipalityFilter, RegionSummary,
};
use crate::engine::projection::ProjectionEngine;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    records: Arc<[MunicipalityRecord]>,
    analytics: AnalyticsEngine,
    projection: ProjectionEngine,
    /// 对标曲线抖动的随机源
    rng: Mutex<ChaCha8Rng>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - records: 市镇数据集
    /// - rng_seed: 对标曲线随机源种子
    pub fn new(records: Arc<[MunicipalityRecord]>, rng_seed: u64) -> Self {
        Self {
            records,
            analytics: AnalyticsEngine::new(),
            projection: ProjectionEngine::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(rng_seed)),
        }
    }

    /// 数据集（只读共享）
    pub fn records(&self) -> Arc<[MunicipalityRecord]> {
        Arc::clone(&self.records)
    }

    // ==========================================
    // 聚合查询
    // ==========================================

    /// 全州统计
    pub fn get_dashboard_stats(&self) -> DashboardStats {
        self.analytics.stats(&self.records)
    }

    /// 卫生区汇总列表
    pub fn list_regions(&self) -> Vec<RegionSummary> {
        self.analytics.region_summaries(&self.records)
    }

    // ==========================================
    // 市镇查询
    // ==========================================

    /// 按检索条件列出市镇
    ///
    /// # 参数
    /// - filter: 名称关键字 + 卫生区
    ///
    /// # 返回
    /// 按名称排序的市镇列表
    pub fn list_municipalities(&self, filter: &MunicipalityFilter) -> Vec<MunicipalityRecord> {
        let matched = self.analytics.filter(&self.records, filter);
        tracing::debug!(
            search = %filter.search,
            region = ?filter.region,
            count = matched.len(),
            "市镇检索"
        );
        matched.into_iter().cloned().collect()
    }

    /// 查询单个市镇
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): ID 不存在
    pub fn get_municipality(&self, municipality_id: u32) -> ApiResult<MunicipalityRecord> {
        self.find(municipality_id).cloned()
    }

    /// 本地影响预测
    pub fn get_projection(&self, municipality_id: u32) -> ApiResult<ImpactProjection> {
        let record = self.find(municipality_id)?;
        Ok(self
            .projection
            .project(record.ig_aps, record.avoidable_admissions as f64))
    }

    /// 市镇与区域/全州平均的对标序列
    pub fn get_comparison_series(&self, municipality_id: u32) -> ApiResult<Vec<ComparisonPoint>> {
        let record = self.find(municipality_id)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| ApiError::InternalError(format!("随机源锁获取失败: {}", e)))?;
        Ok(self
            .analytics
            .comparison_series(record, &self.records, &mut *rng))
    }

    fn find(&self, municipality_id: u32) -> ApiResult<&MunicipalityRecord> {
        self.records
            .iter()
            .find(|r| r.id == municipality_id)
            .ok_or_else(|| ApiError::NotFound(format!("Municipality(id={})不存在", municipality_id)))
    }
}
