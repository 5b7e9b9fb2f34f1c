// ==========================================
// SES-MT 360 - 引擎层
// ==========================================
// 职责: 目录、合成数据、影响预测、驾驶舱分析
// 红线: 引擎无 IO, 随机源由调用方注入
// ==========================================

pub mod analytics;
pub mod catalog;
pub mod dataset;
pub mod projection;

// 重导出核心引擎
pub use analytics::{
    AnalyticsEngine, ComparisonPoint, DashboardStats, MunicipalityFilter, RegionSummary,
};
pub use dataset::{DatasetGenerator, PopulationTier};
pub use projection::{calculate_projected_impact, ProjectionEngine};
