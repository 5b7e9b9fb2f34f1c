// ==========================================
// SES-MT 360 - 核心库
// ==========================================
// 定位: 马托格罗索州基层医疗(APS)覆盖驾驶舱 - 决策支持后端
// 技术栈: Tauri + Rust + Gemini
// 数据: 启动时生成的合成数据集, 不落盘
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 目录、数据集、预测、分析
pub mod engine;

// 研判层 - AI 服务与本地降级
pub mod advisory;

// 报告层 - 文本报告与导出
pub mod report;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态控制器与 Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AdvisoryRisk, Region, SaturationRisk, Trend};

// 领域实体
pub use domain::{AdvisoryResult, AdvisorySource, HistoryPoint, ImpactProjection, MunicipalityRecord};

// 引擎
pub use engine::{calculate_projected_impact, AnalyticsEngine, DatasetGenerator, ProjectionEngine};

// 研判
pub use advisory::{Advisor, AdvisoryService};

// API
pub use api::{AdvisoryApi, ApiError, ApiResult, DashboardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "SES-MT 360";
