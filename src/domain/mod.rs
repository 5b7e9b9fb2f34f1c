// ==========================================
// SES-MT 360 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含引擎逻辑, 不含 IO
// ==========================================

pub mod advisory;
pub mod municipality;
pub mod projection;
pub mod types;

// 重导出核心类型
pub use advisory::{AdvisoryResult, AdvisorySource};
pub use municipality::{HistoryPoint, MunicipalityRecord, HISTORY_PERIODS};
pub use projection::ImpactProjection;
pub use types::{AdvisoryRisk, Region, SaturationRisk, Trend};
