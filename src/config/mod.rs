// ==========================================
// SES-MT 360 - 配置层
// ==========================================
// 职责: 系统配置管理, 默认值 + 环境变量覆写
// 存储: 内存 (无持久化)
// ==========================================

pub mod advisor_settings;
pub mod config_manager;
pub mod config_reader;

// 重导出核心配置管理器
pub use advisor_settings::AdvisorSettings;
pub use config_manager::{config_keys, ConfigManager};
pub use config_reader::DashboardConfigReader;
