// ==========================================
// SES-MT 360 - 应用层
// ==========================================
// 职责: 驾驶舱状态控制器与 Tauri 集成
// ==========================================

pub mod state;
pub mod store;
pub mod tauri_commands;

// 重导出
pub use state::{AnalysisOutcome, AppState};
pub use store::{DashboardEvent, DashboardState, DashboardStore, ExportKind, RequestToken};

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
