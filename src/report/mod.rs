// ==========================================
// SES-MT 360 - 报告层
// ==========================================
// 职责: 本地化格式、文本报告、文件导出
// ==========================================

pub mod export;
pub mod format;
pub mod intelligence_report;

pub use export::{report_file_name, write_text_report};
pub use format::{format_currency, format_integer, format_number};
pub use intelligence_report::IntelligenceReport;
