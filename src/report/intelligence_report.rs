// ==========================================
// SES-MT 360 - 智能研判文本报告
// ==========================================
// 职责: 生成固定格式的纯文本报告（复制到剪贴板 / 文本导出）
// ==========================================

use crate::domain::advisory::AdvisoryResult;
use crate::domain::municipality::MunicipalityRecord;
use crate::i18n::{normalize_locale, tr};
use crate::report::format::{format_integer, format_number};
use chrono::NaiveDateTime;

/// 生成时间格式
fn timestamp_format(locale: &str) -> &'static str {
    match normalize_locale(locale) {
        "pt-BR" => "%d/%m/%Y %H:%M:%S",
        _ => "%Y-%m-%d %H:%M:%S",
    }
}

/// 智能研判报告
#[derive(Debug, Clone)]
pub struct IntelligenceReport<'a> {
    pub record: &'a MunicipalityRecord,
    pub result: &'a AdvisoryResult,
    pub generated_at: NaiveDateTime,
}

impl<'a> IntelligenceReport<'a> {
    pub fn new(
        record: &'a MunicipalityRecord,
        result: &'a AdvisoryResult,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            record,
            result,
            generated_at,
        }
    }

    /// 渲染报告文本
    ///
    /// 格式: 标题 / 市镇(卫生区) / 人口 / ISF / 空行 / 研判三项 / 空行 / 生成时间
    pub fn render(&self, locale: &str) -> String {
        let label = |key: &str| tr(key, locale);

        let lines = [
            label("report.title"),
            format!(
                "{}: {} ({})",
                label("report.municipality"),
                self.record.name,
                self.record.region
            ),
            format!(
                "{}: {} {}",
                label("report.population"),
                format_integer(self.record.population as u64, locale),
                label("report.inhabitants")
            ),
            format!(
                "{}: {}",
                label("report.isf"),
                format_number(self.record.isf_score(), 1, locale)
            ),
            String::new(),
            label("report.analysis_header"),
            format!(
                "{}: {}",
                label("report.risk"),
                label(self.result.risk.i18n_key())
            ),
            format!(
                "{}: {}",
                label("report.financial"),
                self.result.financial_impact
            ),
            format!(
                "{}: {}",
                label("report.recommendation"),
                self.result.recommendation
            ),
            String::new(),
            format!(
                "{}: {}",
                label("report.generated_at"),
                self.generated_at.format(timestamp_format(locale))
            ),
        ];

        lines.join("\n")
    }
}
