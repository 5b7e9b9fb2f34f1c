// ==========================================
// SES-MT 360 - 提示词构造
// ==========================================
// 职责: 将本地计算结果渲染为发给语言模型的文本
// 模板: locales/*.yml 中的 prompt.* 键
// ==========================================

use crate::advisory::service::{AdvisoryContext, FreeTextContextEntry};
use crate::domain::municipality::MunicipalityRecord;
use crate::i18n::{tr, tr_with_args};
use crate::report::format::{format_currency, format_integer, format_number};
use serde_json::json;

/// 自由问答只携带指标低于该值的市镇
pub const FREE_TEXT_CONTEXT_THRESHOLD: f64 = 65.0;

/// 结构化研判提示词
pub fn analysis_prompt(context: &AdvisoryContext, locale: &str) -> String {
    let p = &context.projection;
    let saturation_key = format!("saturation.{}", p.saturation_risk.to_string().to_lowercase());

    let population = format_integer(context.population as u64, locale);
    let isf = format!("{:.1}", context.isf_score);
    let trend = tr(context.trend.i18n_key(), locale);
    let new_admissions = p.new_avoidable_admissions.to_string();
    let icu_patients = format_number(p.projected_icu_patients, 1, locale);
    let icu_days = p.estimated_icu_days.to_string();
    let financial = format_currency(p.financial_impact, locale);
    let saturation = tr(&saturation_key, locale);
    let timeframe = p.estimated_timeframe_days.to_string();

    tr_with_args(
        "prompt.analysis",
        locale,
        &[
            ("name", context.name.as_str()),
            ("region", context.region.name()),
            ("population", population.as_str()),
            ("isf", isf.as_str()),
            ("trend", trend.as_str()),
            ("new_admissions", new_admissions.as_str()),
            ("icu_patients", icu_patients.as_str()),
            ("icu_days", icu_days.as_str()),
            ("financial", financial.as_str()),
            ("saturation", saturation.as_str()),
            ("timeframe", timeframe.as_str()),
        ],
    )
}

/// 自由问答上下文: 指标 < 65 的市镇
pub fn free_text_context(records: &[MunicipalityRecord]) -> Vec<FreeTextContextEntry> {
    records
        .iter()
        .filter(|r| r.ig_aps < FREE_TEXT_CONTEXT_THRESHOLD)
        .map(|r| FreeTextContextEntry {
            nome: r.name.clone(),
            ig: r.ig_aps,
            pop: r.population,
        })
        .collect()
}

/// 自由问答提示词
pub fn free_text_prompt(question: &str, context: &[FreeTextContextEntry], locale: &str) -> String {
    let context_json = serde_json::to_string(context).unwrap_or_else(|_| "[]".to_string());
    tr_with_args(
        "prompt.ask",
        locale,
        &[("context", context_json.as_str()), ("question", question.trim())],
    )
}

/// 结构化输出的 JSON Schema（Gemini responseSchema 方言）
pub fn advisory_response_schema(locale: &str) -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "risco": {
                "type": "STRING",
                "description": tr("prompt.schema_risk", locale)
            },
            "impactoFinanceiro": {
                "type": "STRING",
                "description": tr("prompt.schema_financial", locale)
            },
            "recomendacao": {
                "type": "STRING",
                "description": tr("prompt.schema_recommendation", locale)
            }
        },
        "required": ["risco", "impactoFinanceiro", "recomendacao"]
    })
}
