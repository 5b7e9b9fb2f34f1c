// ==========================================
// SES-MT 360 - AI 研判服务接口
// ==========================================
// 职责: 定义外部语言模型能力（结构化研判 + 自由问答）
// 实现者: GeminiClient / OfflineAdvisoryService / 测试桩
// ==========================================

use crate::advisory::error::{AdvisoryError, ServiceResult};
use crate::domain::municipality::MunicipalityRecord;
use crate::domain::projection::ImpactProjection;
use crate::domain::types::{AdvisoryRisk, Region, Trend};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ==========================================
// 请求上下文
// ==========================================

/// 结构化研判的请求上下文
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryContext {
    pub name: String,
    pub region: Region,
    pub population: u32,
    /// ISF (0-10)
    pub isf_score: f64,
    pub trend: Trend,
    pub projection: ImpactProjection,
}

impl AdvisoryContext {
    pub fn from_record(record: &MunicipalityRecord, projection: ImpactProjection) -> Self {
        Self {
            name: record.name.clone(),
            region: record.region,
            population: record.population,
            isf_score: record.isf_score(),
            trend: record.trend(),
            projection,
        }
    }
}

/// 自由问答上下文条目（紧凑三元组, 字段名与提示词约定一致）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeTextContextEntry {
    pub nome: String,
    pub ig: f64,
    pub pop: u32,
}

// ==========================================
// 模型输出
// ==========================================

/// 模型给出的结构化研判
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAdvisory {
    pub risk: AdvisoryRisk,
    pub financial_impact: String,
    pub recommendation: String,
}

/// 模型原始 JSON（字段名为葡语, 兼容英文别名）
#[derive(Debug, Deserialize)]
struct RawModelAdvisory {
    #[serde(alias = "risk")]
    risco: String,
    #[serde(rename = "impactoFinanceiro", alias = "financialImpact")]
    impacto_financeiro: String,
    #[serde(alias = "recommendation")]
    recomendacao: String,
}

impl ModelAdvisory {
    /// 解析模型返回的 JSON 文本
    ///
    /// 容忍 Markdown 代码块包裹; 风险标签无法识别时视为格式错误
    pub fn from_json_text(text: &str) -> ServiceResult<Self> {
        let body = strip_code_fence(text);
        if body.is_empty() {
            return Err(AdvisoryError::EmptyResponse);
        }

        let raw: RawModelAdvisory = serde_json::from_str(body)?;
        let risk = AdvisoryRisk::parse_label(&raw.risco).ok_or_else(|| {
            AdvisoryError::MalformedResponse(format!("未知风险标签: {}", raw.risco))
        })?;

        Ok(Self {
            risk,
            financial_impact: raw.impacto_financeiro,
            recommendation: raw.recomendacao,
        })
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 跳过语言标记 (```json), 标记后可以是换行也可以直接是正文
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.trim_end().trim_end_matches("```").trim()
}

// ==========================================
// AdvisoryService Trait
// ==========================================
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    /// 服务名称（日志用）
    fn name(&self) -> &str;

    /// 结构化研判: 风险标签 + 财务评述 + 建议
    async fn structured_advisory(
        &self,
        context: &AdvisoryContext,
        locale: &str,
    ) -> ServiceResult<ModelAdvisory>;

    /// 自由问答
    async fn free_text(
        &self,
        question: &str,
        context: &[FreeTextContextEntry],
        locale: &str,
    ) -> ServiceResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_portuguese_payload() {
        let text = r#"{"risco":"ALTO","impactoFinanceiro":"R$ 144 mil","recomendacao":"Ampliar ESF"}"#;
        let parsed = ModelAdvisory::from_json_text(text).unwrap();
        assert_eq!(parsed.risk, AdvisoryRisk::High);
        assert_eq!(parsed.financial_impact, "R$ 144 mil");
        assert_eq!(parsed.recommendation, "Ampliar ESF");
    }

    #[test]
    fn test_parse_fenced_english_payload() {
        let text = "```json\n{\"risk\":\"critical\",\"financialImpact\":\"x\",\"recommendation\":\"y\"}\n```";
        let parsed = ModelAdvisory::from_json_text(text).unwrap();
        assert_eq!(parsed.risk, AdvisoryRisk::Critical);
    }

    #[test]
    fn test_parse_single_line_fence() {
        let text = "```json {\"risco\":\"ALTO\",\"impactoFinanceiro\":\"x\",\"recomendacao\":\"y\"}```";
        let parsed = ModelAdvisory::from_json_text(text).unwrap();
        assert_eq!(parsed.risk, AdvisoryRisk::High);

        let bare = "```{\"risco\":\"BAIXO\",\"impactoFinanceiro\":\"x\",\"recomendacao\":\"y\"}```";
        assert_eq!(ModelAdvisory::from_json_text(bare).unwrap().risk, AdvisoryRisk::Low);
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let text = r#"{"risco":"SEVERO","impactoFinanceiro":"x","recomendacao":"y"}"#;
        assert!(matches!(
            ModelAdvisory::from_json_text(text),
            Err(AdvisoryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_fields_and_empty() {
        assert!(matches!(
            ModelAdvisory::from_json_text(r#"{"risco":"ALTO"}"#),
            Err(AdvisoryError::MalformedResponse(_))
        ));
        assert!(matches!(
            ModelAdvisory::from_json_text("  "),
            Err(AdvisoryError::EmptyResponse)
        ));
    }
}
