// ==========================================
// Advisor 集成测试
// ==========================================
// 测试范围:
// 1. AI 成功: 模型研判 + 本地预测
// 2. AI 失败: 确定性降级, 不向调用方抛错
// 3. 自由问答: 上下文过滤、空问题、失败/空回答
// ==========================================

mod helpers;

use std::sync::Arc;

use helpers::record_builder::RecordBuilder;
use helpers::stub_service::{StubAdvisoryService, StubMode};
use ses_mt_360::advisory::{Advisor, GeminiClient, OfflineAdvisoryService};
use ses_mt_360::config::AdvisorSettings;
use ses_mt_360::domain::advisory::AdvisorySource;
use ses_mt_360::domain::types::{AdvisoryRisk, SaturationRisk, Trend};
use ses_mt_360::engine::projection::calculate_projected_impact;

const FIXED_RECOMMENDATION: &str =
    "Fortalecer APS para reduzir a conversão de casos crônicos em urgências hospitalares.";

// ==========================================
// 结构化研判
// ==========================================

#[tokio::test]
async fn test_analyze_uses_model_and_attaches_projection() {
    let stub = Arc::new(StubAdvisoryService::succeeding());
    let advisor = Advisor::new(stub.clone(), "pt-BR");
    let record = RecordBuilder::new(404, "Rondonópolis")
        .population(244_897)
        .ig_aps(50.0)
        .admissions(100)
        .history([48.0, 49.0, 49.5, 50.0])
        .build();

    let result = advisor.analyze(&record).await;

    assert_eq!(result.source, AdvisorySource::Model);
    assert_eq!(result.risk, AdvisoryRisk::Critical);
    assert_eq!(result.financial_impact, "Impacto para Rondonópolis");
    assert_eq!(result.projection, Some(calculate_projected_impact(50.0, 100.0)));
    assert_eq!(stub.structured_call_count(), 1);

    let context = stub.last_context.lock().unwrap().clone().expect("上下文未记录");
    assert_eq!(context.name, "Rondonópolis");
    assert_eq!(context.population, 244_897);
    assert_eq!(context.isf_score, 5.0);
    assert_eq!(context.trend, Trend::Rising);
    assert_eq!(context.projection.financial_impact, 144_000.0);
}

#[tokio::test]
async fn test_transport_failure_falls_back_to_moderate_mapping() {
    let advisor = Advisor::new(Arc::new(StubAdvisoryService::failing()), "pt-BR");
    let record = RecordBuilder::new(1, "Jangada").ig_aps(50.0).admissions(100).build();

    let result = advisor.analyze(&record).await;

    assert!(result.is_fallback());
    assert_eq!(result.risk, AdvisoryRisk::Medium);
    assert_eq!(
        result.financial_impact,
        "Projeção de R$ 144.000,00 e pressão de 20 diárias de UTI."
    );
    assert_eq!(result.recommendation, FIXED_RECOMMENDATION);
    let projection = result.projection.expect("降级结果必须附带预测");
    assert_eq!(projection.saturation_risk, SaturationRisk::Moderate);
}

#[tokio::test]
async fn test_http_failure_with_high_saturation_maps_to_high() {
    let advisor = Advisor::new(Arc::new(StubAdvisoryService::new(StubMode::HttpError(503))), "pt-BR");
    let record = RecordBuilder::new(2, "Colniza").ig_aps(30.0).admissions(50).build();

    let result = advisor.analyze(&record).await;

    assert_eq!(result.source, AdvisorySource::Fallback);
    assert_eq!(result.risk, AdvisoryRisk::High);
    assert_eq!(result.recommendation, FIXED_RECOMMENDATION);
}

#[tokio::test]
async fn test_malformed_model_output_falls_back() {
    let stub = Arc::new(StubAdvisoryService::new(StubMode::Malformed));
    let advisor = Advisor::new(stub.clone(), "pt-BR");
    let record = RecordBuilder::new(5, "Barra do Garças").ig_aps(50.0).admissions(100).build();

    let result = advisor.analyze(&record).await;

    assert_eq!(result.source, AdvisorySource::Fallback);
    assert_eq!(result.risk, AdvisoryRisk::Medium);
    assert_eq!(
        result.financial_impact,
        "Projeção de R$ 144.000,00 e pressão de 20 diárias de UTI."
    );
    assert_eq!(stub.structured_call_count(), 1);
}

#[tokio::test]
async fn test_unreachable_gemini_endpoint_falls_back() {
    let settings = AdvisorSettings {
        api_key: Some("test-key".to_string()),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: std::time::Duration::from_secs(2),
        ..AdvisorSettings::default()
    };
    let client = GeminiClient::new(&settings).expect("凭证已配置");
    let advisor = Advisor::new(Arc::new(client), "pt-BR");
    let record = RecordBuilder::new(6, "Cáceres").ig_aps(30.0).admissions(50).build();

    let result = advisor.analyze(&record).await;

    assert_eq!(result.source, AdvisorySource::Fallback);
    assert_eq!(result.risk, AdvisoryRisk::High);
    assert_eq!(result.recommendation, FIXED_RECOMMENDATION);

    let answer = advisor.ask("Qual o risco?", &sample_records()).await;
    assert_eq!(answer, "Erro ao processar consulta de inteligência.");
}

#[tokio::test]
async fn test_fallback_is_deterministic() {
    let advisor = Advisor::new(Arc::new(OfflineAdvisoryService), "pt-BR");
    let record = RecordBuilder::new(3, "Juara").ig_aps(58.3).admissions(77).build();

    let first = advisor.analyze(&record).await;
    let second = advisor.analyze(&record).await;
    assert_eq!(first, second);
    assert_eq!(first.source, AdvisorySource::Fallback);
}

#[tokio::test]
async fn test_fallback_low_saturation_still_medium() {
    let advisor = Advisor::new(Arc::new(OfflineAdvisoryService), "pt-BR");
    let record = RecordBuilder::new(4, "Araguainha").ig_aps(82.0).admissions(6).build();

    let result = advisor.analyze(&record).await;
    assert_eq!(result.risk, AdvisoryRisk::Medium);
    assert_eq!(
        result.financial_impact,
        "Projeção de R$ 0,00 e pressão de 0 diárias de UTI."
    );
}

// ==========================================
// 自由问答
// ==========================================

fn sample_records() -> Vec<ses_mt_360::MunicipalityRecord> {
    vec![
        RecordBuilder::new(1, "Cuiabá").ig_aps(62.0).population(650_912).build(),
        RecordBuilder::new(2, "Sinop").ig_aps(71.0).population(196_067).build(),
        RecordBuilder::new(3, "Juína").ig_aps(64.9).population(41_101).build(),
        RecordBuilder::new(4, "Sorriso").ig_aps(65.0).population(110_635).build(),
    ]
}

#[tokio::test]
async fn test_ask_sends_only_records_below_threshold() {
    let stub = Arc::new(StubAdvisoryService::succeeding());
    let advisor = Advisor::new(stub.clone(), "pt-BR");

    let answer = advisor.ask("Onde priorizar?", &sample_records()).await;
    assert_eq!(answer, "Resposta: Onde priorizar?");

    let context = stub.last_free_text_context.lock().unwrap().clone();
    let names: Vec<&str> = context.iter().map(|c| c.nome.as_str()).collect();
    assert_eq!(names, vec!["Cuiabá", "Juína"]);
    assert_eq!(context[0].pop, 650_912);
    assert_eq!(context[0].ig, 62.0);
}

#[tokio::test]
async fn test_ask_failure_returns_neutral_message() {
    let advisor = Advisor::new(Arc::new(StubAdvisoryService::failing()), "pt-BR");
    let answer = advisor.ask("Qual o risco?", &sample_records()).await;
    assert_eq!(answer, "Erro ao processar consulta de inteligência.");
}

#[tokio::test]
async fn test_ask_empty_answer() {
    let advisor = Advisor::new(Arc::new(StubAdvisoryService::new(StubMode::Empty)), "pt-BR");
    let answer = advisor.ask("Qual o risco?", &sample_records()).await;
    assert_eq!(answer, "Sem resposta da IA.");
}

#[tokio::test]
async fn test_blank_question_does_not_call_service() {
    let stub = Arc::new(StubAdvisoryService::succeeding());
    let advisor = Advisor::new(stub.clone(), "pt-BR");

    let answer = advisor.ask("   ", &sample_records()).await;
    assert_eq!(answer, "A pergunta não pode ser vazia.");
    assert_eq!(stub.free_text_call_count(), 0);
}
