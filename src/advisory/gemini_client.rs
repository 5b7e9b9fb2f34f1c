// ==========================================
// SES-MT 360 - Gemini 研判客户端
// ==========================================
// 职责: 调用 Gemini generateContent REST 接口
// 接口: POST {base_url}/v1beta/models/{model}:generateContent
// 鉴权: x-goog-api-key 请求头
// ==========================================

use crate::advisory::error::{AdvisoryError, ServiceResult};
use crate::advisory::prompt;
use crate::advisory::service::{
    AdvisoryContext, AdvisoryService, FreeTextContextEntry, ModelAdvisory,
};
use crate::config::advisor_settings::AdvisorSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ==========================================
// 请求/响应结构
// ==========================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 拼接首个候选的全部文本片段
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ==========================================
// GeminiClient
// ==========================================
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// 创建客户端
    ///
    /// # 返回
    /// - Err(AdvisoryError::NotConfigured): 未配置凭证
    /// - Err(AdvisoryError::Transport): HTTP 客户端初始化失败
    pub fn new(settings: &AdvisorSettings) -> ServiceResult<Self> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(AdvisoryError::NotConfigured)?
            .to_string();

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AdvisoryError::Transport(format!("HTTP 客户端初始化失败: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// 发送一次 generateContent 请求, 返回首个候选文本
    async fn generate(
        &self,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> ServiceResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config,
        };

        debug!(model = %self.model, structured = request.generation_config.is_some(), "发送 Gemini 请求");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
            .unwrap_or_default();

        let text = parsed.first_text().ok_or(AdvisoryError::EmptyResponse)?;
        info!(model = %self.model, finish_reason = %finish_reason, chars = text.len(), "Gemini 响应");
        Ok(text)
    }
}

#[async_trait]
impl AdvisoryService for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn structured_advisory(
        &self,
        context: &AdvisoryContext,
        locale: &str,
    ) -> ServiceResult<ModelAdvisory> {
        let config = GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: prompt::advisory_response_schema(locale),
        };
        let text = self
            .generate(prompt::analysis_prompt(context, locale), Some(config))
            .await?;
        ModelAdvisory::from_json_text(&text)
    }

    async fn free_text(
        &self,
        question: &str,
        context: &[FreeTextContextEntry],
        locale: &str,
    ) -> ServiceResult<String> {
        self.generate(prompt::free_text_prompt(question, context, locale), None)
            .await
    }
}
