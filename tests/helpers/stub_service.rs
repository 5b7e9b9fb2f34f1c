// ==========================================
// AdvisoryService 测试桩
// ==========================================
// 职责: 可配置成功/失败/空回答, 记录调用次数与上下文
// ==========================================

use async_trait::async_trait;
use ses_mt_360::advisory::{
    AdvisoryContext, AdvisoryError, AdvisoryService, FreeTextContextEntry, ModelAdvisory,
    ServiceResult,
};
use ses_mt_360::domain::types::AdvisoryRisk;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum StubMode {
    /// 返回固定研判与回答
    Succeed,
    /// 模拟超时
    Timeout,
    /// 模拟服务端错误
    HttpError(u16),
    /// 返回空回答
    Empty,
    /// 模拟无法解析的模型输出
    Malformed,
}

pub struct StubAdvisoryService {
    mode: StubMode,
    /// 按调用顺序的延迟（用于制造乱序返回）
    delays: Mutex<Vec<Duration>>,
    pub structured_calls: AtomicUsize,
    pub free_text_calls: AtomicUsize,
    pub last_context: Mutex<Option<AdvisoryContext>>,
    pub last_free_text_context: Mutex<Vec<FreeTextContextEntry>>,
}

impl StubAdvisoryService {
    pub fn new(mode: StubMode) -> Self {
        Self {
            mode,
            delays: Mutex::new(Vec::new()),
            structured_calls: AtomicUsize::new(0),
            free_text_calls: AtomicUsize::new(0),
            last_context: Mutex::new(None),
            last_free_text_context: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(StubMode::Succeed)
    }

    pub fn failing() -> Self {
        Self::new(StubMode::Timeout)
    }

    /// 依次为每次结构化调用设置延迟
    pub fn with_delays(self, delays: Vec<Duration>) -> Self {
        *self.delays.lock().unwrap() = delays;
        self
    }

    pub fn structured_call_count(&self) -> usize {
        self.structured_calls.load(Ordering::SeqCst)
    }

    pub fn free_text_call_count(&self) -> usize {
        self.free_text_calls.load(Ordering::SeqCst)
    }

    fn next_delay(&self) -> Option<Duration> {
        let mut delays = self.delays.lock().unwrap();
        if delays.is_empty() {
            None
        } else {
            Some(delays.remove(0))
        }
    }

    fn failure(&self) -> Option<AdvisoryError> {
        match self.mode {
            StubMode::Timeout => Some(AdvisoryError::Timeout),
            StubMode::HttpError(status) => Some(AdvisoryError::Http {
                status,
                body: "stub".to_string(),
            }),
            StubMode::Malformed => Some(AdvisoryError::MalformedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
            _ => None,
        }
    }
}

#[async_trait]
impl AdvisoryService for StubAdvisoryService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn structured_advisory(
        &self,
        context: &AdvisoryContext,
        _locale: &str,
    ) -> ServiceResult<ModelAdvisory> {
        self.structured_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_context.lock().unwrap() = Some(context.clone());

        if let Some(delay) = self.next_delay() {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failure() {
            return Err(err);
        }

        Ok(ModelAdvisory {
            risk: AdvisoryRisk::Critical,
            financial_impact: format!("Impacto para {}", context.name),
            recommendation: "Ampliar equipes de saúde da família.".to_string(),
        })
    }

    async fn free_text(
        &self,
        question: &str,
        context: &[FreeTextContextEntry],
        _locale: &str,
    ) -> ServiceResult<String> {
        self.free_text_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_free_text_context.lock().unwrap() = context.to_vec();

        if let Some(err) = self.failure() {
            return Err(err);
        }
        match self.mode {
            StubMode::Empty => Ok("   ".to_string()),
            _ => Ok(format!("Resposta: {}", question)),
        }
    }
}
