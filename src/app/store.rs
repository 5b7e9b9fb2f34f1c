// ==========================================
// SES-MT 360 - 驾驶舱状态
// ==========================================
// 职责: 选中市镇、研判结果、加载标志、检索条件、问答记录、导出状态
// 模式: 单一控制器持有状态, 所有变化通过转换方法并记录事件
// 并发: 异步研判/问答以 RequestToken 标记, 过期的完成结果直接丢弃
// ==========================================

use crate::domain::advisory::AdvisoryResult;
use crate::domain::types::Region;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 事件日志保留上限
const MAX_EVENT_LOG: usize = 256;

// ==========================================
// RequestToken - 请求令牌
// ==========================================
/// 单调递增的请求令牌
///
/// 只有携带最新令牌的完成结果会被接受
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ==========================================
// 导出类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportKind {
    Image,
    Pdf,
    Text,
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExportKind::Image => "IMAGE",
            ExportKind::Pdf => "PDF",
            ExportKind::Text => "TEXT",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMAGE" | "PNG" => Ok(ExportKind::Image),
            "PDF" => Ok(ExportKind::Pdf),
            "TEXT" | "TXT" => Ok(ExportKind::Text),
            other => Err(format!("未知导出类型: {}", other)),
        }
    }
}

// ==========================================
// 状态转换事件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardEvent {
    MunicipalitySelected { municipality_id: u32, token: RequestToken },
    AnalysisStarted { token: RequestToken },
    AnalysisCompleted { token: RequestToken },
    AnalysisDiscarded { token: RequestToken },
    SearchChanged { search: String },
    RegionChanged { region: Option<Region> },
    ChatStarted { token: RequestToken },
    ChatCompleted { token: RequestToken },
    ChatDiscarded { token: RequestToken },
    ExportRequested { kind: ExportKind },
    ExportFinished { kind: ExportKind, success: bool },
}

/// 一次问答
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
}

// ==========================================
// DashboardState - 驾驶舱状态快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub selected_municipality_id: Option<u32>,
    pub analysis: Option<AdvisoryResult>,
    pub analyzing: bool,
    pub search: String,
    pub region: Option<Region>,
    pub chat_history: Vec<ChatExchange>,
    pub chatting: bool,
    pub exporting: Option<ExportKind>,
    /// 最近一次导出失败的提示（下次导出开始时清除）
    pub export_error: Option<String>,
}

/// 在途问答
#[derive(Debug, Clone)]
struct PendingChat {
    token: RequestToken,
    question: String,
}

// ==========================================
// DashboardStore - 驾驶舱状态控制器
// ==========================================
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: DashboardState,
    next_token: u64,
    analysis_token: Option<RequestToken>,
    pending_chat: Option<PendingChat>,
    events: Vec<DashboardEvent>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    fn record(&mut self, event: DashboardEvent) {
        tracing::debug!(event = ?event, "驾驶舱状态转换");
        if self.events.len() >= MAX_EVENT_LOG {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    // ==========================================
    // 市镇选择与研判
    // ==========================================

    /// 选中市镇并开始研判
    ///
    /// # 返回
    /// 本次研判的令牌; 先前在途的研判随之过期
    pub fn select_municipality(&mut self, municipality_id: u32) -> RequestToken {
        let token = self.issue_token();

        self.state.selected_municipality_id = Some(municipality_id);
        self.state.analysis = None;
        self.state.analyzing = true;
        self.analysis_token = Some(token);

        self.record(DashboardEvent::MunicipalitySelected {
            municipality_id,
            token,
        });
        self.record(DashboardEvent::AnalysisStarted { token });
        token
    }

    /// 提交研判结果
    ///
    /// # 返回
    /// - true: 结果已采纳
    /// - false: 令牌过期, 结果被丢弃
    pub fn complete_analysis(&mut self, token: RequestToken, result: AdvisoryResult) -> bool {
        if self.analysis_token != Some(token) {
            tracing::debug!(
                token = %token,
                current = ?self.analysis_token,
                "丢弃过期研判结果"
            );
            self.record(DashboardEvent::AnalysisDiscarded { token });
            return false;
        }

        self.state.analysis = Some(result);
        self.state.analyzing = false;
        self.analysis_token = None;
        self.record(DashboardEvent::AnalysisCompleted { token });
        true
    }

    pub fn is_current_analysis(&self, token: RequestToken) -> bool {
        self.analysis_token == Some(token)
    }

    // ==========================================
    // 检索条件
    // ==========================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.state.search == search {
            return;
        }
        self.state.search = search.clone();
        self.record(DashboardEvent::SearchChanged { search });
    }

    pub fn set_region(&mut self, region: Option<Region>) {
        if self.state.region == region {
            return;
        }
        self.state.region = region;
        self.record(DashboardEvent::RegionChanged { region });
    }

    // ==========================================
    // 自由问答
    // ==========================================

    /// 开始问答
    ///
    /// 新问题会使尚未返回的旧问题过期
    pub fn begin_chat(&mut self, question: impl Into<String>) -> RequestToken {
        let token = self.issue_token();
        self.pending_chat = Some(PendingChat {
            token,
            question: question.into(),
        });
        self.state.chatting = true;
        self.record(DashboardEvent::ChatStarted { token });
        token
    }

    /// 提交问答结果
    ///
    /// # 返回
    /// - true: 已追加到问答记录
    /// - false: 令牌过期, 回答被丢弃
    pub fn complete_chat(&mut self, token: RequestToken, answer: impl Into<String>) -> bool {
        let pending = match self.pending_chat.take() {
            Some(p) if p.token == token => p,
            other => {
                self.pending_chat = other;
                tracing::debug!(token = %token, "丢弃过期问答结果");
                self.record(DashboardEvent::ChatDiscarded { token });
                return false;
            }
        };

        self.state.chat_history.push(ChatExchange {
            question: pending.question,
            answer: answer.into(),
        });
        self.state.chatting = false;
        self.record(DashboardEvent::ChatCompleted { token });
        true
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 请求导出
    ///
    /// # 返回
    /// - Err: 尚无研判结果, 或已有导出在进行中
    pub fn request_export(&mut self, kind: ExportKind) -> Result<(), StoreTransitionError> {
        if let Some(current) = self.state.exporting {
            return Err(StoreTransitionError {
                from: format!("EXPORTING_{}", current),
                to: format!("EXPORTING_{}", kind),
            });
        }
        if self.state.analysis.is_none() {
            return Err(StoreTransitionError {
                from: "NO_ANALYSIS".to_string(),
                to: format!("EXPORTING_{}", kind),
            });
        }

        self.state.exporting = Some(kind);
        self.state.export_error = None;
        self.record(DashboardEvent::ExportRequested { kind });
        Ok(())
    }

    /// 结束导出（成功或失败均离开导出状态, 不重试）
    pub fn finish_export(&mut self, outcome: Result<(), String>) -> Result<(), StoreTransitionError> {
        let kind = self.state.exporting.take().ok_or_else(|| StoreTransitionError {
            from: "IDLE".to_string(),
            to: "EXPORT_FINISHED".to_string(),
        })?;

        let success = outcome.is_ok();
        if let Err(message) = outcome {
            tracing::warn!(kind = %kind, error = %message, "导出失败");
            self.state.export_error = Some(message);
        }
        self.record(DashboardEvent::ExportFinished { kind, success });
        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.clone()
    }

    pub fn events(&self) -> &[DashboardEvent] {
        &self.events
    }
}

/// 非法的状态转换
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("from={from} to={to}")]
pub struct StoreTransitionError {
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisory::AdvisorySource;
    use crate::domain::types::AdvisoryRisk;

    fn result(text: &str) -> AdvisoryResult {
        AdvisoryResult {
            risk: AdvisoryRisk::Medium,
            financial_impact: text.to_string(),
            recommendation: String::new(),
            projection: None,
            source: AdvisorySource::Fallback,
        }
    }

    #[test]
    fn test_tokens_increase() {
        let mut store = DashboardStore::new();
        let a = store.select_municipality(1);
        let b = store.select_municipality(2);
        assert!(b > a);
        assert!(!store.is_current_analysis(a));
        assert!(store.is_current_analysis(b));
    }

    #[test]
    fn test_selection_clears_previous_analysis() {
        let mut store = DashboardStore::new();
        let t = store.select_municipality(1);
        assert!(store.complete_analysis(t, result("a")));
        store.select_municipality(2);
        assert!(store.state().analysis.is_none());
        assert!(store.state().analyzing);
    }

    #[test]
    fn test_export_requires_analysis() {
        let mut store = DashboardStore::new();
        assert!(store.request_export(ExportKind::Pdf).is_err());
        assert!(store.finish_export(Ok(())).is_err());
    }

    #[test]
    fn test_transition_error_message() {
        let mut store = DashboardStore::new();
        let err = store.finish_export(Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "from=IDLE to=EXPORT_FINISHED");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_export_kind_parse() {
        assert_eq!("pdf".parse::<ExportKind>().unwrap(), ExportKind::Pdf);
        assert_eq!("png".parse::<ExportKind>().unwrap(), ExportKind::Image);
        assert!("docx".parse::<ExportKind>().is_err());
    }

    #[test]
    fn test_search_change_recorded_once() {
        let mut store = DashboardStore::new();
        store.set_search("cui");
        store.set_search("cui");
        let count = store
            .events()
            .iter()
            .filter(|e| matches!(e, DashboardEvent::SearchChanged { .. }))
            .count();
        assert_eq!(count, 1);
    }
}
