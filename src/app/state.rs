// ==========================================
// SES-MT 360 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 并发: 状态锁只在同步片段内持有, 不跨越 .await
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDateTime};
use rand::Rng;

use crate::advisory::{build_service, Advisor, AdvisoryService};
use crate::api::{AdvisoryApi, ApiError, ApiResult, DashboardApi};
use crate::app::store::{DashboardState, DashboardStore, ExportKind, RequestToken};
use crate::config::{ConfigManager, DashboardConfigReader};
use crate::domain::advisory::AdvisoryResult;
use crate::domain::municipality::MunicipalityRecord;
use crate::domain::types::Region;
use crate::engine::dataset::DatasetGenerator;

/// 选中市镇的研判结果
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisOutcome {
    pub token: RequestToken,
    pub municipality_id: u32,
    pub result: AdvisoryResult,
    /// false: 期间已有更新的选择, 结果未写入状态
    pub applied: bool,
}

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 研判API
    pub advisory_api: Arc<AdvisoryApi>,

    /// 驾驶舱状态（单一控制器）
    pub store: Mutex<DashboardStore>,

    /// 文本报告导出目录
    pub export_dir: PathBuf,
}

impl AppState {
    /// 按配置初始化应用状态
    ///
    /// # 说明
    /// - 配置了数据集种子时数据可复现, 否则每次启动随机生成
    /// - 有 AI 凭证时使用 Gemini, 否则研判全部走本地降级
    pub fn new(config: &ConfigManager) -> Self {
        let settings = config.advisor_settings();
        tracing::info!(advisor = ?settings, "初始化AppState");
        let service = build_service(&settings);
        Self::with_service(config, service)
    }

    /// 使用指定研判服务初始化（测试可注入桩服务）
    pub fn with_service(config: &ConfigManager, service: Arc<dyn AdvisoryService>) -> Self {
        let seed = config.dataset_seed().unwrap_or_else(|| {
            let seed = rand::thread_rng().gen::<u64>();
            tracing::debug!(seed, "未配置数据集种子, 使用随机种子");
            seed
        });

        let records: Arc<[MunicipalityRecord]> =
            DatasetGenerator::new().generate_seeded(seed).into();
        tracing::info!(municipalities = records.len(), seed, "合成数据集已生成");

        Self::from_records(config, records, seed, service)
    }

    /// 使用现成数据集初始化
    pub fn from_records(
        config: &ConfigManager,
        records: Arc<[MunicipalityRecord]>,
        rng_seed: u64,
        service: Arc<dyn AdvisoryService>,
    ) -> Self {
        let locale = config.locale();
        let dashboard_api = Arc::new(DashboardApi::new(records, rng_seed));
        let advisor = Advisor::new(service, locale);
        let advisory_api = Arc::new(AdvisoryApi::new(advisor, Arc::clone(&dashboard_api)));

        Self {
            dashboard_api,
            advisory_api,
            store: Mutex::new(DashboardStore::new()),
            export_dir: config.export_dir(),
        }
    }

    fn lock_store(&self) -> ApiResult<MutexGuard<'_, DashboardStore>> {
        self.store
            .lock()
            .map_err(|e| ApiError::InternalError(format!("状态锁获取失败: {}", e)))
    }

    // ==========================================
    // 驾驶舱流程
    // ==========================================

    /// 选中市镇并执行研判
    ///
    /// # 说明
    /// 研判期间若有新的选择, 本次结果不写入状态（最后一次选择生效）
    pub async fn select_municipality(&self, municipality_id: u32) -> ApiResult<AnalysisOutcome> {
        self.dashboard_api.get_municipality(municipality_id)?;

        let token = self.lock_store()?.select_municipality(municipality_id);

        let result = self.advisory_api.analyze(municipality_id).await?;

        let applied = self.lock_store()?.complete_analysis(token, result.clone());
        Ok(AnalysisOutcome {
            token,
            municipality_id,
            result,
            applied,
        })
    }

    /// 自由问答（记录到问答历史）
    pub async fn ask_advisor(&self, question: &str) -> ApiResult<String> {
        if question.trim().is_empty() {
            return Err(ApiError::InvalidInput("问题不能为空".to_string()));
        }

        let token = self.lock_store()?.begin_chat(question.trim());
        let answer = self.advisory_api.ask(question).await?;
        self.lock_store()?.complete_chat(token, answer.clone());
        Ok(answer)
    }

    /// 更新检索条件
    pub fn set_filter(&self, search: String, region: Option<Region>) -> ApiResult<()> {
        let mut store = self.lock_store()?;
        store.set_search(search);
        store.set_region(region);
        Ok(())
    }

    pub fn dashboard_state(&self) -> ApiResult<DashboardState> {
        Ok(self.lock_store()?.snapshot())
    }

    // ==========================================
    // 报告与导出
    // ==========================================

    /// 当前研判的报告文本（复制到剪贴板）
    pub fn copy_report_text(&self, generated_at: NaiveDateTime) -> ApiResult<String> {
        let (municipality_id, result) = self.current_analysis()?;
        self.advisory_api
            .report_text(municipality_id, &result, generated_at)
    }

    pub fn request_export(&self, kind: ExportKind) -> ApiResult<()> {
        self.lock_store()?.request_export(kind)?;
        Ok(())
    }

    /// 前端完成图片/PDF 导出后回报结果
    pub fn finish_export(&self, error: Option<String>) -> ApiResult<()> {
        let outcome = match error {
            Some(message) => Err(message),
            None => Ok(()),
        };
        self.lock_store()?.finish_export(outcome)?;
        Ok(())
    }

    /// 文本报告导出（完整的导出生命周期）
    ///
    /// # 返回
    /// - Ok(PathBuf): 写入的文件
    /// - Err(ApiError::ExportError): 写入失败, 状态已离开导出中
    pub fn export_text_report(&self, dir: Option<PathBuf>) -> ApiResult<PathBuf> {
        let (municipality_id, result) = self.current_analysis()?;
        self.request_export(ExportKind::Text)?;

        let dir = dir.unwrap_or_else(|| self.export_dir.clone());
        let written = self.advisory_api.export_text_report(
            municipality_id,
            &result,
            Local::now().naive_local(),
            &dir,
        );

        let outcome = written.as_ref().map(|_| ()).map_err(|e| e.to_string());
        self.lock_store()?.finish_export(outcome)?;
        written
    }

    fn current_analysis(&self) -> ApiResult<(u32, AdvisoryResult)> {
        let store = self.lock_store()?;
        let state = store.state();
        match (state.selected_municipality_id, state.analysis.as_ref()) {
            (Some(id), Some(result)) => Ok((id, result.clone())),
            _ => Err(ApiError::InvalidStateTransition {
                from: "NO_ANALYSIS".to_string(),
                to: "REPORT".to_string(),
            }),
        }
    }
}
