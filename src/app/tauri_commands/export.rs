use std::path::PathBuf;

use chrono::Local;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::app::store::ExportKind;

use super::common::{map_api_error, to_json};

// ==========================================
// 报告与导出相关命令
// ==========================================

/// 当前研判的报告文本（前端写入剪贴板）
#[tauri::command(rename_all = "snake_case")]
pub async fn copy_report_text(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let text = state
        .copy_report_text(Local::now().naive_local())
        .map_err(map_api_error)?;
    to_json(&text)
}

/// 前端开始图片/PDF 导出
#[tauri::command(rename_all = "snake_case")]
pub async fn request_export(
    state: tauri::State<'_, AppState>,
    kind: String,
) -> Result<String, String> {
    let kind = kind
        .parse::<ExportKind>()
        .map_err(|e| map_api_error(ApiError::InvalidInput(e)))?;

    state.request_export(kind).map_err(map_api_error)?;
    to_json(&state.dashboard_state().map_err(map_api_error)?)
}

/// 前端导出结束（error 为空表示成功）
#[tauri::command(rename_all = "snake_case")]
pub async fn finish_export(
    state: tauri::State<'_, AppState>,
    error: Option<String>,
) -> Result<String, String> {
    state.finish_export(error).map_err(map_api_error)?;
    to_json(&state.dashboard_state().map_err(map_api_error)?)
}

/// 导出文本报告
#[tauri::command(rename_all = "snake_case")]
pub async fn export_text_report(
    state: tauri::State<'_, AppState>,
    dir: Option<String>,
) -> Result<String, String> {
    let path = state
        .export_text_report(dir.map(PathBuf::from))
        .map_err(map_api_error)?;
    to_json(&path.display().to_string())
}
