use crate::app::state::AppState;
use crate::engine::analytics::MunicipalityFilter;

use super::common::{map_api_error, parse_region, to_json};

// ==========================================
// 驾驶舱相关命令
// ==========================================

/// 全州统计
#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard_stats(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.dashboard_api.get_dashboard_stats())
}

/// 卫生区汇总
#[tauri::command(rename_all = "snake_case")]
pub async fn list_regions(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.dashboard_api.list_regions())
}

/// 市镇检索（同时更新驾驶舱检索条件）
#[tauri::command(rename_all = "snake_case")]
pub async fn list_municipalities(
    state: tauri::State<'_, AppState>,
    search: Option<String>,
    region: Option<String>,
) -> Result<String, String> {
    let filter = MunicipalityFilter {
        search: search.unwrap_or_default(),
        region: parse_region(region)?,
    };

    state
        .set_filter(filter.search.clone(), filter.region)
        .map_err(map_api_error)?;

    to_json(&state.dashboard_api.list_municipalities(&filter))
}

/// 市镇详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_municipality(
    state: tauri::State<'_, AppState>,
    municipality_id: u32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_municipality(municipality_id)
        .map_err(map_api_error)?;

    to_json(&result)
}

/// 本地影响预测
#[tauri::command(rename_all = "snake_case")]
pub async fn get_projection(
    state: tauri::State<'_, AppState>,
    municipality_id: u32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_projection(municipality_id)
        .map_err(map_api_error)?;

    to_json(&result)
}

/// 对标序列
#[tauri::command(rename_all = "snake_case")]
pub async fn get_comparison_series(
    state: tauri::State<'_, AppState>,
    municipality_id: u32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_comparison_series(municipality_id)
        .map_err(map_api_error)?;

    to_json(&result)
}

/// 驾驶舱状态快照
#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.dashboard_state().map_err(map_api_error)?;
    to_json(&result)
}
