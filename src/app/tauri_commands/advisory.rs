use crate::app::state::AppState;

use super::common::{map_api_error, to_json};

// ==========================================
// AI 研判相关命令
// ==========================================

/// 选中市镇并研判
///
/// 返回 AnalysisOutcome; applied=false 表示已被更新的选择取代
#[tauri::command(rename_all = "snake_case")]
pub async fn select_municipality(
    state: tauri::State<'_, AppState>,
    municipality_id: u32,
) -> Result<String, String> {
    let outcome = state
        .select_municipality(municipality_id)
        .await
        .map_err(map_api_error)?;

    to_json(&outcome)
}

/// 自由问答
#[tauri::command(rename_all = "snake_case")]
pub async fn ask_advisor(
    state: tauri::State<'_, AppState>,
    question: String,
) -> Result<String, String> {
    let answer = state.ask_advisor(&question).await.map_err(map_api_error)?;
    to_json(&answer)
}
