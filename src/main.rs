// ==========================================
// SES-MT 360 - 主入口
// ==========================================
// 技术栈: Tauri + Rust + Gemini
// 无 tauri-app 特性时: 命令行输出驾驶舱摘要
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(
    all(not(debug_assertions), feature = "tauri-app"),
    windows_subsystem = "windows"
)]

use ses_mt_360::app::AppState;
use ses_mt_360::config::ConfigManager;

#[cfg(feature = "tauri-app")]
fn main() {
    use ses_mt_360::app::tauri_commands::*;

    // 初始化日志系统
    ses_mt_360::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - APS 覆盖驾驶舱", ses_mt_360::APP_NAME);
    tracing::info!("系统版本: {}", ses_mt_360::VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::from_env();
    match config.get_config_snapshot() {
        Ok(snapshot) => tracing::info!("配置快照: {}", snapshot),
        Err(e) => tracing::warn!("配置快照序列化失败: {}", e),
    }

    let app_state = AppState::new(&config);
    tracing::info!("AppState初始化成功, 启动Tauri应用...");

    // 启动Tauri应用
    let result = tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 驾驶舱相关命令 (7个)
            // ==========================================
            get_dashboard_stats,
            list_regions,
            list_municipalities,
            get_municipality,
            get_projection,
            get_comparison_series,
            get_dashboard_state,

            // ==========================================
            // AI 研判相关命令 (2个)
            // ==========================================
            select_municipality,
            ask_advisor,

            // ==========================================
            // 报告与导出相关命令 (4个)
            // ==========================================
            copy_report_text,
            request_export,
            finish_export,
            export_text_report,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("Tauri应用异常退出: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use ses_mt_360::i18n::tr;
    use ses_mt_360::report::{format_currency, format_number};

    ses_mt_360::logging::init();

    let config = ConfigManager::from_env();
    let state = AppState::new(&config);
    let locale = state.advisory_api.locale();

    println!("==================================================");
    println!("{} - {}", tr("app.name", locale), tr("app.subtitle", locale));
    println!("系统版本: {}", ses_mt_360::VERSION);
    println!("==================================================");

    let stats = state.dashboard_api.get_dashboard_stats();
    println!(
        "市镇: {}  平均 IG-APS: {}  危急: {}  ICSAP 成本: R$ {}",
        stats.municipality_count,
        format_number(stats.average_ig_aps, 1, locale),
        stats.critical_count,
        format_currency(stats.total_hospital_cost, locale)
    );
    println!();

    for summary in state.dashboard_api.list_regions() {
        println!(
            "{:<28} {:>3} 市镇  IG-APS {:>5}  危急 {:>2}",
            summary.region.name(),
            summary.municipality_count,
            format_number(summary.average_ig_aps, 1, locale),
            summary.critical_count
        );
    }
    println!();

    // 指标最低的市镇作为示例研判
    let records = state.dashboard_api.records();
    let Some(worst) = records
        .iter()
        .min_by(|a, b| a.ig_aps.total_cmp(&b.ig_aps))
    else {
        anyhow::bail!("数据集为空");
    };

    let outcome = state.select_municipality(worst.id).await?;
    tracing::info!(
        municipality = %worst.name,
        source = ?outcome.result.source,
        "示例研判完成"
    );

    let report = state.copy_report_text(chrono::Local::now().naive_local())?;
    println!("{}", report);
    println!();
    println!("启用桌面界面: cargo run --features tauri-app");

    Ok(())
}
