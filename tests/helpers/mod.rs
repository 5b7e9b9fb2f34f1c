// ==========================================
// 集成测试辅助工具
// ==========================================
// 职责: 研判服务桩、市镇记录构建器、测试配置
// ==========================================

#![allow(dead_code)]

pub mod record_builder;
pub mod stub_service;

use ses_mt_360::config::{config_keys, ConfigManager};

/// 固定种子 + 葡语的测试配置（同时初始化测试日志）
pub fn test_config() -> ConfigManager {
    ses_mt_360::logging::init_test();
    ConfigManager::from_lookup(|_| None)
        .with_value(config_keys::DATASET_SEED, "42")
        .with_value(config_keys::LOCALE, "pt-BR")
}
