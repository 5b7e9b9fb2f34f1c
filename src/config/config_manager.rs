// ==========================================
// SES-MT 360 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 来源: 内置默认值 < 环境变量 < 显式覆写
// ==========================================

use crate::config::advisor_settings::{
    AdvisorSettings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use crate::config::config_reader::DashboardConfigReader;
use crate::i18n::{normalize_locale, DEFAULT_LOCALE};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// 快照中凭证的占位符
const REDACTED: &str = "***";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建只含默认值的 ConfigManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 从进程环境变量加载
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意查找函数加载（测试中可注入固定环境）
    ///
    /// # 参数
    /// - lookup: 环境变量名 → 值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = BTreeMap::new();

        for (key, env_names) in config_keys::ENV_BINDINGS {
            let found = env_names
                .iter()
                .filter_map(|name| lookup(name))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty());

            if let Some(value) = found {
                values.insert(key.to_string(), value);
            }
        }

        tracing::debug!(keys = ?values.keys().collect::<Vec<_>>(), "配置已加载");
        Self { values }
    }

    /// 显式覆写配置项
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// 读取配置值（不含默认值）
    pub fn get_global_config_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 说明
    /// 凭证以占位符替换, 快照可以安全写入日志
    pub fn get_config_snapshot(&self) -> Result<String, serde_json::Error> {
        let redacted: BTreeMap<&str, &str> = self
            .values
            .iter()
            .map(|(k, v)| {
                if k == config_keys::AI_API_KEY {
                    (k.as_str(), REDACTED)
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        serde_json::to_string(&redacted)
    }
}

// ==========================================
// DashboardConfigReader Trait 实现
// ==========================================
impl DashboardConfigReader for ConfigManager {
    fn advisor_settings(&self) -> AdvisorSettings {
        let timeout_raw = self.get_config_or_default(
            config_keys::AI_TIMEOUT_SECS,
            &DEFAULT_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs = match timeout_raw.parse::<u64>() {
            Ok(v) if v > 0 => v,
            _ => {
                tracing::warn!(
                    config_key = config_keys::AI_TIMEOUT_SECS,
                    raw_value = %timeout_raw,
                    "超时配置格式错误，使用默认值"
                );
                DEFAULT_TIMEOUT_SECS
            }
        };

        AdvisorSettings {
            api_key: self.get_global_config_value(config_keys::AI_API_KEY),
            model: self.get_config_or_default(config_keys::AI_MODEL, DEFAULT_MODEL),
            base_url: self
                .get_config_or_default(config_keys::AI_BASE_URL, DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn dataset_seed(&self) -> Option<u64> {
        let raw = self.get_global_config_value(config_keys::DATASET_SEED)?;
        match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(
                    config_key = config_keys::DATASET_SEED,
                    raw_value = %raw,
                    "数据集种子格式错误，改为随机生成"
                );
                None
            }
        }
    }

    fn locale(&self) -> &'static str {
        normalize_locale(&self.get_config_or_default(config_keys::LOCALE, DEFAULT_LOCALE))
    }

    fn export_dir(&self) -> PathBuf {
        if let Some(dir) = self.get_global_config_value(config_keys::EXPORT_DIR) {
            return PathBuf::from(dir);
        }
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // AI 研判服务
    pub const AI_API_KEY: &str = "ai_api_key";
    pub const AI_MODEL: &str = "ai_model";
    pub const AI_BASE_URL: &str = "ai_base_url";
    pub const AI_TIMEOUT_SECS: &str = "ai_timeout_secs";

    // 数据集
    pub const DATASET_SEED: &str = "dataset_seed";

    // 展示
    pub const LOCALE: &str = "locale";
    pub const EXPORT_DIR: &str = "export_dir";

    /// 配置键 → 环境变量（按优先级）
    pub const ENV_BINDINGS: &[(&str, &[&str])] = &[
        (AI_API_KEY, &["GEMINI_API_KEY", "API_KEY"]),
        (AI_MODEL, &["SES_MT_360_MODEL"]),
        (AI_BASE_URL, &["SES_MT_360_API_BASE_URL"]),
        (AI_TIMEOUT_SECS, &["SES_MT_360_AI_TIMEOUT_SECS"]),
        (DATASET_SEED, &["SES_MT_360_DATASET_SEED"]),
        (LOCALE, &["SES_MT_360_LOCALE"]),
        (EXPORT_DIR, &["SES_MT_360_EXPORT_DIR"]),
    ];
}
