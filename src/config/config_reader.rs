// ==========================================
// SES-MT 360 - 配置读取 Trait
// ==========================================
// 职责: 定义应用层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::advisor_settings::AdvisorSettings;
use std::path::PathBuf;

// ==========================================
// DashboardConfigReader Trait
// ==========================================
// 实现者: ConfigManager（默认值 + 环境变量覆写）
pub trait DashboardConfigReader: Send + Sync {
    /// AI 研判服务参数
    ///
    /// # 默认值
    /// - model: gemini-3-flash-preview
    /// - timeout: 30 秒
    /// - api_key: 无（走本地降级）
    fn advisor_settings(&self) -> AdvisorSettings;

    /// 数据集随机种子
    ///
    /// # 返回
    /// - Some(seed): 可复现的数据集
    /// - None: 每次启动随机生成
    fn dataset_seed(&self) -> Option<u64>;

    /// 报告与提示词语言
    ///
    /// # 默认值
    /// - pt-BR
    fn locale(&self) -> &'static str;

    /// 文本报告导出目录
    ///
    /// # 默认值
    /// - 用户下载目录（无法获取时为当前目录）
    fn export_dir(&self) -> PathBuf;
}
