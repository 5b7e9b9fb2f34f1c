// ==========================================
// SES-MT 360 - 文本报告导出
// ==========================================
// 职责: 将智能研判报告写入文件
// 说明: 图片/PDF 导出由前端完成, 后端只负责文本
// ==========================================

use crate::i18n::tr;
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 报告文件名: <前缀>_<市镇>_<日期>.txt
///
/// 文件名中去除路径分隔符等非法字符
pub fn report_file_name(municipality: &str, date: NaiveDate, locale: &str) -> String {
    let safe_name: String = municipality
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    format!(
        "{}_{}_{}.txt",
        tr("report.file_prefix", locale),
        safe_name,
        date.format("%Y-%m-%d")
    )
}

/// 写出文本报告
///
/// # 参数
/// - dir: 目标目录（不存在时创建）
/// - file_name: 文件名
/// - content: 报告文本
///
/// # 返回
/// - Ok(PathBuf): 写出的文件路径
/// - Err(io::Error): 目录创建或写入失败
pub fn write_text_report(dir: &Path, file_name: &str, content: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, content)?;

    tracing::info!(path = %path.display(), bytes = content.len(), "文本报告已导出");
    Ok(path)
}
