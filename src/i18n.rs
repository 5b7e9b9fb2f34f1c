// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认）、英文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 规范化语言代码; 不支持的语言回落到默认语言
///
/// # 示例
/// ```
/// use ses_mt_360::i18n::normalize_locale;
/// assert_eq!(normalize_locale("en-US"), "en");
/// assert_eq!(normalize_locale("pt_br"), "pt-BR");
/// assert_eq!(normalize_locale("fr"), "pt-BR");
/// ```
pub fn normalize_locale(locale: &str) -> &'static str {
    let lower = locale.trim().replace('_', "-").to_lowercase();
    if lower.starts_with("pt") {
        "pt-BR"
    } else if lower.starts_with("en") {
        "en"
    } else if lower.starts_with("zh") {
        "zh-CN"
    } else {
        DEFAULT_LOCALE
    }
}

/// 翻译消息（指定语言）
///
/// 不依赖全局语言状态, 供报告与提示词生成使用
pub fn tr(key: &str, locale: &str) -> String {
    let locale = normalize_locale(locale);
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言, 带参数）
pub fn tr_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    interpolate(tr(key, locale), args)
}

fn interpolate(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_with_explicit_locale() {
        assert_eq!(tr("risk.medium", "pt-BR"), "MÉDIO");
        assert_eq!(tr("risk.medium", "en"), "MEDIUM");
        assert_eq!(tr("trend.declining", "pt-BR"), "em declínio");
        assert_eq!(tr("common.success", "en_US"), "Operation successful");
    }

    #[test]
    fn test_unknown_locale_uses_portuguese() {
        assert_eq!(tr("risk.high", "fr"), "ALTO");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = tr_with_args(
            "fallback.financial",
            "pt-BR",
            &[("amount", "144.000,00"), ("icu_days", "20")],
        );
        assert_eq!(msg, "Projeção de R$ 144.000,00 e pressão de 20 diárias de UTI.");
    }
}
