// ==========================================
// SES-MT 360 - 本地化数字格式
// ==========================================
// pt-BR: 千分位 "." 小数点 ","
// en / zh-CN: 千分位 "," 小数点 "."
// ==========================================

use crate::i18n::normalize_locale;

fn separators(locale: &str) -> (char, char) {
    match normalize_locale(locale) {
        "pt-BR" => ('.', ','),
        _ => (',', '.'),
    }
}

/// 按语言格式化数字
///
/// # 参数
/// - value: 数值
/// - decimals: 固定小数位
/// - locale: 语言代码
///
/// # 示例
/// ```
/// use ses_mt_360::report::format::format_number;
/// assert_eq!(format_number(144000.0, 2, "pt-BR"), "144.000,00");
/// assert_eq!(format_number(650912.0, 0, "en"), "650,912");
/// ```
pub fn format_number(value: f64, decimals: usize, locale: &str) -> String {
    let (group_sep, decimal_sep) = separators(locale);

    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (raw.clone(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if value < 0.0 && raw.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(&frac);
    }
    out
}

/// 整数格式化（人口等）
pub fn format_integer(value: u64, locale: &str) -> String {
    format_number(value as f64, 0, locale)
}

/// 金额格式化（2 位小数）
pub fn format_currency(value: f64, locale: &str) -> String {
    format_number(value, 2, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_pt_br() {
        assert_eq!(format_number(0.0, 2, "pt-BR"), "0,00");
        assert_eq!(format_number(999.0, 0, "pt-BR"), "999");
        assert_eq!(format_number(1000.0, 0, "pt-BR"), "1.000");
        assert_eq!(format_number(1234567.891, 2, "pt-BR"), "1.234.567,89");
        assert_eq!(format_number(6.5, 1, "pt-BR"), "6,5");
    }

    #[test]
    fn test_format_number_en() {
        assert_eq!(format_currency(143580.0, "en"), "143,580.00");
        assert_eq!(format_integer(1010, "en"), "1,010");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-1500.5, 1, "pt-BR"), "-1.500,5");
        assert_eq!(format_number(-0.001, 1, "en"), "0.0");
    }
}
