// ==========================================
// SES-MT 360 - 领域类型定义
// ==========================================
// 职责: 卫生区、风险等级、趋势等枚举类型
// 序列化格式: 与前端约定一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 卫生区 (Region)
// ==========================================
// 固定 16 个卫生区; 声明顺序即前端下拉列表顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Baixada Cuiabana")]
    BaixadaCuiabana,
    #[serde(rename = "Sul Mato-grossense")]
    SulMatoGrossense,
    #[serde(rename = "Teles Pires")]
    TelesPires,
    #[serde(rename = "Médio Norte")]
    MedioNorte,
    #[serde(rename = "Oeste Mato-grossense")]
    OesteMatoGrossense,
    #[serde(rename = "Araguaia Xingu")]
    AraguaiaXingu,
    #[serde(rename = "Vale do Peixoto")]
    ValeDoPeixoto,
    #[serde(rename = "Garças Araguaia")]
    GarcasAraguaia,
    #[serde(rename = "Vale do Guaporé")]
    ValeDoGuapore,
    #[serde(rename = "Vale do Arinos")]
    ValeDoArinos,
    #[serde(rename = "Médio Araguaia")]
    MedioAraguaia,
    #[serde(rename = "Norte Araguaia")]
    NorteAraguaia,
    #[serde(rename = "Noroeste Mato-grossense")]
    NoroesteMatoGrossense,
    #[serde(rename = "Alto Tapajós")]
    AltoTapajos,
    #[serde(rename = "Sudoeste Mato-grossense")]
    SudoesteMatoGrossense,
    #[serde(rename = "Centro Sul")]
    CentroSul,
}

impl Region {
    /// 全部卫生区（前端展示顺序）
    pub const ALL: [Region; 16] = [
        Region::BaixadaCuiabana,
        Region::SulMatoGrossense,
        Region::TelesPires,
        Region::MedioNorte,
        Region::OesteMatoGrossense,
        Region::AraguaiaXingu,
        Region::ValeDoPeixoto,
        Region::GarcasAraguaia,
        Region::ValeDoGuapore,
        Region::ValeDoArinos,
        Region::MedioAraguaia,
        Region::NorteAraguaia,
        Region::NoroesteMatoGrossense,
        Region::AltoTapajos,
        Region::SudoesteMatoGrossense,
        Region::CentroSul,
    ];

    /// 卫生区官方名称
    pub fn name(&self) -> &'static str {
        match self {
            Region::BaixadaCuiabana => "Baixada Cuiabana",
            Region::SulMatoGrossense => "Sul Mato-grossense",
            Region::TelesPires => "Teles Pires",
            Region::MedioNorte => "Médio Norte",
            Region::OesteMatoGrossense => "Oeste Mato-grossense",
            Region::AraguaiaXingu => "Araguaia Xingu",
            Region::ValeDoPeixoto => "Vale do Peixoto",
            Region::GarcasAraguaia => "Garças Araguaia",
            Region::ValeDoGuapore => "Vale do Guaporé",
            Region::ValeDoArinos => "Vale do Arinos",
            Region::MedioAraguaia => "Médio Araguaia",
            Region::NorteAraguaia => "Norte Araguaia",
            Region::NoroesteMatoGrossense => "Noroeste Mato-grossense",
            Region::AltoTapajos => "Alto Tapajós",
            Region::SudoesteMatoGrossense => "Sudoeste Mato-grossense",
            Region::CentroSul => "Centro Sul",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("未知卫生区: {}", wanted))
    }
}

// ==========================================
// 床位饱和风险 (Saturation Risk)
// ==========================================
// 由指标偏差单调决定: LOW < MODERATE < HIGH
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaturationRisk {
    Low,
    Moderate,
    High,
}

impl fmt::Display for SaturationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaturationRisk::Low => write!(f, "LOW"),
            SaturationRisk::Moderate => write!(f, "MODERATE"),
            SaturationRisk::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 研判风险等级 (Advisory Risk)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisoryRisk {
    /// 解析模型返回的风险标签
    ///
    /// 同时接受英文与葡萄牙文标签（大小写、重音不敏感）
    pub fn parse_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .to_uppercase()
            .chars()
            .map(|c| match c {
                'É' | 'Ê' => 'E',
                'Í' => 'I',
                other => other,
            })
            .collect();

        match normalized.as_str() {
            "LOW" | "BAIXO" => Some(AdvisoryRisk::Low),
            "MEDIUM" | "MEDIO" | "MODERATE" | "MODERADO" => Some(AdvisoryRisk::Medium),
            "HIGH" | "ALTO" => Some(AdvisoryRisk::High),
            "CRITICAL" | "CRITICO" => Some(AdvisoryRisk::Critical),
            _ => None,
        }
    }

    /// i18n 键（用于报告和提示词中的本地化标签）
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AdvisoryRisk::Low => "risk.low",
            AdvisoryRisk::Medium => "risk.medium",
            AdvisoryRisk::High => "risk.high",
            AdvisoryRisk::Critical => "risk.critical",
        }
    }
}

impl fmt::Display for AdvisoryRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryRisk::Low => write!(f, "LOW"),
            AdvisoryRisk::Medium => write!(f, "MEDIUM"),
            AdvisoryRisk::High => write!(f, "HIGH"),
            AdvisoryRisk::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 指标趋势 (Trend)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Declining,
    Stable,
}

impl Trend {
    /// 由首末两点比较得出
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Trend::Rising
        } else if delta < 0.0 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Trend::Rising => "trend.rising",
            Trend::Declining => "trend.declining",
            Trend::Stable => "trend.stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Rising => write!(f, "rising"),
            Trend::Declining => write!(f, "declining"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}
