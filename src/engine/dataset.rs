// ==========================================
// SES-MT 360 - 合成数据集生成器
// ==========================================
// 职责: 基于固定目录生成市镇 APS 指标快照
// 输入: 随机源（由调用方注入）
// 输出: Vec<MunicipalityRecord>（按名称排序）
// ==========================================
// 说明: 数据为模拟数据, 每次启动重新生成;
//       测试与导出工具使用固定种子保证可复现
// ==========================================

use crate::domain::municipality::{HistoryPoint, MunicipalityRecord, HISTORY_PERIODS};
use crate::domain::types::Region;
use crate::engine::catalog::{self, MUNICIPALITIES_BY_REGION};
use crate::engine::projection::round_to;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 未收录人口的市镇: 人口下限
const FALLBACK_POPULATION_MIN: u32 = 4_500;
/// 未收录人口的市镇: 随机跨度
const FALLBACK_POPULATION_SPAN: u32 = 12_000;

/// 人口分层阈值
const VERY_SMALL_LIMIT: u32 = 10_000;
const HUB_LIMIT: u32 = 50_000;

// ==========================================
// 人口分层
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationTier {
    /// < 10 000
    VerySmall,
    /// 10 000 ..= 50 000
    MidSize,
    /// > 50 000（区域中心）
    Hub,
}

impl PopulationTier {
    pub fn of(population: u32) -> Self {
        if population > HUB_LIMIT {
            PopulationTier::Hub
        } else if population < VERY_SMALL_LIMIT {
            PopulationTier::VerySmall
        } else {
            PopulationTier::MidSize
        }
    }

    /// APS 综合指标取值区间 [min, min + span)
    fn indicator_range(&self) -> (f64, f64) {
        match self {
            PopulationTier::VerySmall => (75.0, 15.0),
            PopulationTier::Hub => (60.0, 15.0),
            PopulationTier::MidSize => (50.0, 30.0),
        }
    }

    /// APS 覆盖率取值区间 [min, min + span)
    fn coverage_range(&self) -> (f64, f64) {
        match self {
            PopulationTier::VerySmall => (95.0, 5.0),
            PopulationTier::Hub => (65.0, 20.0),
            PopulationTier::MidSize => (80.0, 15.0),
        }
    }

    /// 人均可避免住院基础率
    fn admission_rate(&self) -> f64 {
        match self {
            PopulationTier::Hub => 0.001,
            _ => 0.002,
        }
    }

    /// 住院基数补偿
    fn admission_floor(&self) -> u32 {
        match self {
            PopulationTier::Hub => 50,
            _ => 5,
        }
    }
}

// ==========================================
// DatasetGenerator - 数据集生成器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetGenerator;

impl DatasetGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 以固定种子生成（可复现）
    pub fn generate_seeded(&self, seed: u64) -> Vec<MunicipalityRecord> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// 生成完整数据集
    ///
    /// # 参数
    /// - `rng`: 随机源
    ///
    /// # 返回
    /// 按名称（葡语排序, 不区分重音）排序的市镇记录
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<MunicipalityRecord> {
        let mut records = Vec::with_capacity(catalog::municipality_count());

        for (region_index, (region, names)) in MUNICIPALITIES_BY_REGION.iter().enumerate() {
            for (index, name) in names.iter().enumerate() {
                let id = (region_index * 100 + index + 1) as u32;
                records.push(self.generate_record(rng, id, *region, name));
            }
        }

        records.sort_by_cached_key(|r| catalog::collation_key(&r.name));

        tracing::debug!(count = records.len(), "合成数据集生成完成");
        records
    }

    fn generate_record<R: Rng>(
        &self,
        rng: &mut R,
        id: u32,
        region: Region,
        name: &str,
    ) -> MunicipalityRecord {
        // 1. 人口
        let population = catalog::known_population(name).unwrap_or_else(|| {
            FALLBACK_POPULATION_MIN + rng.gen_range(0..FALLBACK_POPULATION_SPAN)
        });
        let tier = PopulationTier::of(population);

        // 2. 指标
        let (ind_min, ind_span) = tier.indicator_range();
        let ig_aps = round_to(ind_min + rng.gen::<f64>() * ind_span, 1);

        let (cov_min, cov_span) = tier.coverage_range();
        let aps_coverage_pct = round_to(cov_min + rng.gen::<f64>() * cov_span, 1);

        let hypertension_coverage_pct = round_to(ig_aps * (0.6 + rng.gen::<f64>() * 0.3), 1);

        // 3. 可避免住院: 指标越低, 住院越多
        let efficiency_factor = (100.0 - ig_aps) / 50.0;
        let avoidable_admissions = (population as f64 * tier.admission_rate() * efficiency_factor)
            .round() as u32
            + tier.admission_floor();

        let estimated_hospital_cost = round_to(
            avoidable_admissions as f64 * (3500.0 + rng.gen::<f64>() * 2000.0),
            2,
        );

        // 4. 历史
        let history = Self::generate_history(rng, ig_aps);

        MunicipalityRecord {
            id,
            name: name.to_string(),
            region,
            population,
            aps_coverage_pct,
            ig_aps,
            hypertension_coverage_pct,
            avoidable_admissions,
            estimated_hospital_cost,
            history,
        }
    }

    /// 历史四期: 越早的期次波动越大, 最后一期即当前值
    fn generate_history<R: Rng>(rng: &mut R, base: f64) -> Vec<HistoryPoint> {
        let offsets = [(3.0, 5.0), (2.0, 4.0), (1.0, 2.0)];

        let mut history: Vec<HistoryPoint> = offsets
            .iter()
            .zip(HISTORY_PERIODS.iter())
            .map(|((below, span), period)| HistoryPoint {
                period: period.to_string(),
                value: round_to(base - below + rng.gen::<f64>() * span, 1),
            })
            .collect();

        history.push(HistoryPoint {
            period: HISTORY_PERIODS[3].to_string(),
            value: base,
        });
        history
    }
}
