// ==========================================
// MunicipalityRecord 构建器
// ==========================================

use ses_mt_360::domain::municipality::{HistoryPoint, MunicipalityRecord, HISTORY_PERIODS};
use ses_mt_360::domain::types::Region;

pub struct RecordBuilder {
    id: u32,
    name: String,
    region: Region,
    population: u32,
    ig_aps: f64,
    avoidable_admissions: u32,
    estimated_hospital_cost: f64,
    history: Option<[f64; 4]>,
}

impl RecordBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            region: Region::BaixadaCuiabana,
            population: 20_000,
            ig_aps: 65.0,
            avoidable_admissions: 40,
            estimated_hospital_cost: 160_000.0,
            history: None,
        }
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    pub fn ig_aps(mut self, ig_aps: f64) -> Self {
        self.ig_aps = ig_aps;
        self
    }

    pub fn admissions(mut self, admissions: u32) -> Self {
        self.avoidable_admissions = admissions;
        self
    }

    pub fn hospital_cost(mut self, cost: f64) -> Self {
        self.estimated_hospital_cost = cost;
        self
    }

    pub fn history(mut self, values: [f64; 4]) -> Self {
        self.history = Some(values);
        self
    }

    pub fn build(self) -> MunicipalityRecord {
        let ig = self.ig_aps;
        let values = self.history.unwrap_or([ig - 2.0, ig - 1.0, ig - 0.5, ig]);
        MunicipalityRecord {
            id: self.id,
            name: self.name,
            region: self.region,
            population: self.population,
            aps_coverage_pct: 85.0,
            ig_aps: ig,
            hypertension_coverage_pct: ig * 0.7,
            avoidable_admissions: self.avoidable_admissions,
            estimated_hospital_cost: self.estimated_hospital_cost,
            history: HISTORY_PERIODS
                .iter()
                .zip(values.iter())
                .map(|(period, value)| HistoryPoint {
                    period: period.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }
}
