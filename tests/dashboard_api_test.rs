// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试范围:
// 1. 全州统计与卫生区汇总
// 2. 市镇检索: 关键字（不区分大小写/重音）+ 卫生区
// 3. 预测与对标序列
// ==========================================

mod helpers;

use std::sync::Arc;

use helpers::record_builder::RecordBuilder;
use ses_mt_360::api::{ApiError, DashboardApi};
use ses_mt_360::domain::types::{Region, SaturationRisk};
use ses_mt_360::engine::MunicipalityFilter;
use ses_mt_360::{DatasetGenerator, MunicipalityRecord};

fn small_dataset() -> Arc<[MunicipalityRecord]> {
    vec![
        RecordBuilder::new(101, "Cuiabá")
            .ig_aps(62.0)
            .population(650_912)
            .hospital_cost(1_000_000.0)
            .build(),
        RecordBuilder::new(111, "Várzea Grande")
            .ig_aps(58.0)
            .population(299_472)
            .hospital_cost(500_000.5)
            .build(),
        RecordBuilder::new(1201, "Água Boa")
            .region(Region::MedioAraguaia)
            .ig_aps(80.0)
            .population(25_548)
            .hospital_cost(20_000.25)
            .build(),
        RecordBuilder::new(1203, "Canarana")
            .region(Region::MedioAraguaia)
            .ig_aps(50.0)
            .admissions(100)
            .population(25_859)
            .hospital_cost(30_000.0)
            .build(),
    ]
    .into()
}

// ==========================================
// 聚合查询
// ==========================================

#[test]
fn test_dashboard_stats() {
    let api = DashboardApi::new(small_dataset(), 1);
    let stats = api.get_dashboard_stats();

    assert_eq!(stats.municipality_count, 4);
    assert!((stats.average_ig_aps - 62.5).abs() < 1e-9);
    // 58.0 与 50.0 低于 60
    assert_eq!(stats.critical_count, 2);
    assert_eq!(stats.total_hospital_cost, 1_550_000.75);
}

#[test]
fn test_region_summaries_cover_all_regions() {
    let api = DashboardApi::new(small_dataset(), 1);
    let summaries = api.list_regions();

    assert_eq!(summaries.len(), Region::ALL.len());

    let baixada = summaries
        .iter()
        .find(|s| s.region == Region::BaixadaCuiabana)
        .unwrap();
    assert_eq!(baixada.municipality_count, 2);
    assert_eq!(baixada.average_ig_aps, 60.0);
    assert_eq!(baixada.critical_count, 1);
    assert_eq!(baixada.population, 950_384);

    let empty = summaries
        .iter()
        .find(|s| s.region == Region::AltoTapajos)
        .unwrap();
    assert_eq!(empty.municipality_count, 0);
    assert_eq!(empty.average_ig_aps, 0.0);
}

// ==========================================
// 市镇检索
// ==========================================

#[test]
fn test_search_is_case_and_accent_insensitive() {
    let api = DashboardApi::new(small_dataset(), 1);

    let filter = MunicipalityFilter {
        search: "CUIABA".to_string(),
        region: None,
    };
    let names: Vec<String> = api
        .list_municipalities(&filter)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Cuiabá"]);

    let filter = MunicipalityFilter {
        search: "agua".to_string(),
        region: None,
    };
    assert_eq!(api.list_municipalities(&filter)[0].name, "Água Boa");
}

#[test]
fn test_region_filter_and_sorting() {
    let api = DashboardApi::new(small_dataset(), 1);

    let all = api.list_municipalities(&MunicipalityFilter::default());
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Água Boa", "Canarana", "Cuiabá", "Várzea Grande"]);

    let filter = MunicipalityFilter {
        search: String::new(),
        region: Some(Region::MedioAraguaia),
    };
    let names: Vec<String> = api
        .list_municipalities(&filter)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Água Boa", "Canarana"]);

    let filter = MunicipalityFilter {
        search: "cuia".to_string(),
        region: Some(Region::MedioAraguaia),
    };
    assert!(api.list_municipalities(&filter).is_empty());
}

#[test]
fn test_get_municipality_not_found() {
    let api = DashboardApi::new(small_dataset(), 1);
    assert_eq!(api.get_municipality(1201).unwrap().name, "Água Boa");
    assert!(matches!(api.get_municipality(42), Err(ApiError::NotFound(_))));
}

// ==========================================
// 预测与对标
// ==========================================

#[test]
fn test_projection_for_municipality() {
    let api = DashboardApi::new(small_dataset(), 1);
    let projection = api.get_projection(1203).unwrap();

    assert_eq!(projection.new_avoidable_admissions, 24);
    assert_eq!(projection.financial_impact, 144_000.0);
    assert_eq!(projection.saturation_risk, SaturationRisk::Moderate);
}

#[test]
fn test_comparison_series_shape() {
    let api = DashboardApi::new(small_dataset(), 1);
    let series = api.get_comparison_series(111).unwrap();
    let record = api.get_municipality(111).unwrap();

    assert_eq!(series.len(), 4);
    // 区域平均 60.0, 全州平均 62.5
    let regional_offset = (60.0 - 58.0) * 0.8;
    let state_offset = (62.5 - 58.0) * 0.9;
    for (point, history) in series.iter().zip(record.history.iter()) {
        assert_eq!(point.period, history.period);
        assert_eq!(point.municipality, history.value);

        let regional = point.regional_average - history.value - regional_offset;
        let state = point.state_average - history.value - state_offset;
        assert!((-1.06..=1.06).contains(&regional), "regional jitter {}", regional);
        assert!((-1.06..=1.06).contains(&state), "state jitter {}", state);
    }
}

#[test]
fn test_comparison_series_reproducible_with_same_seed() {
    let a = DashboardApi::new(small_dataset(), 9);
    let b = DashboardApi::new(small_dataset(), 9);
    assert_eq!(
        a.get_comparison_series(101).unwrap(),
        b.get_comparison_series(101).unwrap()
    );
}

#[test]
fn test_generated_dataset_through_api() {
    let records: Arc<[MunicipalityRecord]> = DatasetGenerator::new().generate_seeded(42).into();
    let api = DashboardApi::new(records.clone(), 42);

    let stats = api.get_dashboard_stats();
    assert_eq!(stats.municipality_count, records.len());
    assert_eq!(
        stats.critical_count,
        records.iter().filter(|r| r.ig_aps < 60.0).count()
    );

    let region_total: usize = api.list_regions().iter().map(|s| s.municipality_count).sum();
    assert_eq!(region_total, records.len());
}
