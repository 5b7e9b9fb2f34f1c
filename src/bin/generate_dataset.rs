// Dev utility: dump a seeded synthetic dataset to CSV (one row per municipality).
//
// Usage:
//   cargo run --bin generate_dataset -- [seed] [output.csv]
//
// Without an output path the CSV is written to stdout.

use anyhow::Context;
use serde::Serialize;
use ses_mt_360::engine::projection::ProjectionEngine;
use ses_mt_360::engine::DatasetGenerator;
use std::io;

const DEFAULT_SEED: u64 = 360;

#[derive(Serialize)]
struct DatasetRow<'a> {
    id: u32,
    name: &'a str,
    region: &'a str,
    population: u32,
    ig_aps: f64,
    isf: f64,
    aps_coverage_pct: f64,
    hypertension_coverage_pct: f64,
    avoidable_admissions: u32,
    estimated_hospital_cost: f64,
    history: String,
    projected_new_admissions: u32,
    projected_financial_impact: f64,
    saturation_risk: String,
}

fn main() -> anyhow::Result<()> {
    ses_mt_360::logging::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid seed: {}", raw))?,
        None => DEFAULT_SEED,
    };
    let output = args.next();

    let records = DatasetGenerator::new().generate_seeded(seed);
    let projection = ProjectionEngine::new();

    let writer: Box<dyn io::Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("cannot create {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in &records {
        let impact = projection.project(record.ig_aps, record.avoidable_admissions as f64);
        let history = record
            .history
            .iter()
            .map(|p| format!("{}={}", p.period, p.value))
            .collect::<Vec<_>>()
            .join(";");

        csv_writer.serialize(DatasetRow {
            id: record.id,
            name: &record.name,
            region: record.region.name(),
            population: record.population,
            ig_aps: record.ig_aps,
            isf: record.isf_score(),
            aps_coverage_pct: record.aps_coverage_pct,
            hypertension_coverage_pct: record.hypertension_coverage_pct,
            avoidable_admissions: record.avoidable_admissions,
            estimated_hospital_cost: record.estimated_hospital_cost,
            history,
            projected_new_admissions: impact.new_avoidable_admissions,
            projected_financial_impact: impact.financial_impact,
            saturation_risk: impact.saturation_risk.to_string(),
        })?;
    }
    csv_writer.flush()?;

    tracing::info!(seed, count = records.len(), output = ?output, "dataset written");
    Ok(())
}
