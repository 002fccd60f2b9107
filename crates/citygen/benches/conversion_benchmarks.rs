//! Conversion performance benchmarks.
//!
//! Measures loading (parse + filter) and rendering across table sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use citygen::codegen::{self, RenderConfig};
use citygen::{CityRecord, Converter};
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate a synthetic city table with the specified number of rows.
///
/// Every tenth row has an unparseable latitude so the skip path is exercised.
fn generate_city_table(rows: usize) -> String {
    let mut data = String::from(",城市ID,行政归属,城市简称,拼音,lat,lon\n");

    for row in 0..rows {
        let lat = if row % 10 == 9 {
            "n/a".to_string()
        } else {
            format!("{:.6}", 18.0 + (row % 3500) as f64 * 0.01)
        };
        data.push_str(&format!(
            "{},ID{:08},省份{},城市{},City{},{},{:.6}\n",
            row,
            row,
            row % 34,
            row,
            row,
            lat,
            73.5 + (row % 6000) as f64 * 0.01
        ));
    }

    data
}

fn generate_records(rows: usize) -> Vec<CityRecord> {
    (0..rows)
        .map(|row| {
            CityRecord::new(
                format!("ID{:08}", row),
                format!("省份{}", row % 34),
                format!("城市{}", row),
                format!("City{}", row),
                18.0 + (row % 3500) as f64 * 0.01,
                73.5 + (row % 6000) as f64 * 0.01,
            )
        })
        .collect()
}

/// Benchmark loading tables of various sizes.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_city_table(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let converter = Converter::new();
                    black_box(converter.load(temp.path()).unwrap())
                },
            )
        });
    }

    group.finish();
}

/// Benchmark rendering the generated sources.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = RenderConfig::default();

    for rows in [100, 1_000, 10_000].iter() {
        let records = generate_records(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &records, |b, records| {
            b.iter(|| black_box(codegen::render(records, "city_data.h", &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
