// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use parkview::db::Database;
use parkview::filter::{FilterMode, RecordView};
use parkview::model::Record;
use parkview::store;

fn load_records() -> Vec<Record> {
    let (teams, stadiums) = store::load_seed().expect("seed parses");
    Database::from_tables(teams, stadiums)
        .teams_and_stadiums()
        .expect("seed joins")
}

fn bench_filter(c: &mut Criterion) {
    let records = load_records();

    c.bench_function("filter_all", |b| {
        b.iter(|| {
            let view = RecordView::build(black_box(&records), FilterMode::All);
            black_box(view.total_seating)
        })
    });

    c.bench_function("filter_open_roof", |b| {
        b.iter(|| {
            let view = RecordView::build(black_box(&records), FilterMode::OpenRoof);
            black_box(view.len())
        })
    });

    c.bench_function("filter_max_distance", |b| {
        b.iter(|| {
            let view = RecordView::build(black_box(&records), FilterMode::MaxCenterField);
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
