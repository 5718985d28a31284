use criterion::{black_box, criterion_group, criterion_main, Criterion};

use col_reorder::data::reorder::relocate;
use col_reorder::persist::state;
use col_reorder::{Column, TableHost, TableModel, TableRow};

/// Host stub with flat geometry; every affordance is the default no-op
struct BenchHost {
    widths: Vec<f64>,
}

impl TableHost for BenchHost {
    fn table_left(&self) -> f64 {
        0.0
    }

    fn table_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    fn header_origin(&self, visible_index: usize) -> (f64, f64) {
        (self.widths[..visible_index].iter().sum(), 0.0)
    }

    fn rendered_width(&self, visible_index: usize) -> f64 {
        self.widths[visible_index]
    }

    fn scroll_x(&self) -> bool {
        false
    }

    fn scroll_y(&self) -> bool {
        false
    }
}

fn create_test_model(columns: usize, rows: usize) -> TableModel {
    let mut model = TableModel::new();
    for i in 0..columns {
        model.add_column(Column::new(format!("col{}", i)).with_accessor(i));
    }
    for r in 0..rows {
        let row = TableRow::new((0..columns).map(|c| format!("r{}c{}", r, c)).collect());
        model.add_row(row).unwrap();
    }
    model
}

fn benchmark_relocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("relocate");

    for &rows in &[1_000usize, 5_000, 20_000] {
        group.bench_function(format!("60_cols_{}_rows", rows), |b| {
            let model = create_test_model(60, rows);
            let mut host = BenchHost {
                widths: vec![100.0; 60],
            };
            b.iter(|| {
                let mut m = model.clone();
                // worst case: first column to last slot shifts every cache
                relocate(&mut m, &mut host, black_box(0), black_box(59)).unwrap();
                m
            });
        });
    }

    group.finish();
}

fn benchmark_apply_order(c: &mut Criterion) {
    let model = create_test_model(60, 5_000);
    let reversed: Vec<usize> = (0..60).rev().collect();

    c.bench_function("apply_order_reversed_60_cols_5k_rows", |b| {
        let mut host = BenchHost {
            widths: vec![100.0; 60],
        };
        b.iter(|| {
            let mut m = model.clone();
            state::apply_order(&mut m, &mut host, black_box(&reversed)).unwrap();
            m
        });
    });
}

criterion_group!(benches, benchmark_relocate, benchmark_apply_order);
criterion_main!(benches);
