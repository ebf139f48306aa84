use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reorder_core::order::{OrderStore, OrderedItem, SelectionSet};
use reorder_core::view::Projector;

fn catalog(size: usize) -> Vec<OrderedItem> {
    (0..size)
        .map(|i| {
            OrderedItem::new(format!("benefit-{}", i), i as i64 + 1)
                .with_field("title", format!("Benefit number {}", i))
                .with_field("category", if i % 3 == 0 { "Food" } else { "Leisure" })
        })
        .collect()
}

/// Drag the last item to the top (widest bounded rotation)
fn bench_move_to_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_to_top");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || OrderStore::load(catalog(size)).unwrap(),
                |mut store| {
                    let id = format!("benefit-{}", size - 1);
                    black_box(store.move_to_top(&id).unwrap());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Short drag near the end of a large list (diff stays small)
fn bench_short_move(c: &mut Criterion) {
    c.bench_function("short_move_10k", |b| {
        b.iter_batched(
            || OrderStore::load(catalog(10000)).unwrap(),
            |mut store| {
                black_box(store.move_item("benefit-9990", 9995).unwrap());
                black_box(store.pending_changes().unwrap());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Block move of every tenth item with full renumber
fn bench_batch_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_move");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let store = OrderStore::load(catalog(size)).unwrap();
                    let selection: SelectionSet =
                        (0..size).step_by(10).map(|i| format!("benefit-{}", i)).collect();
                    (store, selection)
                },
                |(mut store, mut selection)| {
                    black_box(store.batch_move(&mut selection, 2).unwrap());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Filter and page through a large catalog
fn bench_project(c: &mut Criterion) {
    let store = OrderStore::load(catalog(10000)).unwrap();
    let projector = Projector::default();

    c.bench_function("project_filtered_10k", |b| {
        b.iter(|| {
            black_box(projector.project(store.current_order(), "number 9", 3, 25));
        });
    });
}

criterion_group!(
    benches,
    bench_move_to_top,
    bench_short_move,
    bench_batch_move,
    bench_project
);
criterion_main!(benches);
