use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::category::Category;
use service::category::CategoryRepository;
use service::storage::CategoryStore;

fn bench_store(c: &mut Criterion) {
    let store = Arc::new(CategoryStore::new());
    for i in 0..1_000 {
        store.create(format!("seed-{i}"));
    }

    c.bench_function("category_store_get", |b| {
        b.iter(|| store.get(500));
    });

    c.bench_function("category_store_create_update_delete", |b| {
        b.iter(|| {
            let created = store.create("Bench".into());
            store.update(created.id, Category { id: created.id, name: "Bench2".into() });
            store.delete(created.id)
        });
    });

    c.bench_function("category_store_contended_create_4_threads", |b| {
        b.iter(|| {
            std::thread::scope(|s| {
                for _ in 0..4 {
                    let store = &store;
                    s.spawn(move || {
                        for _ in 0..64 {
                            let c = store.create("Contended".into());
                            store.delete(c.id);
                        }
                    });
                }
            });
        });
    });
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
