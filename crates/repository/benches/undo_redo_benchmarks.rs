use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use undoable_core::{Aggregate, Entity};
use undoable_mutations::{InMemoryMutationStore, MutationStore, NoOpMutationStore};
use undoable_repository::{AggregateRepository, InMemoryAggregateRepository};

undoable_core::entity_key! {
    struct ItemId;
}

#[derive(Debug, Clone)]
struct Item {
    id: ItemId,
    quantity: i64,
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Item {}

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: ItemId::new(),
            quantity: i as i64,
        })
        .collect()
}

/// Add + update every item, then undo and redo the whole history.
fn bench_history_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_round_trip");

    for size in [100usize, 1_000, 10_000] {
        let seed = items(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &seed, |b, seed| {
            b.iter(|| {
                let store = Rc::new(InMemoryMutationStore::new());
                let repo = InMemoryAggregateRepository::new(store.clone());

                for item in seed {
                    repo.add(item.clone(), None).unwrap();
                    let bumped = Item {
                        quantity: item.quantity + 1,
                        ..item.clone()
                    };
                    repo.update(bumped, None).unwrap();
                }
                while store.can_undo() {
                    store.undo().unwrap();
                }
                while store.can_redo() {
                    store.redo().unwrap();
                }
                black_box(repo.len())
            });
        });
    }

    group.finish();
}

fn recording_store() -> Rc<dyn MutationStore> {
    Rc::new(InMemoryMutationStore::new())
}

fn no_op_store() -> Rc<dyn MutationStore> {
    Rc::new(NoOpMutationStore::new())
}

/// Cost of tracking: the same adds against a recording and a no-op store.
fn bench_tracking_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracking_overhead");
    let seed = items(1_000);
    group.throughput(Throughput::Elements(seed.len() as u64));

    let stores: [(&str, fn() -> Rc<dyn MutationStore>); 2] =
        [("in_memory", recording_store), ("no_op", no_op_store)];

    for (name, make_store) in stores {
        group.bench_function(name, |b| {
            b.iter(|| {
                let repo = InMemoryAggregateRepository::new(make_store());
                for item in &seed {
                    repo.add(item.clone(), None).unwrap();
                }
                black_box(repo.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_history_round_trip, bench_tracking_overhead);
criterion_main!(benches);
